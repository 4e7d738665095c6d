//! Core business logic for Bazaar.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types, the repository seam, and image storage live here.
//!
//! # Modules
//!
//! - `item` - Item submission, listing, positional lookup, and search
//! - `image` - Content-addressed image storage with default fallback

pub mod image;
pub mod item;
