//! Content-addressed image storage using Apache OpenDAL.
//!
//! Uploaded images are stored under `hex(sha256(bytes)) + ".jpg"` in a
//! single directory. Identical uploads share one file, nothing is ever
//! garbage collected, and reads of a missing name fall back to a reserved
//! default image.
//!
//! ```text
//! save(bytes)  ──► sha256 ──► "<hex>.jpg" ──► op.write
//! load(name)   ──► validate ──► op.stat ──┬─► op.read(name)
//!                                          └─► op.read(default)
//! ```

mod config;
mod error;
mod store;

pub use config::ImageStoreConfig;
pub use error::ImageError;
pub use store::{ImageStore, StoredImage, content_name};
