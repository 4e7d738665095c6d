//! `SeaORM` entities.

pub mod category;
pub mod items;
