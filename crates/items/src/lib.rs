//! Items domain module.
//!
//! This crate contains the shopping-cart item record and the store that holds
//! it, implemented as plain in-process logic (no HTTP, no persistence).

pub mod item;
pub mod store;

pub use item::{Item, ItemUpdate};
pub use store::{InMemoryItemStore, ItemStore};
