// src/models/mod.rs

//! Data structures representing stored documents and their API-facing
//! renderings.

pub mod order;
pub mod product;

pub use order::{ApiOrder, Gender, Order, OrderDraft};
pub use product::{ApiProduct, ImageBlob, NewProduct, Product, StoredImage};
