// src/lib.rs

//! Backends for the bracelet shop: a product catalog with image upload
//! and an order-submission API, both thin REST layers over MongoDB.
//!
//! The catalog stores product images either inline in the document
//! (binary blob + content type) or as URLs on a hosted image service;
//! the strategy is picked from configuration at startup. The order
//! service validates and persists bracelet customization orders.
//!
//! Two binaries (`catalog_server`, `order_server`) wire these modules
//! into standalone actix-web servers.

pub mod config;
pub mod db;
pub mod errors;
pub mod images;
pub mod ingest;
pub mod models;
pub mod pipelines;
pub mod state;
pub mod web;

// --- Re-exports for the public API ---

pub use crate::config::{AppConfig, ImageStorageKind};
pub use crate::db::Store;
pub use crate::errors::{AppError, Result};
pub use crate::state::{CatalogState, OrderState};
