// src/web/mod.rs

pub mod handlers;
pub mod routes;

pub use routes::{configure_catalog_routes, configure_order_routes, not_found_handler};
