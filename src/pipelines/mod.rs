// src/pipelines/mod.rs

//! Request pipelines. Each handler is a direct sequence of
//! parse → validate → one document write/read → respond, so these are
//! plain structs owning their injected collaborators rather than a
//! workflow engine.

pub mod order_pipeline;
pub mod product_pipeline;

pub use order_pipeline::OrderPipeline;
pub use product_pipeline::{CreatedProduct, ProductPipeline};
