// src/state.rs

use crate::config::AppConfig;
use crate::pipelines::{OrderPipeline, ProductPipeline};
use std::sync::Arc;

/// Shared state of the catalog server.
#[derive(Clone)]
pub struct CatalogState {
  pub products: Arc<ProductPipeline>,
  pub config: Arc<AppConfig>,
}

/// Shared state of the order server.
#[derive(Clone)]
pub struct OrderState {
  pub orders: Arc<OrderPipeline>,
  pub config: Arc<AppConfig>,
}
