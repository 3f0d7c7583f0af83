// src/pipelines/order_pipeline.rs

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::Store;
use crate::errors::Result;
use crate::models::{ApiOrder, Order, OrderDraft};

/// Validates order submissions against the required fields and persists
/// them. Orders are immutable once created; only create and list exist.
pub struct OrderPipeline {
  store: Arc<Store>,
}

impl OrderPipeline {
  pub fn new(store: Arc<Store>) -> Self {
    Self { store }
  }

  /// Validates the draft and persists one order document. Validation
  /// failure means nothing is written.
  #[instrument(skip(self, draft))]
  pub async fn create(&self, draft: OrderDraft) -> Result<ApiOrder> {
    let order = draft.validate(Utc::now())?;
    let id = self.store.insert_order(&order).await?;
    info!(order_id = %id, "Order created.");

    Ok(ApiOrder::from_stored(Order {
      id: Some(id),
      ..order
    }))
  }

  /// All orders, newest first.
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<ApiOrder>> {
    let orders = self.store.list_orders().await?;
    Ok(orders.into_iter().map(ApiOrder::from_stored).collect())
  }
}
