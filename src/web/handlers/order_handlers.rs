// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::OrderDraft;
use crate::state::OrderState;

/// Plain status text confirming the service is up.
pub async fn status_handler() -> HttpResponse {
  HttpResponse::Ok().body("Bracelet order API is running")
}

#[instrument(name = "handler::create_order", skip(state, draft))]
pub async fn create_order_handler(
  state: web::Data<OrderState>,
  draft: web::Json<OrderDraft>,
) -> Result<HttpResponse, AppError> {
  let order = state.orders.create(draft.into_inner()).await?;
  info!(order_id = %order.id, "Order submission accepted.");

  Ok(HttpResponse::Created().json(json!({
      "success": true,
      "order": order,
  })))
}

#[instrument(name = "handler::list_orders", skip(state))]
pub async fn list_orders_handler(state: web::Data<OrderState>) -> Result<HttpResponse, AppError> {
  let orders = state.orders.list().await?;
  info!("Successfully fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}
