// src/web/handlers/product_handlers.rs

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::ingest;
use crate::state::CatalogState;

#[instrument(name = "handler::create_product", skip(state, payload))]
pub async fn create_product_handler(
  state: web::Data<CatalogState>,
  payload: Multipart,
) -> Result<HttpResponse, AppError> {
  let form = ingest::parse_form(payload, &state.config.upload_dir).await?;
  info!(
    text_fields = form.fields.len(),
    file_fields = form.files.len(),
    "Product form parsed."
  );

  let created = state.products.create(form).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Product created.",
      "productId": created.id,
      "product": created.product,
  })))
}

#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products_handler(state: web::Data<CatalogState>) -> Result<HttpResponse, AppError> {
  let products = state.products.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::delete_product", skip(state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  state: web::Data<CatalogState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  state.products.delete(&product_id).await?;
  Ok(HttpResponse::Ok().json(json!({"message": "Product deleted.", "productId": product_id})))
}
