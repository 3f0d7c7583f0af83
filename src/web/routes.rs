// src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::web::handlers::{order_handlers, product_handlers};

/// Routes of the product catalog server.
pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api").service(
      web::scope("/products")
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
    ),
  );
}

/// Routes of the order server.
pub fn configure_order_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(order_handlers::status_handler))
    .service(
      web::scope("/api").service(
        web::scope("/order")
          .route("", web::post().to(order_handlers::create_order_handler))
          .route("", web::get().to(order_handlers::list_orders_handler)),
      ),
    );
}

/// Fallback for any unmatched route: a JSON 404.
pub async fn not_found_handler() -> HttpResponse {
  HttpResponse::NotFound().json(json!({"success": false, "message": "Route not found."}))
}
