// src/bin/order_server.rs

use actix_web::{error::InternalError, web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use bracelet_shop::pipelines::OrderPipeline;
use bracelet_shop::web::{configure_order_routes, not_found_handler};
use bracelet_shop::{AppConfig, OrderState, Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting order submission server...");

  let config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let store = match Store::connect(&config.mongo_url, &config.db_name).await {
    Ok(store) => Arc::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  let app_state = OrderState {
    orders: Arc::new(OrderPipeline::new(store.clone())),
    config: config.clone(),
  };

  let bind_address = config.bind_address();
  tracing::info!("Attempting to bind server to {}...", bind_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      // Malformed JSON bodies get the same response shape as validation
      // failures instead of actix's default plain-text 400.
      .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": format!("Invalid JSON body: {}", err),
        }));
        InternalError::from_response(err, body).into()
      }))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_order_routes)
      .default_service(web::route().to(not_found_handler))
  })
  .bind(&bind_address)?
  .run();

  let result = server.await;

  if let Ok(store) = Arc::try_unwrap(store) {
    store.shutdown().await;
  }

  result
}
