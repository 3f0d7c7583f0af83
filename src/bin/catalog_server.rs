// src/bin/catalog_server.rs

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use bracelet_shop::images::materializer_from_config;
use bracelet_shop::pipelines::ProductPipeline;
use bracelet_shop::web::{configure_catalog_routes, not_found_handler};
use bracelet_shop::{AppConfig, CatalogState, Store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting product catalog server...");

  let config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The ingestor writes uploads here before they are materialized.
  tokio::fs::create_dir_all(&config.upload_dir).await?;

  let store = match Store::connect(&config.mongo_url, &config.db_name).await {
    Ok(store) => Arc::new(store),
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  let images = match materializer_from_config(&config) {
    Ok(images) => images,
    Err(e) => {
      tracing::error!(error = %e, "Failed to build the image materializer.");
      panic!("Image storage configuration error: {}", e);
    }
  };

  let app_state = CatalogState {
    products: Arc::new(ProductPipeline::new(store.clone(), images)),
    config: config.clone(),
  };

  let bind_address = config.bind_address();
  tracing::info!("Attempting to bind server to {}...", bind_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_catalog_routes)
      .default_service(web::route().to(not_found_handler))
  })
  .bind(&bind_address)?
  .run();

  let result = server.await;

  // Explicit store shutdown once the server has stopped and released
  // its state clones.
  if let Ok(store) = Arc::try_unwrap(store) {
    store.shutdown().await;
  }

  result
}
