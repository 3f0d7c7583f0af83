// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Which image materialization strategy a catalog deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStorageKind {
  /// Binary blobs stored inside the product document.
  Inline,
  /// Images uploaded to Cloudinary; documents keep only the URL.
  Cloudinary,
}

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
  pub cloud_name: String,
  pub api_key: String,
  pub api_secret: String,
  /// Overridable for tests pointing at a stand-in server.
  pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub mongo_url: String,
  pub db_name: String,

  /// Where the multipart ingestor writes uploaded files before they are
  /// materialized. Created at startup if missing.
  pub upload_dir: PathBuf,

  pub image_storage: ImageStorageKind,
  pub cloudinary: Option<CloudinaryConfig>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let mongo_url = get_env("MONGO_URL")?;
    let db_name = get_env("MONGO_DB_NAME").unwrap_or_else(|_| "bracelet_shop".to_string());

    let upload_dir = get_env("UPLOAD_DIR")
      .map(PathBuf::from)
      .unwrap_or_else(|_| env::temp_dir().join("bracelet-shop-uploads"));

    let image_storage = match get_env("IMAGE_STORAGE").unwrap_or_else(|_| "inline".to_string()).as_str() {
      "inline" => ImageStorageKind::Inline,
      "cloudinary" => ImageStorageKind::Cloudinary,
      other => {
        return Err(AppError::Config(format!(
          "Invalid IMAGE_STORAGE '{}' (expected 'inline' or 'cloudinary')",
          other
        )))
      }
    };

    // Cloudinary credentials are only required when the remote strategy
    // is selected.
    let cloudinary = match image_storage {
      ImageStorageKind::Cloudinary => Some(CloudinaryConfig {
        cloud_name: get_env("CLOUDINARY_CLOUD_NAME")?,
        api_key: get_env("CLOUDINARY_API_KEY")?,
        api_secret: get_env("CLOUDINARY_API_SECRET")?,
        api_base: get_env("CLOUDINARY_API_BASE").unwrap_or_else(|_| "https://api.cloudinary.com".to_string()),
      }),
      ImageStorageKind::Inline => None,
    };

    tracing::info!(storage = ?image_storage, "Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      mongo_url,
      db_name,
      upload_dir,
      image_storage,
      cloudinary,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
