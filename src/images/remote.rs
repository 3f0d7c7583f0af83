// src/images/remote.rs

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha1::{Digest, Sha1};
use tracing::{info, instrument};

use crate::config::CloudinaryConfig;
use crate::errors::{AppError, Result};
use crate::images::ImageMaterializer;
use crate::ingest::UploadedFile;
use crate::models::StoredImage;

/// Remote strategy: file contents are uploaded to Cloudinary and only
/// the service-issued retrieval URL is stored. The temp file is left
/// for the pipeline-level sweep to remove.
pub struct CloudinaryImages {
  http: reqwest::Client,
  config: CloudinaryConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
  secure_url: String,
}

impl CloudinaryImages {
  pub fn new(config: CloudinaryConfig) -> Self {
    Self {
      http: reqwest::Client::new(),
      config,
    }
  }

  fn upload_url(&self) -> String {
    format!("{}/v1_1/{}/image/upload", self.config.api_base, self.config.cloud_name)
  }
}

/// The signature Cloudinary expects for a signed upload: the SHA-1 hex
/// digest of the sorted parameter string followed by the API secret.
/// With `timestamp` as the only signed parameter this is
/// `sha1("timestamp=<t><secret>")`.
pub fn upload_signature(timestamp: i64, api_secret: &str) -> String {
  let payload = format!("timestamp={}{}", timestamp, api_secret);
  hex::encode(Sha1::digest(payload.as_bytes()))
}

#[async_trait]
impl ImageMaterializer for CloudinaryImages {
  #[instrument(skip(self, upload), fields(path = %upload.path.display()))]
  async fn materialize(&self, upload: &UploadedFile) -> Result<StoredImage> {
    let bytes = tokio::fs::read(&upload.path).await?;

    let timestamp = Utc::now().timestamp();
    let signature = upload_signature(timestamp, &self.config.api_secret);

    let mut part = reqwest::multipart::Part::bytes(bytes);
    if let Some(file_name) = &upload.file_name {
      part = part.file_name(file_name.clone());
    }
    if let Some(content_type) = &upload.content_type {
      part = part
        .mime_str(content_type)
        .map_err(|e| AppError::ImageService(format!("Invalid content type '{}': {}", content_type, e)))?;
    }

    let form = reqwest::multipart::Form::new()
      .text("api_key", self.config.api_key.clone())
      .text("timestamp", timestamp.to_string())
      .text("signature", signature)
      .part("file", part);

    let response = self.http.post(self.upload_url()).multipart(form).send().await?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(AppError::ImageService(format!(
        "Cloudinary upload failed with status {}: {}",
        status, body
      )));
    }

    let uploaded: UploadResponse = response.json().await?;
    info!(url = %uploaded.secure_url, "Image uploaded to Cloudinary.");
    Ok(StoredImage::Url(uploaded.secure_url))
  }
}
