// src/images/mod.rs

//! Image materialization: turning an uploaded-file handle into the
//! storable representation of an image.
//!
//! Two interchangeable strategies implement the same contract, selected
//! from configuration at startup: `InlineImages` reads the bytes into
//! the document itself, `CloudinaryImages` uploads them to the hosted
//! image service and keeps only the returned URL.

pub mod inline;
pub mod remote;

use async_trait::async_trait;
use futures_util::future::try_join_all;
use std::sync::Arc;

use crate::config::{AppConfig, ImageStorageKind};
use crate::errors::{AppError, Result};
use crate::ingest::UploadedFile;
use crate::models::StoredImage;

pub use inline::InlineImages;
pub use remote::CloudinaryImages;

/// The materializer contract: one uploaded file in, one storable image
/// representation out, or a failure that invalidates the whole request.
#[async_trait]
pub trait ImageMaterializer: Send + Sync {
  async fn materialize(&self, upload: &UploadedFile) -> Result<StoredImage>;
}

/// Materializes an independent collection of files concurrently,
/// waiting for all of them before assembling the result. The aggregate
/// preserves input order; a single failing file fails the whole batch.
pub async fn materialize_batch(
  materializer: &dyn ImageMaterializer,
  uploads: &[UploadedFile],
) -> Result<Vec<StoredImage>> {
  try_join_all(uploads.iter().map(|upload| materializer.materialize(upload))).await
}

/// Builds the strategy a deployment is configured for.
pub fn materializer_from_config(config: &AppConfig) -> Result<Arc<dyn ImageMaterializer>> {
  match config.image_storage {
    ImageStorageKind::Inline => Ok(Arc::new(InlineImages::new())),
    ImageStorageKind::Cloudinary => {
      let cloudinary = config
        .cloudinary
        .as_ref()
        .ok_or_else(|| AppError::Config("IMAGE_STORAGE is 'cloudinary' but credentials are missing".to_string()))?;
      Ok(Arc::new(CloudinaryImages::new(cloudinary.clone())))
    }
  }
}
