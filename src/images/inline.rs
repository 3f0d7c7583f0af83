// src/images/inline.rs

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::errors::Result;
use crate::images::ImageMaterializer;
use crate::ingest::UploadedFile;
use crate::models::{ImageBlob, StoredImage};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Inline strategy: the full file contents become a binary blob inside
/// the product document.
#[derive(Debug, Default)]
pub struct InlineImages;

impl InlineImages {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl ImageMaterializer for InlineImages {
  #[instrument(skip(self, upload), fields(path = %upload.path.display()))]
  async fn materialize(&self, upload: &UploadedFile) -> Result<StoredImage> {
    let read = tokio::fs::read(&upload.path).await;

    // The temp file is removed whether or not the read succeeded, so a
    // failed request never leaks temporary storage.
    if let Err(e) = tokio::fs::remove_file(&upload.path).await {
      if e.kind() != std::io::ErrorKind::NotFound {
        warn!(error = %e, "Failed to remove temporary upload after read");
      }
    }

    let bytes = read?;
    let content_type = upload
      .content_type
      .clone()
      .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

    Ok(StoredImage::Blob(ImageBlob::new(bytes, content_type)))
  }
}
