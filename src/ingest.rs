// src/ingest.rs

//! The multipart ingestor.
//!
//! Parses an incoming form submission into text field values and
//! uploaded-file handles, streaming uploaded bytes to collision-free
//! temporary paths as a byproduct of parsing. Cleanup of those temp
//! files belongs to the caller (`ParsedForm::cleanup`), not to the
//! ingestor.

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::warn;
use uuid::Uuid;

use crate::errors::{AppError, Result};

/// One uploaded file, written to ephemeral local storage.
#[derive(Debug, Clone)]
pub struct UploadedFile {
  /// Temporary path holding the uploaded bytes.
  pub path: PathBuf,
  /// The client-declared file name, if any.
  pub file_name: Option<String>,
  /// The client-declared content type, if any.
  pub content_type: Option<String>,
}

/// The structured result of parsing one multipart submission.
#[derive(Debug, Default)]
pub struct ParsedForm {
  pub fields: HashMap<String, String>,
  pub files: HashMap<String, Vec<UploadedFile>>,
}

impl ParsedForm {
  pub fn text(&self, name: &str) -> Option<&str> {
    self.fields.get(name).map(String::as_str)
  }

  pub fn first_file(&self, name: &str) -> Option<&UploadedFile> {
    self.files.get(name).and_then(|list| list.first())
  }

  /// All files submitted under one field name. A single file and
  /// repeated files both normalize to a sequence; a missing field is an
  /// empty one.
  pub fn files(&self, name: &str) -> &[UploadedFile] {
    self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Best-effort removal of every temporary file still on disk. Files
  /// already consumed (the inline strategy deletes eagerly) are skipped
  /// silently.
  pub async fn cleanup(self) {
    for file in self.files.into_values().flatten() {
      match tokio::fs::remove_file(&file.path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %file.path.display(), error = %e, "Failed to remove temporary upload"),
      }
    }
  }
}

/// Parses a multipart request body, writing each uploaded file to a
/// fresh path under `upload_dir`. A malformed body fails with
/// `AppError::Multipart`, which the HTTP layer maps to a client error.
pub async fn parse_form(mut payload: Multipart, upload_dir: &Path) -> Result<ParsedForm> {
  let mut form = ParsedForm::default();

  while let Some(mut field) = payload.try_next().await? {
    let name = field.name().to_string();
    let file_name = field.content_disposition().get_filename().map(str::to_string);
    let content_type = field.content_type().map(|mime| mime.to_string());

    match file_name {
      Some(file_name) => {
        let path = temp_path(upload_dir, &file_name);
        let mut out = tokio::fs::File::create(&path).await?;
        while let Some(chunk) = field.try_next().await? {
          out.write_all(&chunk).await?;
        }
        out.flush().await?;

        form.files.entry(name).or_default().push(UploadedFile {
          path,
          file_name: Some(file_name),
          content_type,
        });
      }
      None => {
        let mut value = Vec::new();
        while let Some(chunk) = field.try_next().await? {
          value.extend_from_slice(&chunk);
        }
        let value =
          String::from_utf8(value).map_err(|_| AppError::Multipart(format!("Field '{}' is not valid UTF-8", name)))?;
        form.fields.insert(name, value);
      }
    }
  }

  Ok(form)
}

/// A collision-free path inside `upload_dir`, keeping the client's file
/// extension so downstream consumers can rely on it.
fn temp_path(upload_dir: &Path, file_name: &str) -> PathBuf {
  let extension = Path::new(file_name)
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| format!(".{}", ext))
    .unwrap_or_default();
  upload_dir.join(format!("upload-{}{}", Uuid::new_v4(), extension))
}
