// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Form Parse Error: {0}")]
  Multipart(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Database(#[from] mongodb::error::Error),

  #[error("Image Upload Error: {0}")]
  Upload(#[from] reqwest::Error),

  #[error("Image Service Error: {0}")]
  ImageService(String),

  #[error("File I/O Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<actix_multipart::MultipartError> for AppError {
  fn from(err: actix_multipart::MultipartError) -> Self {
    AppError::Multipart(err.to_string())
  }
}

// Allow anyhow::Error to be converted into AppError::Internal for
// convenience in callers that use `?` on anyhow results.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response.
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"success": false, "message": m})),
      AppError::Multipart(m) => {
        HttpResponse::BadRequest().json(json!({"success": false, "message": format!("Form parse error: {}", m)}))
      }
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"success": false, "message": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Configuration issue", "detail": m}))
      }
      AppError::Database(e) => HttpResponse::InternalServerError()
        .json(json!({"success": false, "message": "Database operation failed", "detail": e.to_string()})),
      AppError::Upload(e) => HttpResponse::InternalServerError()
        .json(json!({"success": false, "message": "Image upload failed", "detail": e.to_string()})),
      AppError::ImageService(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Image service error", "detail": m}))
      }
      AppError::Io(e) => HttpResponse::InternalServerError()
        .json(json!({"success": false, "message": "File handling failed", "detail": e.to_string()})),
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
