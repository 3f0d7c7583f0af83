// tests/error_response_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::ResponseError;
use bracelet_shop::errors::AppError;
use common::*;

#[test]
fn validation_and_parse_errors_are_client_errors() {
  setup_tracing();
  let response = AppError::Validation("All fields are required and must be non-empty.".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let response = AppError::Multipart("unexpected end of stream".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn not_found_maps_to_404() {
  let response = AppError::NotFound("Product with id 'abc' not found.".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn dependency_failures_are_server_errors() {
  let response = AppError::Config("Missing environment variable 'MONGO_URL'".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let response = AppError::ImageService("Cloudinary upload failed with status 401".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let io = std::io::Error::other("disk full");
  let response = AppError::Io(io).error_response();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let response = AppError::Internal("unexpected".to_string()).error_response();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
