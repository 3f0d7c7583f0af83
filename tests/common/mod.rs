// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use bracelet_shop::ingest::UploadedFile;
use bracelet_shop::models::OrderDraft;
use std::path::Path;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// An order draft with all nine required fields present, matching the
/// storefront's example submission.
pub fn complete_order_draft() -> OrderDraft {
  OrderDraft {
    name: Some("A".to_string()),
    email: Some("a@b.com".to_string()),
    address: Some("x".to_string()),
    age: Some(20),
    phone: Some("123".to_string()),
    province: Some("P".to_string()),
    city: Some("C".to_string()),
    bracelet_color: Some("red".to_string()),
    gender: Some("male".to_string()),
  }
}

/// Writes `bytes` to a file inside `dir` and wraps it as an uploaded
/// file handle the way the ingestor would.
pub async fn write_upload(dir: &Path, file_name: &str, bytes: &[u8], content_type: Option<&str>) -> UploadedFile {
  let path = dir.join(file_name);
  tokio::fs::write(&path, bytes).await.expect("write temp upload");
  UploadedFile {
    path,
    file_name: Some(file_name.to_string()),
    content_type: content_type.map(str::to_string),
  }
}
