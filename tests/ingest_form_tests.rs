// tests/ingest_form_tests.rs
mod common;

use bracelet_shop::ingest::ParsedForm;
use common::*;
use tempfile::TempDir;

#[test]
fn missing_file_field_normalizes_to_empty_sequence() {
  let form = ParsedForm::default();
  assert!(form.files("extraPhotos").is_empty());
  assert!(form.first_file("photo").is_none());
  assert!(form.text("name").is_none());
}

#[tokio::test]
async fn single_and_repeated_files_normalize_to_sequences() {
  setup_tracing();
  let dir = TempDir::new().unwrap();

  let mut form = ParsedForm::default();
  form
    .fields
    .insert("name".to_string(), "Charm bracelet".to_string());
  form.files.insert(
    "photo".to_string(),
    vec![write_upload(dir.path(), "main.png", b"main", Some("image/png")).await],
  );
  form.files.insert(
    "extraPhotos".to_string(),
    vec![
      write_upload(dir.path(), "extra-1.png", b"one", Some("image/png")).await,
      write_upload(dir.path(), "extra-2.png", b"two", Some("image/png")).await,
    ],
  );

  assert_eq!(form.text("name"), Some("Charm bracelet"));
  assert_eq!(form.files("photo").len(), 1);
  assert!(form.first_file("photo").is_some());

  let extras = form.files("extraPhotos");
  assert_eq!(extras.len(), 2);
  assert_eq!(extras[0].file_name.as_deref(), Some("extra-1.png"));
  assert_eq!(extras[1].file_name.as_deref(), Some("extra-2.png"));
}

#[tokio::test]
async fn cleanup_removes_remaining_files_and_tolerates_missing_ones() {
  setup_tracing();
  let dir = TempDir::new().unwrap();

  let kept = write_upload(dir.path(), "kept.png", b"kept", Some("image/png")).await;
  let removed = write_upload(dir.path(), "consumed.png", b"consumed", Some("image/png")).await;
  let kept_path = kept.path.clone();
  let removed_path = removed.path.clone();

  // Simulate the inline strategy having consumed one file already.
  tokio::fs::remove_file(&removed_path).await.unwrap();

  let mut form = ParsedForm::default();
  form.files.insert("extraPhotos".to_string(), vec![kept, removed]);
  form.cleanup().await;

  assert!(!kept_path.exists(), "cleanup removes files still on disk");
  assert!(!removed_path.exists());
}
