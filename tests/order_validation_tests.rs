// tests/order_validation_tests.rs
mod common;

use bracelet_shop::errors::AppError;
use bracelet_shop::models::{Gender, OrderDraft};
use chrono::Utc;
use common::*;

fn assert_validation_error(result: Result<bracelet_shop::models::Order, AppError>) {
  match result {
    Err(AppError::Validation(_)) => {}
    other => panic!("expected a validation error, got {:?}", other.map(|o| o.name)),
  }
}

#[test]
fn complete_draft_validates_and_preserves_fields() {
  setup_tracing();
  let now = Utc::now();
  let order = complete_order_draft().validate(now).expect("valid draft");

  assert_eq!(order.name, "A");
  assert_eq!(order.email, "a@b.com");
  assert_eq!(order.address, "x");
  assert_eq!(order.age, 20);
  assert_eq!(order.phone, "123");
  assert_eq!(order.province, "P");
  assert_eq!(order.city, "C");
  assert_eq!(order.bracelet_color, "red");
  assert_eq!(order.gender, Gender::Male);
  assert_eq!(order.created_at, now);
  assert_eq!(order.updated_at, now);
  assert!(order.id.is_none(), "id is assigned by the store, not validation");
}

#[test]
fn each_missing_field_fails_validation() {
  setup_tracing();
  let now = Utc::now();

  let variants: Vec<Box<dyn Fn(&mut OrderDraft)>> = vec![
    Box::new(|d| d.name = None),
    Box::new(|d| d.email = None),
    Box::new(|d| d.address = None),
    Box::new(|d| d.age = None),
    Box::new(|d| d.phone = None),
    Box::new(|d| d.province = None),
    Box::new(|d| d.city = None),
    Box::new(|d| d.bracelet_color = None),
    Box::new(|d| d.gender = None),
  ];

  for strip in variants {
    let mut draft = complete_order_draft();
    strip(&mut draft);
    assert_validation_error(draft.validate(now));
  }
}

#[test]
fn empty_or_blank_fields_fail_validation() {
  setup_tracing();
  let now = Utc::now();

  let mut draft = complete_order_draft();
  draft.phone = Some(String::new());
  assert_validation_error(draft.validate(now));

  let mut draft = complete_order_draft();
  draft.city = Some("   ".to_string());
  assert_validation_error(draft.validate(now));
}

#[test]
fn missing_field_message_is_generic() {
  let now = Utc::now();
  let mut draft = complete_order_draft();
  draft.phone = None;

  match draft.validate(now) {
    Err(AppError::Validation(message)) => {
      // The message states the general requirement without itemizing
      // which field was missing.
      assert!(message.contains("required"));
      assert!(!message.contains("phone"));
    }
    other => panic!("expected a validation error, got {:?}", other.map(|o| o.name)),
  }
}

#[test]
fn gender_enum_is_enforced() {
  setup_tracing();
  let now = Utc::now();

  let mut draft = complete_order_draft();
  draft.gender = Some("female".to_string());
  assert_eq!(draft.validate(now).expect("female is valid").gender, Gender::Female);

  let mut draft = complete_order_draft();
  draft.gender = Some("other".to_string());
  assert_validation_error(draft.validate(now));
}

#[test]
fn string_fields_are_trimmed() {
  let now = Utc::now();
  let mut draft = complete_order_draft();
  draft.name = Some("  Alice  ".to_string());
  let order = draft.validate(now).expect("valid draft");
  assert_eq!(order.name, "Alice");
}
