// tests/product_field_tests.rs
mod common;

use bracelet_shop::errors::AppError;
use bracelet_shop::models::NewProduct;
use common::*;
use std::collections::HashMap;

fn fields(entries: &[(&str, &str)]) -> HashMap<String, String> {
  entries
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn coerces_text_fields_to_semantic_types() {
  setup_tracing();
  let parsed = NewProduct::from_fields(&fields(&[
    ("name", "Charm bracelet"),
    ("description", "Hand-made"),
    ("price", "19.99"),
  ]))
  .expect("valid fields");

  assert_eq!(parsed.name, "Charm bracelet");
  assert_eq!(parsed.description, "Hand-made");
  assert_eq!(parsed.price, 19.99);
}

#[test]
fn description_defaults_to_empty() {
  let parsed = NewProduct::from_fields(&fields(&[("name", "Bracelet"), ("price", "5")])).expect("valid fields");
  assert_eq!(parsed.description, "");
}

#[test]
fn missing_name_is_a_validation_error() {
  let result = NewProduct::from_fields(&fields(&[("price", "5")]));
  assert!(matches!(result, Err(AppError::Validation(_))));

  let result = NewProduct::from_fields(&fields(&[("name", "   "), ("price", "5")]));
  assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn non_numeric_price_is_a_validation_error() {
  let result = NewProduct::from_fields(&fields(&[("name", "Bracelet"), ("price", "cheap")]));
  assert!(matches!(result, Err(AppError::Validation(_))));

  let result = NewProduct::from_fields(&fields(&[("name", "Bracelet")]));
  assert!(matches!(result, Err(AppError::Validation(_))));
}
