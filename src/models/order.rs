// src/models/order.rs

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

/// Enforced at validation time, matching the values the storefront
/// submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  fn parse(raw: &str) -> Option<Self> {
    match raw {
      "male" => Some(Gender::Male),
      "female" => Some(Gender::Female),
      _ => None,
    }
  }
}

/// An order document as persisted in the `orders` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<ObjectId>,
  pub name: String,
  pub email: String,
  pub address: String,
  pub age: i64,
  pub phone: String,
  pub province: String,
  pub city: String,
  pub bracelet_color: String,
  pub gender: Gender,
  #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
  pub created_at: DateTime<Utc>,
  #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
  pub updated_at: DateTime<Utc>,
}

/// The raw JSON body of an order submission. Everything is optional so
/// that missing fields surface as a validation failure with a stable
/// message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
  pub name: Option<String>,
  pub email: Option<String>,
  pub address: Option<String>,
  pub age: Option<i64>,
  pub phone: Option<String>,
  pub province: Option<String>,
  pub city: Option<String>,
  pub bracelet_color: Option<String>,
  pub gender: Option<String>,
}

const MISSING_FIELDS_MESSAGE: &str = "All fields are required and must be non-empty.";

fn required(value: &Option<String>) -> Result<String> {
  value
    .as_deref()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))
}

impl OrderDraft {
  /// Validates presence of all nine required fields. The failure message
  /// states the general requirement without itemizing which field was
  /// missing.
  pub fn validate(self, now: DateTime<Utc>) -> Result<Order> {
    let gender_raw = required(&self.gender)?;
    let gender = Gender::parse(&gender_raw)
      .ok_or_else(|| AppError::Validation("Gender must be either 'male' or 'female'.".to_string()))?;

    Ok(Order {
      id: None,
      name: required(&self.name)?,
      email: required(&self.email)?,
      address: required(&self.address)?,
      age: self
        .age
        .ok_or_else(|| AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?,
      phone: required(&self.phone)?,
      province: required(&self.province)?,
      city: required(&self.city)?,
      bracelet_color: required(&self.bracelet_color)?,
      gender,
      created_at: now,
      updated_at: now,
    })
  }
}

/// The API-facing rendering of an order, with the id in hex form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
  pub id: String,
  pub name: String,
  pub email: String,
  pub address: String,
  pub age: i64,
  pub phone: String,
  pub province: String,
  pub city: String,
  pub bracelet_color: String,
  pub gender: Gender,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl ApiOrder {
  pub fn from_stored(order: Order) -> Self {
    Self {
      id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
      name: order.name,
      email: order.email,
      address: order.address,
      age: order.age,
      phone: order.phone,
      province: order.province,
      city: order.city,
      bracelet_color: order.bracelet_color,
      gender: order.gender,
      created_at: order.created_at,
      updated_at: order.updated_at,
    }
  }
}
