// src/models/product.rs

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bson::oid::ObjectId;
use bson::spec::BinarySubtype;
use bson::Binary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{AppError, Result};

/// An image blob stored inline in the product document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlob {
  pub data: Binary,
  pub content_type: String,
}

impl ImageBlob {
  pub fn new(bytes: Vec<u8>, content_type: String) -> Self {
    Self {
      data: Binary {
        subtype: BinarySubtype::Generic,
        bytes,
      },
      content_type,
    }
  }
}

/// The storable representation of one product image.
///
/// A deployment uses exactly one variant for every image of every
/// document: `Url` when images live on a hosted service, `Blob` when
/// they are stored inline. The two are never mixed within a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredImage {
  Url(String),
  Blob(ImageBlob),
}

impl StoredImage {
  /// Renders the image into the string form the API returns: stored
  /// URLs pass through unchanged, inline blobs become a
  /// `data:<content-type>;base64,<payload>` URI.
  pub fn render(&self) -> String {
    match self {
      StoredImage::Url(url) => url.clone(),
      StoredImage::Blob(blob) => format!("data:{};base64,{}", blob.content_type, BASE64.encode(&blob.data.bytes)),
    }
  }
}

/// A product document as persisted in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<ObjectId>,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub photo: Option<StoredImage>,
  #[serde(default)]
  pub extra_photos: Vec<StoredImage>,
  #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
  pub created_at: DateTime<Utc>,
  #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
  pub updated_at: DateTime<Utc>,
}

/// The validated text fields of a product creation request.
///
/// Multipart text fields arrive as strings; this is the explicit
/// parse-and-validate step that coerces them to their semantic types
/// before any persistence logic runs.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub description: String,
  pub price: f64,
}

impl NewProduct {
  pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
    let name = fields
      .get("name")
      .map(|s| s.trim())
      .filter(|s| !s.is_empty())
      .ok_or_else(|| AppError::Validation("Product name is required.".to_string()))?
      .to_string();

    let description = fields.get("description").cloned().unwrap_or_default();

    let price = fields
      .get("price")
      .ok_or_else(|| AppError::Validation("Product price is required.".to_string()))?
      .trim()
      .parse::<f64>()
      .map_err(|_| AppError::Validation("Product price must be a number.".to_string()))?;

    Ok(Self {
      name,
      description,
      price,
    })
  }
}

/// The API-facing rendering of a product, with images flattened to
/// strings (data-URIs or URLs) and the id in hex form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub photo: Option<String>,
  pub extra_photos: Vec<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl ApiProduct {
  pub fn from_stored(product: Product) -> Self {
    Self {
      id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
      name: product.name,
      description: product.description,
      price: product.price,
      photo: product.photo.as_ref().map(StoredImage::render),
      extra_photos: product.extra_photos.iter().map(StoredImage::render).collect(),
      created_at: product.created_at,
      updated_at: product.updated_at,
    }
  }
}
