// src/pipelines/product_pipeline.rs

use bson::oid::ObjectId;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::Store;
use crate::errors::{AppError, Result};
use crate::images::{materialize_batch, ImageMaterializer};
use crate::ingest::ParsedForm;
use crate::models::{ApiProduct, NewProduct, Product};

/// The outcome of a successful product creation.
#[derive(Debug)]
pub struct CreatedProduct {
  pub id: String,
  pub product: ApiProduct,
}

/// Orchestrates ingestor → materializer → document store for product
/// creation, and exposes list and delete.
pub struct ProductPipeline {
  store: Arc<Store>,
  images: Arc<dyn ImageMaterializer>,
}

impl ProductPipeline {
  pub fn new(store: Arc<Store>, images: Arc<dyn ImageMaterializer>) -> Self {
    Self { store, images }
  }

  /// Creates one product from a parsed form. Temporary upload files are
  /// swept regardless of outcome, so neither a materialization nor a
  /// persistence failure leaks temp storage, and no partial document is
  /// ever persisted.
  #[instrument(skip(self, form))]
  pub async fn create(&self, form: ParsedForm) -> Result<CreatedProduct> {
    let result = self.assemble_and_store(&form).await;
    form.cleanup().await;
    result
  }

  async fn assemble_and_store(&self, form: &ParsedForm) -> Result<CreatedProduct> {
    let draft = NewProduct::from_fields(&form.fields)?;

    let photo = match form.first_file("photo") {
      Some(upload) => Some(self.images.materialize(upload).await?),
      None => None,
    };

    // Fan out over the extras and wait for all of them; the aggregate
    // preserves submission order and is all-or-nothing.
    let extra_photos = materialize_batch(self.images.as_ref(), form.files("extraPhotos")).await?;

    let now = Utc::now();
    let product = Product {
      id: None,
      name: draft.name,
      description: draft.description,
      price: draft.price,
      photo,
      extra_photos,
      created_at: now,
      updated_at: now,
    };

    let id = self.store.insert_product(&product).await?;
    info!(product_id = %id, "Product created.");

    let stored = Product {
      id: Some(id),
      ..product
    };
    Ok(CreatedProduct {
      id: id.to_hex(),
      product: ApiProduct::from_stored(stored),
    })
  }

  /// All products, with images rendered to data-URIs (inline blobs) or
  /// passed through unchanged (stored URLs).
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<ApiProduct>> {
    let products = self.store.list_products().await?;
    Ok(products.into_iter().map(ApiProduct::from_stored).collect())
  }

  /// Not-found-aware delete: a malformed id is a validation error, an
  /// unknown id is a 404, and a successful delete reports which
  /// document was removed.
  #[instrument(skip(self))]
  pub async fn delete(&self, id: &str) -> Result<()> {
    let object_id =
      ObjectId::parse_str(id).map_err(|_| AppError::Validation(format!("'{}' is not a valid product id.", id)))?;

    match self.store.delete_product(object_id).await? {
      Some(_) => {
        info!(product_id = %id, "Product deleted.");
        Ok(())
      }
      None => Err(AppError::NotFound(format!("Product with id '{}' not found.", id))),
    }
  }
}
