// src/db.rs

//! The document store client.
//!
//! An explicitly constructed `Store` is created once at startup and
//! injected into the pipelines; there is no global connection state.
//! Every operation is a single-document read or write, so whatever
//! atomicity the server offers per document is all that is relied upon.

use bson::doc;
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::{Client, Collection};
use tracing::{info, instrument};

use crate::errors::{AppError, Result};
use crate::models::{Order, Product};

pub struct Store {
  client: Client,
  products: Collection<Product>,
  orders: Collection<Order>,
}

impl Store {
  /// Connects to MongoDB and pings the target database so that a bad
  /// connection string fails at startup instead of on the first request.
  pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
    let client = Client::with_uri_str(uri).await?;
    let database = client.database(db_name);
    database.run_command(doc! { "ping": 1 }).await?;
    info!(db = db_name, "Successfully connected to the database.");

    let products = database.collection::<Product>("products");
    let orders = database.collection::<Order>("orders");

    Ok(Self {
      client,
      products,
      orders,
    })
  }

  /// Releases the connection pool. Called once when a server shuts down.
  pub async fn shutdown(self) {
    self.client.shutdown().await;
    info!("Database connection pool shut down.");
  }

  #[instrument(skip(self, product), fields(product_name = %product.name))]
  pub async fn insert_product(&self, product: &Product) -> Result<ObjectId> {
    let result = self.products.insert_one(product).await?;
    // insert_one without a caller-supplied _id yields a driver-generated
    // ObjectId.
    result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| AppError::Internal("Insert did not return an ObjectId.".to_string()))
  }

  #[instrument(skip(self))]
  pub async fn list_products(&self) -> Result<Vec<Product>> {
    let cursor = self.products.find(doc! {}).await?;
    Ok(cursor.try_collect().await?)
  }

  /// Removes the matching product and returns it, so callers can
  /// distinguish not-found from other failures.
  #[instrument(skip(self))]
  pub async fn delete_product(&self, id: ObjectId) -> Result<Option<Product>> {
    Ok(self.products.find_one_and_delete(doc! { "_id": id }).await?)
  }

  #[instrument(skip(self, order), fields(order_name = %order.name))]
  pub async fn insert_order(&self, order: &Order) -> Result<ObjectId> {
    let result = self.orders.insert_one(order).await?;
    result
      .inserted_id
      .as_object_id()
      .ok_or_else(|| AppError::Internal("Insert did not return an ObjectId.".to_string()))
  }

  /// All orders, newest first.
  #[instrument(skip(self))]
  pub async fn list_orders(&self) -> Result<Vec<Order>> {
    let cursor = self.orders.find(doc! {}).sort(doc! { "createdAt": -1 }).await?;
    Ok(cursor.try_collect().await?)
  }
}
