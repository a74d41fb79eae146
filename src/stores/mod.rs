// src/stores/mod.rs

//! Entity store traits the checkout orchestrator is injected with.
//!
//! Each entity (inventory, cart, orders) gets its own object-safe async
//! trait so handlers and tests can swap backends freely. The shipped
//! backend is the in-memory one in [`memory`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{CartLine, Order, Product};

pub mod memory;

pub use memory::{InMemoryCartStore, InMemoryInventoryStore, InMemoryOrderStore};

/// Per-product on-hand quantity plus the catalog fields behind it.
#[async_trait]
pub trait InventoryStore: Send + Sync {
  async fn get(&self, product_id: Uuid) -> Result<Option<Product>>;

  async fn list(&self) -> Result<Vec<Product>>;

  /// Fails with `Duplicate` if a product with the same id already exists.
  async fn insert(&self, product: Product) -> Result<()>;

  /// Applies `delta` to the product's on-hand quantity.
  ///
  /// Fails with `NotFound` for an unknown product and with `Validation`
  /// when a negative delta would push the quantity below zero.
  async fn adjust_quantity(&self, product_id: Uuid, delta: i32) -> Result<i32>;

  async fn remove(&self, product_id: Uuid) -> Result<Option<Product>>;
}

/// Pending cart lines, keyed by owning user id.
#[async_trait]
pub trait CartStore: Send + Sync {
  async fn insert(&self, line: CartLine) -> Result<()>;

  async fn lines_for_user(&self, user_id: Uuid) -> Result<Vec<CartLine>>;

  /// Removes the line and hands it back, scoped to the owning user.
  /// Returns `None` when the line does not exist (or belongs to someone
  /// else), so a repeated removal cannot be double-applied.
  async fn take(&self, user_id: Uuid, line_id: Uuid) -> Result<Option<CartLine>>;

  /// Deletes every line owned by the user. Returns how many went away.
  async fn clear_user(&self, user_id: Uuid) -> Result<usize>;
}

/// Finalized orders. No exposed operation mutates an order after insert;
/// `remove` exists solely as the compensating action for a failed
/// cart-clear during checkout.
#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn insert(&self, order: Order) -> Result<()>;

  async fn remove(&self, order_id: Uuid) -> Result<Option<Order>>;

  async fn orders_for_user(&self, user_id: Uuid) -> Result<Vec<Order>>;
}
