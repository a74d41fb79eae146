// src/stores/memory.rs

//! In-memory store backend.
//!
//! Backs every store trait with a `parking_lot`-guarded hash map. This is
//! the backend the server boots with and the one the test suite injects
//! into the orchestrator.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{CartLine, Category, Order, Product};
use crate::stores::{CartStore, InventoryStore, OrderStore};

#[derive(Default)]
pub struct InMemoryInventoryStore {
  products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryInventoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
  async fn get(&self, product_id: Uuid) -> Result<Option<Product>> {
    Ok(self.products.read().get(&product_id).cloned())
  }

  async fn list(&self) -> Result<Vec<Product>> {
    let mut products: Vec<Product> = self.products.read().values().cloned().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(products)
  }

  async fn insert(&self, product: Product) -> Result<()> {
    let mut guard = self.products.write();
    if guard.contains_key(&product.id) {
      return Err(AppError::Duplicate(format!(
        "Product with ID {} already exists.",
        product.id
      )));
    }
    guard.insert(product.id, product);
    Ok(())
  }

  async fn adjust_quantity(&self, product_id: Uuid, delta: i32) -> Result<i32> {
    let mut guard = self.products.write();
    let product = guard
      .get_mut(&product_id)
      .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", product_id)))?;

    let adjusted = product.quantity_on_hand + delta;
    if adjusted < 0 {
      return Err(AppError::Validation(format!(
        "Insufficient stock. Only {} available.",
        product.quantity_on_hand
      )));
    }

    product.quantity_on_hand = adjusted;
    product.updated_at = Utc::now();
    Ok(adjusted)
  }

  async fn remove(&self, product_id: Uuid) -> Result<Option<Product>> {
    Ok(self.products.write().remove(&product_id))
  }
}

#[derive(Default)]
pub struct InMemoryCartStore {
  lines: RwLock<HashMap<Uuid, CartLine>>,
}

impl InMemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
  async fn insert(&self, line: CartLine) -> Result<()> {
    self.lines.write().insert(line.id, line);
    Ok(())
  }

  async fn lines_for_user(&self, user_id: Uuid) -> Result<Vec<CartLine>> {
    let mut lines: Vec<CartLine> = self
      .lines
      .read()
      .values()
      .filter(|line| line.user_id == user_id)
      .cloned()
      .collect();
    lines.sort_by_key(|line| line.added_at);
    Ok(lines)
  }

  async fn take(&self, user_id: Uuid, line_id: Uuid) -> Result<Option<CartLine>> {
    let mut guard = self.lines.write();
    // Ownership check before the removal so one user cannot pull another
    // user's line out of the cart.
    match guard.get(&line_id) {
      Some(line) if line.user_id == user_id => Ok(guard.remove(&line_id)),
      _ => Ok(None),
    }
  }

  async fn clear_user(&self, user_id: Uuid) -> Result<usize> {
    let mut guard = self.lines.write();
    let before = guard.len();
    guard.retain(|_, line| line.user_id != user_id);
    Ok(before - guard.len())
  }
}

#[derive(Default)]
pub struct InMemoryOrderStore {
  orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn insert(&self, order: Order) -> Result<()> {
    self.orders.write().insert(order.id, order);
    Ok(())
  }

  async fn remove(&self, order_id: Uuid) -> Result<Option<Order>> {
    Ok(self.orders.write().remove(&order_id))
  }

  async fn orders_for_user(&self, user_id: Uuid) -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = self
      .orders
      .read()
      .values()
      .filter(|order| order.user_id == user_id)
      .cloned()
      .collect();
    orders.sort_by_key(|order| order.created_at);
    Ok(orders)
  }
}

/// A handful of catalog rows for local development and demos.
pub fn demo_catalog() -> Vec<Product> {
  let supplier_id = Uuid::new_v4();
  let now = Utc::now();
  let entry = |name: &str, category: Category, price: Decimal, quantity_on_hand: i32| Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price,
    category,
    quantity_on_hand,
    supplier_id,
    image_path: format!("/images/{}.jpg", name.to_lowercase().replace(' ', "-")),
    created_at: now,
    updated_at: now,
  };

  vec![
    entry("Paracetamol 500mg", Category::Tablet, Decimal::new(250, 2), 120),
    entry("Amoxicillin 250mg", Category::Capsule, Decimal::new(899, 2), 60),
    entry("Cough Relief Syrup", Category::Syrup, Decimal::new(575, 2), 35),
    entry("Antiseptic Ointment", Category::Ointment, Decimal::new(420, 2), 48),
    entry("Saline Eye Drops", Category::Drops, Decimal::new(310, 2), 25),
    entry("Vitamin D3 1000IU", Category::Supplement, Decimal::new(1250, 2), 80),
  ]
}
