// src/checkout.rs

//! The cart-to-order checkout orchestrator.
//!
//! Coordinates the inventory decrement, cart write, order write and
//! cart-clear as a linear sequence over the injected store traits. The
//! sequence is not transactional; each step that can leave a partial state
//! behind carries a compensating action instead (restore the decrement,
//! drop the inserted order).

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{CartLine, Fulfillment, Order, OrderLine};
use crate::stores::{CartStore, InventoryStore, OrderStore};

// --- Request payloads ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
  pub product_id: Uuid,
  pub product_name: String,
  pub price: Decimal,
  pub quantity: i32,
  pub subtotal: Decimal,
  pub image_path: String,
}

/// Checkout payload. `delivery_details` and `order_token` are free-floating
/// optionals here; `into_fulfillment` applies the per-method presence rules
/// and collapses them into the typed [`Fulfillment`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
  pub cart_items: Vec<OrderLine>,
  pub delivery_method: Option<String>,
  pub delivery_details: Option<crate::models::DeliveryAddress>,
  pub order_token: Option<String>,
}

impl PlaceOrderRequest {
  fn into_fulfillment(self) -> Result<(Vec<OrderLine>, Fulfillment)> {
    let method = match self.delivery_method.as_deref() {
      Some(m) if !m.is_empty() => m.to_string(),
      _ => return Err(AppError::Validation("Delivery method is required.".to_string())),
    };

    let fulfillment = match method.as_str() {
      "home" => {
        let address = self
          .delivery_details
          .ok_or_else(|| AppError::Validation("Delivery details are required for home delivery.".to_string()))?;
        Fulfillment::Home { address }
      }
      "instore" => {
        let pickup_token = match self.order_token {
          Some(token) if !token.is_empty() => token,
          _ => {
            return Err(AppError::Validation(
              "Order token is required for in-store pickup.".to_string(),
            ))
          }
        };
        Fulfillment::Instore { pickup_token }
      }
      other => {
        return Err(AppError::Validation(format!(
          "Unknown delivery method '{}'. Expected 'home' or 'instore'.",
          other
        )))
      }
    };

    Ok((self.cart_items, fulfillment))
  }
}

// --- Orchestrator ---

#[derive(Clone)]
pub struct CheckoutOrchestrator {
  inventory: Arc<dyn InventoryStore>,
  cart: Arc<dyn CartStore>,
  orders: Arc<dyn OrderStore>,
}

impl CheckoutOrchestrator {
  pub fn new(inventory: Arc<dyn InventoryStore>, cart: Arc<dyn CartStore>, orders: Arc<dyn OrderStore>) -> Self {
    Self { inventory, cart, orders }
  }

  /// Decrements the product's on-hand quantity and inserts a cart line
  /// carrying the caller-supplied display fields verbatim.
  ///
  /// Inventory always moves by exactly one unit per add, whatever quantity
  /// the client asked for. The decrement is refused once the on-hand
  /// quantity reaches zero.
  #[instrument(name = "checkout::add_to_cart", skip(self, request), fields(user_id = %user_id, product_id = %request.product_id))]
  pub async fn add_to_cart(&self, user_id: Uuid, request: AddToCartRequest) -> Result<CartLine> {
    let product = self
      .inventory
      .get(request.product_id)
      .await?
      .ok_or_else(|| AppError::NotFound("No product found".to_string()))?;

    let remaining = self.inventory.adjust_quantity(product.id, -1).await?;
    info!(
      "Reserved one unit of product {} for user {}. Remaining stock: {}",
      product.id, user_id, remaining
    );

    let line = CartLine {
      id: Uuid::new_v4(),
      user_id,
      product_id: request.product_id,
      product_name: request.product_name,
      unit_price: request.price,
      quantity: request.quantity,
      // Client-supplied subtotal is stored as-is, never recomputed.
      subtotal: request.subtotal,
      image_path: request.image_path,
      added_at: Utc::now(),
    };

    if let Err(insert_err) = self.cart.insert(line.clone()).await {
      // Compensate the decrement so the failed add doesn't leak a unit.
      if let Err(restore_err) = self.inventory.adjust_quantity(product.id, 1).await {
        warn!(
          "Failed to restore stock for product {} after cart insert failure: {}",
          product.id, restore_err
        );
      }
      return Err(insert_err);
    }

    Ok(line)
  }

  /// Removes a cart line owned by the caller and hands the reserved unit
  /// back to inventory.
  ///
  /// The line is taken out of the cart first: a second removal of the same
  /// line finds nothing and cannot double-increment the stock.
  #[instrument(name = "checkout::remove_from_cart", skip(self), fields(user_id = %user_id, line_id = %line_id))]
  pub async fn remove_from_cart(&self, user_id: Uuid, line_id: Uuid) -> Result<CartLine> {
    let line = self
      .cart
      .take(user_id, line_id)
      .await?
      .ok_or_else(|| AppError::NotFound("Cart item not found.".to_string()))?;

    match self.inventory.adjust_quantity(line.product_id, 1).await {
      Ok(remaining) => {
        info!(
          "Returned one unit of product {} to stock for user {}. Stock now: {}",
          line.product_id, user_id, remaining
        );
      }
      Err(AppError::NotFound(_)) => {
        // The product was deleted while sitting in a cart; the line is
        // already gone, so there is nothing left to return the unit to.
        warn!(
          "Product {} no longer exists; skipping stock restore for removed cart line {}.",
          line.product_id, line.id
        );
      }
      Err(other) => return Err(other),
    }

    Ok(line)
  }

  #[instrument(name = "checkout::cart_items", skip(self), fields(user_id = %user_id))]
  pub async fn cart_items(&self, user_id: Uuid) -> Result<Vec<CartLine>> {
    self.cart.lines_for_user(user_id).await
  }

  /// Finalizes a checkout: validates the delivery branch, persists one
  /// order embedding the client-supplied cart snapshot, then clears the
  /// caller's cart lines.
  ///
  /// The cart snapshot comes from the request, not from a server-side
  /// re-read, and an in-store pickup token is stored exactly as supplied.
  /// If the cart-clear fails the inserted order is removed again, so a
  /// retried checkout cannot duplicate it.
  #[instrument(name = "checkout::place_order", skip(self, request), fields(user_id = %user_id))]
  pub async fn place_order(&self, user_id: Uuid, email: &str, request: PlaceOrderRequest) -> Result<Order> {
    let (lines, fulfillment) = request.into_fulfillment()?;

    let order = Order {
      id: Uuid::new_v4(),
      user_id,
      email: email.to_string(),
      lines,
      fulfillment,
      created_at: Utc::now(),
    };

    self.orders.insert(order.clone()).await?;

    if let Err(clear_err) = self.cart.clear_user(user_id).await {
      // Drop the freshly inserted order rather than leave an order whose
      // cart lines are still pending.
      if let Err(remove_err) = self.orders.remove(order.id).await {
        warn!(
          "Failed to remove order {} after cart-clear failure: {}",
          order.id, remove_err
        );
      }
      return Err(clear_err);
    }

    info!("Order {} placed for user {}.", order.id, user_id);
    Ok(order)
  }

  #[instrument(name = "checkout::order_history", skip(self), fields(user_id = %user_id))]
  pub async fn order_history(&self, user_id: Uuid) -> Result<Vec<Order>> {
    self.orders.orders_for_user(user_id).await
  }
}
