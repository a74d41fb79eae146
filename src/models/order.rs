// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Address details collected for home delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
  pub recipient_name: String,
  pub phone: String,
  pub street: String,
  pub city: String,
  pub postal_code: String,
}

/// How the order leaves the pharmacy. The address and the pickup token are
/// mutually exclusive; the enum makes that structural rather than a pair of
/// nullable columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "deliveryMethod", rename_all = "lowercase")]
pub enum Fulfillment {
  Home {
    #[serde(rename = "deliveryDetails")]
    address: DeliveryAddress,
  },
  Instore {
    #[serde(rename = "orderToken")]
    pickup_token: String,
  },
}

/// Immutable snapshot of a cart line at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
  pub product_name: String,
  pub unit_price: Decimal,
  pub quantity: i32,
  pub subtotal: Decimal,
  pub image_path: String,
}

/// A finalized purchase. Created once per checkout; never updated or
/// deleted by any exposed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  /// Mutable contact attribute from the verified claims, never a join key.
  pub email: String,
  pub lines: Vec<OrderLine>,
  #[serde(flatten)]
  pub fulfillment: Fulfillment,
  pub created_at: DateTime<Utc>,
}
