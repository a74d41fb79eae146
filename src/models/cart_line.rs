// src/models/cart_line.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One pending purchase item for a user.
///
/// `unit_price`, `quantity` and `subtotal` are carried verbatim from the
/// client's add-to-cart request; the subtotal is stored redundantly and is
/// never recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub id: Uuid, // Primary key for the cart line itself
  pub user_id: Uuid,
  pub product_id: Uuid,
  pub product_name: String,
  pub unit_price: Decimal,
  pub quantity: i32,
  pub subtotal: Decimal,
  pub image_path: String,
  pub added_at: DateTime<Utc>,
}
