// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed set of catalog category codes used by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Tablet,
  Capsule,
  Syrup,
  Ointment,
  Drops,
  Supplement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>, // Description can be optional
  pub price: Decimal,
  pub category: Category,
  pub quantity_on_hand: i32,
  pub supplier_id: Uuid,
  pub image_path: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
