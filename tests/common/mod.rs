// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use uuid::Uuid;

use pharmacart::checkout::CheckoutOrchestrator;
use pharmacart::config::AppConfig;
use pharmacart::models::{Category, Product};
use pharmacart::state::AppState;
use pharmacart::stores::{
  CartStore, InMemoryCartStore, InMemoryInventoryStore, InMemoryOrderStore, InventoryStore, OrderStore,
};

pub const TEST_AUTH_SECRET: &str = "integration-test-secret";
pub const TEST_ADMIN_SUFFIX: &str = "@pharmacart.com";

static TRACING: Lazy<()> = Lazy::new(|| {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING);
}

pub fn product_with_stock(name: &str, quantity_on_hand: i32) -> Product {
  let now = Utc::now();
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: Some(format!("{} (test catalog entry)", name)),
    price: Decimal::new(250, 2),
    category: Category::Tablet,
    quantity_on_hand,
    supplier_id: Uuid::new_v4(),
    image_path: "/images/test.jpg".to_string(),
    created_at: now,
    updated_at: now,
  }
}

pub struct TestHarness {
  pub inventory: Arc<dyn InventoryStore>,
  pub cart: Arc<dyn CartStore>,
  pub orders: Arc<dyn OrderStore>,
  pub checkout: CheckoutOrchestrator,
}

pub fn harness() -> TestHarness {
  setup_tracing();
  let inventory: Arc<dyn InventoryStore> = Arc::new(InMemoryInventoryStore::new());
  let cart: Arc<dyn CartStore> = Arc::new(InMemoryCartStore::new());
  let orders: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::new());
  let checkout = CheckoutOrchestrator::new(inventory.clone(), cart.clone(), orders.clone());
  TestHarness {
    inventory,
    cart,
    orders,
    checkout,
  }
}

pub fn app_state(harness: &TestHarness) -> AppState {
  AppState {
    checkout: harness.checkout.clone(),
    inventory: harness.inventory.clone(),
    config: Arc::new(AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 0,
      auth_secret: TEST_AUTH_SECRET.to_string(),
      admin_email_suffix: TEST_ADMIN_SUFFIX.to_string(),
      seed_demo_catalog: false,
    }),
  }
}
