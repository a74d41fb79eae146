// src/state.rs

use crate::checkout::CheckoutOrchestrator;
use crate::config::AppConfig;
use crate::stores::InventoryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub checkout: CheckoutOrchestrator,
  /// Catalog handlers talk to inventory directly; everything cart/order
  /// shaped goes through the orchestrator.
  pub inventory: Arc<dyn InventoryStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
