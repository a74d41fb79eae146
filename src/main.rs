// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use pharmacart::checkout::CheckoutOrchestrator;
use pharmacart::config::AppConfig;
use pharmacart::state::AppState;
use pharmacart::stores::{
  memory::demo_catalog, CartStore, InMemoryCartStore, InMemoryInventoryStore, InMemoryOrderStore, InventoryStore,
  OrderStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting pharmacy backend server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Wire the store backends. Handlers only ever see the trait objects.
  let inventory: Arc<dyn InventoryStore> = Arc::new(InMemoryInventoryStore::new());
  let cart: Arc<dyn CartStore> = Arc::new(InMemoryCartStore::new());
  let orders: Arc<dyn OrderStore> = Arc::new(InMemoryOrderStore::new());

  if app_config.seed_demo_catalog {
    for product in demo_catalog() {
      if let Err(e) = inventory.insert(product).await {
        tracing::error!(error = %e, "Failed to seed demo catalog entry.");
      }
    }
    tracing::info!("Demo pharmacy catalog seeded.");
  }

  let checkout = CheckoutOrchestrator::new(inventory.clone(), cart, orders);

  let app_state = AppState {
    checkout,
    inventory,
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(pharmacart::web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
