// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Shared secret every bearer token is verified against.
  pub auth_secret: String,

  /// Accounts whose email ends with this suffix get admin routes.
  pub admin_email_suffix: String,

  /// Optional: load a demo pharmacy catalog on startup.
  pub seed_demo_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let auth_secret = get_env("AUTH_SECRET").unwrap_or_else(|_| "pharmacart-dev-secret".to_string());
    let admin_email_suffix = get_env("ADMIN_EMAIL_SUFFIX").unwrap_or_else(|_| "@pharmacart.com".to_string());

    let seed_demo_catalog = get_env("SEED_DEMO_CATALOG")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DEMO_CATALOG value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      auth_secret,
      admin_email_suffix,
      seed_demo_catalog,
    })
  }
}
