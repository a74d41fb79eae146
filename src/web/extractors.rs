// src/web/extractors.rs

//! Request extractors shared across handlers.

use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

/// Identity resolved from the `Authorization: Bearer` header.
///
/// The user id is the stable join key for cart and order records; the email
/// rides along as a mutable attribute for receipts and the admin check.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
  pub email: String,
}

impl AuthenticatedUser {
  /// The original admin console distinguishes staff from customers by the
  /// account email's domain suffix.
  pub fn is_admin(&self, admin_suffix: &str) -> bool {
    self.email.ends_with(admin_suffix)
  }
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    futures_util::future::ready(authenticate(req))
  }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let app_state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("AppState is not configured.".to_string()))?;

  let token = bearer_token(req).ok_or_else(|| {
    warn!("AuthenticatedUser extractor: missing or malformed Authorization header.");
    // Deliberately an Auth error: the contract reports these as 500.
    AppError::Auth("Missing or malformed Authorization header.".to_string())
  })?;

  let claims = auth_service::verify_token(&app_state.config.auth_secret, token)?;
  Ok(AuthenticatedUser {
    user_id: claims.sub,
    email: claims.email,
  })
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
  req
    .headers()
    .get(actix_web::http::header::AUTHORIZATION)?
    .to_str()
    .ok()?
    .strip_prefix("Bearer ")
}
