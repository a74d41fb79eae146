// src/services/auth_service.rs

//! Bearer-token verification against the fixed shared secret.
//!
//! Token issuance belongs to the account system; the issue half lives here
//! anyway so the test suite and local tooling can mint tokens the verify
//! half accepts.

use crate::errors::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// Claims carried by every bearer token: the stable user id as subject and
/// the (mutable) account email alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  pub sub: Uuid,
  pub email: String,
  pub iat: i64,
  pub exp: i64,
}

/// Mints a signed token for the given identity.
#[instrument(name = "auth_service::issue_token", skip(secret), fields(user_id = %user_id))]
pub fn issue_token(secret: &str, user_id: Uuid, email: &str, valid_for: Duration) -> Result<String, AppError> {
  let now = Utc::now();
  let claims = Claims {
    sub: user_id,
    email: email.to_string(),
    iat: now.timestamp(),
    exp: (now + valid_for).timestamp(),
  };

  encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
    error!(error = %e, "Token signing failed.");
    AppError::Internal(format!("Token signing failed: {}", e))
  })
}

/// Verifies a bearer token against the shared secret and returns its claims.
#[instrument(name = "auth_service::verify_token", skip(secret, token), err(Display))]
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
  if token.is_empty() {
    return Err(AppError::Auth("Empty bearer token.".to_string()));
  }

  match decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_bytes()),
    &Validation::default(),
  ) {
    Ok(data) => {
      debug!(user_id = %data.claims.sub, "Bearer token verified.");
      Ok(data.claims)
    }
    Err(e) => {
      debug!(error = %e, "Bearer token rejected.");
      Err(AppError::Auth("Invalid or expired token.".to_string()))
    }
  }
}
