// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Forbidden: {0}")]
  Forbidden(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Duplicate Resource: {0}")]
  Duplicate(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<AppError>() {
      Ok(app_err) => app_err,
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "message": m })),
      // Auth failures are reported as 500, not 401: the documented API
      // contract the frontends already rely on.
      AppError::Auth(m) => HttpResponse::InternalServerError().json(json!({ "message": m })),
      AppError::Forbidden(m) => HttpResponse::Forbidden().json(json!({ "message": m })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Duplicate(m) => HttpResponse::Conflict().json(json!({ "message": m })),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({ "message": "Configuration issue", "detail": m }))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({ "message": "An internal error occurred", "detail": m }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
