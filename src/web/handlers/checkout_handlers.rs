// src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::checkout::PlaceOrderRequest;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

/// `POST /saveorder`: persists one order embedding the client-supplied cart
/// snapshot and the chosen delivery branch, then clears the caller's cart.
#[instrument(
  name = "handler::save_order",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn save_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceOrderRequest>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .checkout
    .place_order(auth_user.user_id, &auth_user.email, req_payload.into_inner())
    .await?;

  info!(
    "Checkout completed for user {}. Order ID: {}, lines: {}",
    auth_user.user_id,
    order.id,
    order.lines.len()
  );

  Ok(HttpResponse::Ok().json(json!({
    "message": "Order placed successfully.",
    "orderId": order.id
  })))
}
