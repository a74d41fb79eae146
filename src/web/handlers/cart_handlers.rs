// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::checkout::AddToCartRequest;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id, product_id = %req_payload.product_id)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequest>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let line = app_state
    .checkout
    .add_to_cart(auth_user.user_id, req_payload.into_inner())
    .await?;

  info!(
    "Add to cart successful for user: {}. Line ID: {}, Product ID: {}",
    auth_user.user_id, line.id, line.product_id
  );

  Ok(HttpResponse::Ok().json(json!({
    "message": "Product added to cart successfully.",
    "cartItem": line
  })))
}

#[instrument(name = "handler::get_cart_items", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_cart_items_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let lines = app_state.checkout.cart_items(auth_user.user_id).await?;
  // The storefront expects a bare array here.
  Ok(HttpResponse::Ok().json(lines))
}

#[instrument(
  name = "handler::delete_cart_product",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, line_id = %path.as_ref())
)]
pub async fn delete_cart_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let line_id = path.into_inner();
  let line = app_state.checkout.remove_from_cart(auth_user.user_id, line_id).await?;

  info!(
    "Cart line {} removed for user {} (product {}).",
    line.id, auth_user.user_id, line.product_id
  );

  Ok(HttpResponse::Ok().json(json!({
    "message": "Product removed from cart successfully."
  })))
}
