// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::get_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn get_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.checkout.order_history(auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(orders))
}
