// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Category, Product};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.inventory.list().await?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
    "message": "Products fetched successfully.",
    "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.inventory.get(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
      "message": "Product fetched successfully.",
      "product": product
    }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound("No product found".to_string()))
    }
  }
}

// --- Admin surface ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub category: Category,
  pub quantity_on_hand: i32,
  pub supplier_id: Uuid,
  pub image_path: String,
}

#[instrument(
  name = "handler::create_product",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProductRequest>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  if !auth_user.is_admin(&app_state.config.admin_email_suffix) {
    warn!("User {} attempted an admin-only product insert.", auth_user.user_id);
    return Err(AppError::Forbidden("Admin account required.".to_string()));
  }

  let payload = req_payload.into_inner();
  if payload.name.trim().is_empty() {
    return Err(AppError::Validation("Product name is required.".to_string()));
  }
  if payload.quantity_on_hand < 0 {
    return Err(AppError::Validation("Quantity on hand cannot be negative.".to_string()));
  }

  let now = Utc::now();
  let product = Product {
    id: Uuid::new_v4(),
    name: payload.name,
    description: payload.description,
    price: payload.price,
    category: payload.category,
    quantity_on_hand: payload.quantity_on_hand,
    supplier_id: payload.supplier_id,
    image_path: payload.image_path,
    created_at: now,
    updated_at: now,
  };

  app_state.inventory.insert(product.clone()).await?;
  info!("Product {} created by admin {}.", product.id, auth_user.user_id);

  Ok(HttpResponse::Created().json(json!({
    "message": "Product created successfully.",
    "product": product
  })))
}

#[instrument(
  name = "handler::delete_product",
  skip(app_state, path, auth_user),
  fields(user_id = %auth_user.user_id, product_id = %path.as_ref())
)]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  if !auth_user.is_admin(&app_state.config.admin_email_suffix) {
    warn!("User {} attempted an admin-only product delete.", auth_user.user_id);
    return Err(AppError::Forbidden("Admin account required.".to_string()));
  }

  let product_id = path.into_inner();
  match app_state.inventory.remove(product_id).await? {
    Some(product) => {
      info!("Product {} deleted by admin {}.", product.id, auth_user.user_id);
      Ok(HttpResponse::Ok().json(json!({
        "message": "Product deleted successfully."
      })))
    }
    None => Err(AppError::NotFound("No product found".to_string())),
  }
}
