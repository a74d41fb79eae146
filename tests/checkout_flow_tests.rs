// tests/checkout_flow_tests.rs
//
// Orchestrator-level coverage of the cart-to-order flow, run against the
// in-memory store backend (plus a deliberately failing cart store for the
// compensation paths).

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use pharmacart::checkout::{AddToCartRequest, CheckoutOrchestrator, PlaceOrderRequest};
use pharmacart::errors::{AppError, Result};
use pharmacart::models::{CartLine, DeliveryAddress, Fulfillment, OrderLine, Product};
use pharmacart::stores::{CartStore, InMemoryCartStore};

fn add_request_for(product: &Product) -> AddToCartRequest {
  AddToCartRequest {
    product_id: product.id,
    product_name: product.name.clone(),
    price: product.price,
    quantity: 1,
    subtotal: product.price,
    image_path: product.image_path.clone(),
  }
}

fn instore_order(cart_items: Vec<OrderLine>, token: &str) -> PlaceOrderRequest {
  PlaceOrderRequest {
    cart_items,
    delivery_method: Some("instore".to_string()),
    delivery_details: None,
    order_token: Some(token.to_string()),
  }
}

fn sample_line() -> OrderLine {
  OrderLine {
    product_name: "Paracetamol 500mg".to_string(),
    unit_price: Decimal::from(100),
    quantity: 2,
    subtotal: Decimal::from(200),
    image_path: "/images/paracetamol.jpg".to_string(),
  }
}

#[tokio::test]
async fn add_then_remove_restores_stock() {
  let h = harness();
  let product = product_with_stock("Ibuprofen 200mg", 7);
  h.inventory.insert(product.clone()).await.unwrap();
  let user = Uuid::new_v4();

  let line = h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap();
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 6);

  h.checkout.remove_from_cart(user, line.id).await.unwrap();
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 7);
  assert!(h.checkout.cart_items(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn oversell_is_refused_at_zero_stock() {
  let h = harness();
  let product = product_with_stock("Last Box Lozenges", 1);
  h.inventory.insert(product.clone()).await.unwrap();
  let user = Uuid::new_v4();

  h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap();

  // The second add against an emptied shelf must fail instead of driving
  // the on-hand quantity negative.
  let err = h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 0);
  assert_eq!(h.checkout.cart_items(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_for_unknown_product_is_not_found() {
  let h = harness();
  let ghost = product_with_stock("Never Inserted", 3);

  let err = h
    .checkout
    .add_to_cart(Uuid::new_v4(), add_request_for(&ghost))
    .await
    .unwrap_err();
  match err {
    AppError::NotFound(message) => assert_eq!(message, "No product found"),
    other => panic!("expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn inventory_moves_one_unit_regardless_of_requested_quantity() {
  let h = harness();
  let product = product_with_stock("Zinc Lozenges", 10);
  h.inventory.insert(product.clone()).await.unwrap();

  let mut request = add_request_for(&product);
  request.quantity = 5;
  request.subtotal = product.price * Decimal::from(5);

  let line = h.checkout.add_to_cart(Uuid::new_v4(), request).await.unwrap();

  // The line carries the requested quantity, but stock only moved by one.
  assert_eq!(line.quantity, 5);
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 9);
}

#[tokio::test]
async fn client_supplied_subtotal_is_stored_verbatim() {
  let h = harness();
  let product = product_with_stock("Allergy Relief", 4);
  h.inventory.insert(product.clone()).await.unwrap();

  let mut request = add_request_for(&product);
  request.quantity = 2;
  request.subtotal = Decimal::new(99, 2); // does not match price * quantity

  let line = h.checkout.add_to_cart(Uuid::new_v4(), request).await.unwrap();
  assert_eq!(line.subtotal, Decimal::new(99, 2));
}

#[tokio::test]
async fn removing_a_line_twice_is_not_found_and_increments_once() {
  let h = harness();
  let product = product_with_stock("Throat Spray", 5);
  h.inventory.insert(product.clone()).await.unwrap();
  let user = Uuid::new_v4();

  let line = h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap();
  h.checkout.remove_from_cart(user, line.id).await.unwrap();

  let err = h.checkout.remove_from_cart(user, line.id).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
  // Still at the original 5, not 6.
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 5);
}

#[tokio::test]
async fn users_cannot_remove_each_others_lines() {
  let h = harness();
  let product = product_with_stock("Band-Aids", 5);
  h.inventory.insert(product.clone()).await.unwrap();
  let owner = Uuid::new_v4();

  let line = h.checkout.add_to_cart(owner, add_request_for(&product)).await.unwrap();

  let err = h.checkout.remove_from_cart(Uuid::new_v4(), line.id).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
  assert_eq!(h.checkout.cart_items(owner).await.unwrap().len(), 1);
}

#[tokio::test]
async fn checkout_clears_the_cart() {
  let h = harness();
  let product = product_with_stock("Multivitamin", 9);
  h.inventory.insert(product.clone()).await.unwrap();
  let user = Uuid::new_v4();

  h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap();
  assert_eq!(h.checkout.cart_items(user).await.unwrap().len(), 1);

  h.checkout
    .place_order(user, "buyer@example.com", instore_order(vec![sample_line()], "PICKUP-1"))
    .await
    .unwrap();

  assert!(h.checkout.cart_items(user).await.unwrap().is_empty());
  assert_eq!(h.checkout.order_history(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn instore_checkout_stores_the_exact_pickup_token() {
  let h = harness();
  let user = Uuid::new_v4();

  let order = h
    .checkout
    .place_order(
      user,
      "buyer@example.com",
      instore_order(vec![sample_line()], "TOKEN-AS-SUPPLIED-42"),
    )
    .await
    .unwrap();

  match order.fulfillment {
    Fulfillment::Instore { pickup_token } => assert_eq!(pickup_token, "TOKEN-AS-SUPPLIED-42"),
    other => panic!("expected in-store fulfillment, got {:?}", other),
  }
}

#[tokio::test]
async fn home_checkout_without_details_creates_nothing() {
  let h = harness();
  let product = product_with_stock("Cold Compress", 3);
  h.inventory.insert(product.clone()).await.unwrap();
  let user = Uuid::new_v4();

  h.checkout.add_to_cart(user, add_request_for(&product)).await.unwrap();

  let request = PlaceOrderRequest {
    cart_items: vec![sample_line()],
    delivery_method: Some("home".to_string()),
    delivery_details: None,
    order_token: None,
  };
  let err = h.checkout.place_order(user, "buyer@example.com", request).await.unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  // No order record, and the cart is untouched.
  assert!(h.checkout.order_history(user).await.unwrap().is_empty());
  assert_eq!(h.checkout.cart_items(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn home_checkout_embeds_the_address() {
  let h = harness();
  let user = Uuid::new_v4();

  let request = PlaceOrderRequest {
    cart_items: vec![sample_line()],
    delivery_method: Some("home".to_string()),
    delivery_details: Some(DeliveryAddress {
      recipient_name: "Jo Patel".to_string(),
      phone: "555-0142".to_string(),
      street: "12 Harbour Lane".to_string(),
      city: "Brighton".to_string(),
      postal_code: "BN1 1AA".to_string(),
    }),
    order_token: None,
  };

  let order = h.checkout.place_order(user, "jo@example.com", request).await.unwrap();
  match order.fulfillment {
    Fulfillment::Home { address } => assert_eq!(address.city, "Brighton"),
    other => panic!("expected home fulfillment, got {:?}", other),
  }
  assert_eq!(order.email, "jo@example.com");
  assert_eq!(order.lines.len(), 1);
}

// --- Compensation paths, driven by a cart store that fails on demand ---

struct FailingCartStore {
  inner: InMemoryCartStore,
  fail_insert: bool,
  fail_clear: bool,
}

#[async_trait]
impl CartStore for FailingCartStore {
  async fn insert(&self, line: CartLine) -> Result<()> {
    if self.fail_insert {
      return Err(AppError::Internal("simulated cart insert failure".to_string()));
    }
    self.inner.insert(line).await
  }

  async fn lines_for_user(&self, user_id: Uuid) -> Result<Vec<CartLine>> {
    self.inner.lines_for_user(user_id).await
  }

  async fn take(&self, user_id: Uuid, line_id: Uuid) -> Result<Option<CartLine>> {
    self.inner.take(user_id, line_id).await
  }

  async fn clear_user(&self, user_id: Uuid) -> Result<usize> {
    if self.fail_clear {
      return Err(AppError::Internal("simulated cart clear failure".to_string()));
    }
    self.inner.clear_user(user_id).await
  }
}

#[tokio::test]
async fn failed_cart_insert_restores_the_decrement() {
  let h = harness();
  let product = product_with_stock("Insulin Pen", 2);
  h.inventory.insert(product.clone()).await.unwrap();

  let failing_cart = Arc::new(FailingCartStore {
    inner: InMemoryCartStore::new(),
    fail_insert: true,
    fail_clear: false,
  });
  let checkout = CheckoutOrchestrator::new(h.inventory.clone(), failing_cart, h.orders.clone());

  let err = checkout
    .add_to_cart(Uuid::new_v4(), add_request_for(&product))
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Internal(_)));

  // The compensating increment put the reserved unit back.
  assert_eq!(h.inventory.get(product.id).await.unwrap().unwrap().quantity_on_hand, 2);
}

#[tokio::test]
async fn failed_cart_clear_removes_the_inserted_order() {
  let h = harness();
  let user = Uuid::new_v4();

  let failing_cart = Arc::new(FailingCartStore {
    inner: InMemoryCartStore::new(),
    fail_insert: false,
    fail_clear: true,
  });
  let checkout = CheckoutOrchestrator::new(h.inventory.clone(), failing_cart, h.orders.clone());

  let err = checkout
    .place_order(user, "buyer@example.com", instore_order(vec![sample_line()], "PICKUP-9"))
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Internal(_)));

  // The order insert was compensated, so a retried checkout cannot see a
  // duplicate.
  assert!(checkout.order_history(user).await.unwrap().is_empty());
}
