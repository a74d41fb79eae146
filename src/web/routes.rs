// src/web/routes.rs

use actix_web::web;

// In a real deployment this might check store health; the in-memory
// backend has nothing to probe.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Wires every route. The checkout-flow paths are flat because that is the
/// contract the storefront already speaks.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Checkout flow
    .route(
      "/addtocart",
      web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
    )
    .route(
      "/getcartitems",
      web::get().to(crate::web::handlers::cart_handlers::get_cart_items_handler),
    )
    .route(
      "/deletecartproduct/{id}",
      web::delete().to(crate::web::handlers::cart_handlers::delete_cart_product_handler),
    )
    .route(
      "/saveorder",
      web::post().to(crate::web::handlers::checkout_handlers::save_order_handler),
    )
    .route(
      "/getorders",
      web::get().to(crate::web::handlers::order_handlers::get_orders_handler),
    )
    // Catalog
    .service(
      web::scope("/products")
        .service(
          web::resource("")
            .route(web::get().to(crate::web::handlers::product_handlers::list_products_handler))
            .route(web::post().to(crate::web::handlers::product_handlers::create_product_handler)),
        )
        .service(
          web::resource("/{product_id}")
            .route(web::get().to(crate::web::handlers::product_handlers::get_product_handler))
            .route(web::delete().to(crate::web::handlers::product_handlers::delete_product_handler)),
        ),
    );
}
