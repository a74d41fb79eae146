// src/models/mod.rs

//! Data structures for the entities the checkout flow touches.

pub mod cart_line;
pub mod order;
pub mod product;

// Re-export the model structs for convenient access
pub use cart_line::CartLine;
pub use order::{DeliveryAddress, Fulfillment, Order, OrderLine};
pub use product::{Category, Product};
