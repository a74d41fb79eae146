// src/lib.rs

//! Pharmacy e-commerce backend.
//!
//! The interesting part is the cart-to-order checkout flow in [`checkout`]:
//! inventory decrement on add-to-cart, the symmetric increment on removal,
//! and the two-branch (home delivery / in-store pickup) order placement
//! that snapshots the cart and clears it. Everything persists through the
//! injected store traits in [`stores`].

pub mod checkout;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod web;
