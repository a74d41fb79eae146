// src/services/mod.rs

pub mod auth_service;
