//! Shopify Admin API
//!
//! Only product creation is needed: one `POST /products.json` per product,
//! with the outcome reported back to the caller as-is.

pub mod client;
pub mod constants;
pub mod models;

pub use client::{ProductSubmitter, ShopifyClient};
pub use models::{ProductPayload, ProductRequest};
