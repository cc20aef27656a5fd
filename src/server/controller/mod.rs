//! HTTP controller endpoints for the merchant web API.
//!
//! Axum handlers for the payment swatch, the authenticated customer and the catalog. Each
//! handler carries a utoipa annotation so it appears in the OpenAPI document.

pub mod customer;
pub mod item;
pub mod swatch;
