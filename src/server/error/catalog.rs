//! Catalog errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Catalog lookup errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No item has the requested SKU.
    #[error("Item with SKU {0:?} not found")]
    ItemNotFound(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::ItemNotFound(ref sku) => {
                tracing::debug!(sku = %sku, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Item not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
