//! Catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, item::ItemDto},
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::{CatalogService, DEFAULT_LOCALE},
    },
};

/// OpenAPI tag of the catalog endpoints
pub static CATALOG_TAG: &str = "catalog";

/// Query parameters of the catalog endpoints.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Locale of the returned field details, defaults to `en`
    pub locale: Option<String>,
}

impl ItemQuery {
    fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

/// List all catalog items ordered by SKU
///
/// # Responses
/// - 200 (Success): The catalog items
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/items",
    tag = CATALOG_TAG,
    params(ItemQuery),
    responses(
        (status = 200, description = "Catalog items", body = Vec<ItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let items = catalog_service.list_items(query.locale()).await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get a single catalog item by SKU
///
/// # Responses
/// - 200 (Success): The catalog item
/// - 404 (Not Found): No item with the SKU exists
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/items/{sku}",
    tag = CATALOG_TAG,
    params(
        ("sku" = String, Path, description = "Stock keeping unit of the item"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Catalog item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Query(query): Query<ItemQuery>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let Some(item) = catalog_service.get_item(&sku, query.locale()).await? else {
        return Err(CatalogError::ItemNotFound(sku).into());
    };

    Ok((StatusCode::OK, Json(item)))
}
