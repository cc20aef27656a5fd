//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification. Swagger UI
//! is served at `/api/docs` and the raw document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /swatch` - Plain text payment swatch
/// - `GET /api/customer` - Customer of the authenticated principal
/// - `GET /api/items` - Catalog items
/// - `GET /api/items/{sku}` - Single catalog item
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "MBM", description = "Merchant backend API"), tags(
        (name = controller::swatch::PAYMENT_TAG, description = "Payment API routes"),
        (name = controller::customer::CUSTOMER_TAG, description = "Customer API routes"),
        (name = controller::item::CATALOG_TAG, description = "Catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::swatch::create_swatch))
        .routes(routes!(controller::customer::get_customer))
        .routes(routes!(controller::item::list_items))
        .routes(routes!(controller::item::get_item))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
