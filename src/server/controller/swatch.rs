//! Payment swatch endpoint.

use axum::extract::Query;
use serde::Deserialize;
use utoipa::IntoParams;

/// OpenAPI tag of the payment endpoints
pub static PAYMENT_TAG: &str = "payment";

/// Query parameters of a payment swatch.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SwatchParams {
    /// Amount to pay, passed through exactly as given
    pub amount: String,
    /// Bitcoin address receiving the payment
    pub address: String,
    /// Label shown alongside the payment
    pub label: String,
}

/// Create a payment swatch
///
/// Renders the payment request as plain text in the form `<address> <amount> <label>`.
///
/// # Responses
/// - 200 (Success): The swatch text
/// - 400 (Bad Request): A query parameter is missing
#[utoipa::path(
    get,
    path = "/swatch",
    tag = PAYMENT_TAG,
    params(SwatchParams),
    responses(
        (status = 200, description = "Payment swatch", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing query parameter")
    ),
)]
pub async fn create_swatch(Query(params): Query<SwatchParams>) -> String {
    format!("{} {} {}", params.address, params.amount, params.label)
}
