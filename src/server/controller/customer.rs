//! Customer endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, customer::CustomerDto},
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::principal::SessionPrincipal},
        service::customer::CustomerService,
    },
};

/// OpenAPI tag of the customer endpoints
pub static CUSTOMER_TAG: &str = "customer";

/// Get the customer of the authenticated principal
///
/// # Responses
/// - 200 (Success): The customer
/// - 404 (Not Found): No principal in session or no customer for the principal
/// - 500 (Internal Server Error): A database or session error occurred
#[utoipa::path(
    get,
    path = "/api/customer",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Customer of the authenticated principal", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let customer_service = CustomerService::new(&state.db);

    let Some(principal) = SessionPrincipal::get(&session).await? else {
        return Err(AuthError::PrincipalNotInSession.into());
    };

    let Some(customer) = customer_service
        .get_customer_from_principal(&principal)
        .await?
    else {
        return Err(AuthError::CustomerNotFound(principal.name().to_string()).into());
    };

    Ok((
        StatusCode::OK,
        Json(CustomerDto {
            id: customer.id,
            open_id: customer.open_id,
            email_address: customer.email_address,
        }),
    ))
}
