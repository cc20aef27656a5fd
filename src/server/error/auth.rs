//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors resolving the authenticated principal of a request.
///
/// Both variants respond with 404 so clients cannot tell a missing session apart from a
/// principal without customer.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The session carries no principal.
    #[error("No authenticated principal is present in session")]
    PrincipalNotInSession,
    /// The principal does not resolve to a customer.
    #[error("No customer is associated with principal {0:?}")]
    CustomerNotFound(String),
}

impl AuthError {
    fn customer_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Customer not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::PrincipalNotInSession => {
                tracing::debug!("{}", Self::PrincipalNotInSession);

                Self::customer_not_found()
            }
            Self::CustomerNotFound(ref principal) => {
                tracing::debug!(
                    principal = %principal,
                    "{}",
                    self
                );

                Self::customer_not_found()
            }
        }
    }
}
