//! Authentication service layer.
//!
//! Credential checks happen in the external security filter. This service is the hook it
//! calls once a principal has been authenticated.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::{auth::Principal, session::principal::SessionPrincipal},
    service::customer::CustomerService,
};

/// Service handling successful authentications.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an authenticated principal.
    ///
    /// OpenID principals are registered as customers on first sight. The principal is then
    /// stored in the session for later requests.
    ///
    /// # Returns
    /// - `Ok(())` - Principal recorded and stored in session
    /// - `Err(Error::DbErr)` - Failed to register the customer
    /// - `Err(Error::SessionError)` - Failed to store the principal in session
    pub async fn authentication_success(
        &self,
        session: &Session,
        principal: Principal,
    ) -> Result<(), Error> {
        if let Principal::OpenId(assertion) = &principal {
            let customer_service = CustomerService::new(self.db);
            let customer = customer_service
                .have_been_authenticated(&assertion.identity_url)
                .await?;

            tracing::debug!(customer_id = %customer.id, "Authenticated OpenID customer");
        }

        SessionPrincipal::insert(session, principal).await?;

        Ok(())
    }
}
