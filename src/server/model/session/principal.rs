//! Authenticated principal stored in session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::Error, model::auth::Principal};

/// Session key holding the authenticated principal.
pub const SESSION_PRINCIPAL_KEY: &str = "mbm:auth:principal";

/// The principal stored in session after a successful authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct SessionPrincipal(pub Principal);

impl SessionPrincipal {
    /// Insert the authenticated principal into session
    pub async fn insert(session: &Session, principal: Principal) -> Result<(), Error> {
        session
            .insert(SESSION_PRINCIPAL_KEY, SessionPrincipal(principal))
            .await?;

        Ok(())
    }

    /// Get the authenticated principal from session
    pub async fn get(session: &Session) -> Result<Option<Principal>, Error> {
        Ok(session
            .get::<SessionPrincipal>(SESSION_PRINCIPAL_KEY)
            .await?
            .map(|SessionPrincipal(principal)| principal))
    }
}
