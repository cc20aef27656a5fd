//! Customer service layer.
//!
//! Resolves authenticated principals to customers, creating customers on first sight of an
//! OpenID identity. Each operation runs in its own transaction.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{customer::CustomerRepository, user::UserRepository},
    error::Error,
    model::{auth::Principal, db::CustomerModel},
};

/// Service for resolving customers from authenticated principals.
pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    /// Creates a new instance of CustomerService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a successful OpenID authentication.
    ///
    /// Creates a customer for the identity if none exists yet. The insert is guarded by the
    /// unique constraint on the identity, so concurrent calls for the same identity still
    /// result in a single customer.
    ///
    /// # Arguments
    /// - `open_id` - Identity URL asserted by the OpenID provider
    ///
    /// # Returns
    /// - `Ok(CustomerModel)` - The existing or newly created customer
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn have_been_authenticated(&self, open_id: &str) -> Result<CustomerModel, Error> {
        let txn = self.db.begin().await?;

        let customer = Self::get_or_create(&txn, open_id).await?;

        txn.commit().await?;

        Ok(customer)
    }

    /// Resolves the customer belonging to an authenticated principal.
    ///
    /// OpenID principals go through the same get-or-create path as
    /// [`CustomerService::have_been_authenticated`], after which a missing email address is
    /// filled in from the assertion. Username principals resolve to the customer linked to
    /// the user.
    ///
    /// # Returns
    /// - `Ok(Some(CustomerModel))` - Customer for the principal
    /// - `Ok(None)` - Username is unknown or the user has no customer
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn get_customer_from_principal(
        &self,
        principal: &Principal,
    ) -> Result<Option<CustomerModel>, Error> {
        match principal {
            Principal::OpenId(assertion) => {
                let txn = self.db.begin().await?;

                let mut customer = Self::get_or_create(&txn, &assertion.identity_url).await?;

                if customer.email_address.is_none() {
                    if let Some(email_address) = assertion.email() {
                        let customer_repo = CustomerRepository::new(&txn);

                        customer = customer_repo
                            .update_email(customer.id, email_address)
                            .await?
                            .ok_or_else(|| {
                                Error::InternalError(format!(
                                    "Customer ID {} disappeared while updating its email address",
                                    customer.id
                                ))
                            })?;
                    }
                }

                txn.commit().await?;

                Ok(Some(customer))
            }
            Principal::Username(username) => {
                let user_repo = UserRepository::new(self.db);

                Ok(user_repo
                    .get_with_customer(username)
                    .await?
                    .and_then(|(_, customer)| customer))
            }
        }
    }

    async fn get_or_create<C: ConnectionTrait>(
        db: &C,
        open_id: &str,
    ) -> Result<CustomerModel, Error> {
        let customer_repo = CustomerRepository::new(db);

        if customer_repo.create_if_absent(open_id).await? {
            tracing::info!(open_id = %open_id, "Created customer for new OpenID identity");
        }

        customer_repo.get_by_open_id(open_id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Customer for OpenID identity {:?} not found directly after insert",
                open_id
            ))
        })
    }
}
