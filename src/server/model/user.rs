//! Transient users and customers.

use std::collections::BTreeMap;

use entity::sea_orm_active_enums::ContactMethod;

use crate::server::model::db::RoleModel;

/// A customer that has not yet been persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    /// OpenID identity URL the customer authenticates with
    pub open_id: Option<String>,
    /// Email address, filled in lazily on authentication
    pub email_address: Option<String>,
}

impl NewCustomer {
    /// A customer known only by its OpenID identity.
    pub fn with_open_id(open_id: impl Into<String>) -> Self {
        Self {
            open_id: Some(open_id.into()),
            email_address: None,
        }
    }
}

/// Login and API credentials of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Unique login name
    pub username: String,
    /// Opaque credential, stored as provided
    pub password: String,
    /// Public half of the API credentials
    pub api_key: String,
    /// Secret half of the API credentials
    pub secret_key: String,
}

/// A user that has not yet been persisted.
///
/// A user can only be built from an already persisted [`RoleModel`], so roles must be
/// saved before the users referencing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Login and API credentials
    pub credentials: Credentials,
    /// Contact details keyed by contact method
    pub contact_methods: BTreeMap<ContactMethod, String>,
    /// Customer to create for or merge into the user
    pub customer: Option<NewCustomer>,
    role_id: i32,
}

impl NewUser {
    /// A user with the given role, no contact methods and no customer.
    pub fn new(credentials: Credentials, role: &RoleModel) -> Self {
        Self {
            credentials,
            contact_methods: BTreeMap::new(),
            customer: None,
            role_id: role.id,
        }
    }

    /// Set the detail for a contact method, replacing any previous detail.
    pub fn with_contact_method(mut self, method: ContactMethod, detail: impl Into<String>) -> Self {
        self.contact_methods.insert(method, detail.into());
        self
    }

    /// Links a customer to the user.
    pub fn with_customer(mut self, customer: NewCustomer) -> Self {
        self.customer = Some(customer);
        self
    }

    /// ID of the persisted role the user was built with.
    pub fn role_id(&self) -> i32 {
        self.role_id
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn role(id: i32) -> RoleModel {
        let now = Utc::now().naive_utc();
        RoleModel {
            id,
            name: "ROLE_CUSTOMER".to_string(),
            description: "Customer role".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "alice".to_string(),
            password: "alice1".to_string(),
            api_key: "alice123".to_string(),
            secret_key: "alice456".to_string(),
        }
    }

    #[test]
    fn takes_role_id_from_persisted_role() {
        let user = NewUser::new(credentials(), &role(7));

        assert_eq!(user.role_id(), 7);
        assert!(user.customer.is_none());
        assert!(user.contact_methods.is_empty());
    }

    #[test]
    fn contact_method_is_keyed_by_type() {
        let user = NewUser::new(credentials(), &role(1))
            .with_contact_method(ContactMethod::Email, "old@example.org")
            .with_contact_method(ContactMethod::Names, "Alice")
            .with_contact_method(ContactMethod::Email, "alice@example.org");

        assert_eq!(user.contact_methods.len(), 2);
        assert_eq!(
            user.contact_methods.get(&ContactMethod::Email).map(String::as_str),
            Some("alice@example.org")
        );
    }
}
