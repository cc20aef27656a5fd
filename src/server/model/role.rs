//! Role kinds and the fixed authority set each kind carries.

use std::collections::BTreeSet;

use entity::sea_orm_active_enums::Authority;
use sea_orm::ActiveEnum;

/// The three roles shared between users of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Store administration staff
    Admin,
    /// People buying from the store
    Customer,
    /// Applications acting on behalf of the store, such as a shop front
    Client,
}

impl RoleKind {
    /// Every role kind, in seeding order.
    pub const ALL: [RoleKind; 3] = [RoleKind::Admin, RoleKind::Customer, RoleKind::Client];

    /// The authority that marks a user as holding this role.
    pub fn marker(self) -> Authority {
        match self {
            Self::Admin => Authority::RoleAdmin,
            Self::Customer => Authority::RoleCustomer,
            Self::Client => Authority::RoleClient,
        }
    }

    /// Canonical role name, e.g. `ROLE_ADMIN`.
    pub fn name(self) -> String {
        self.marker().to_value()
    }

    /// Human readable description stored with the role.
    pub fn description(self) -> &'static str {
        match self {
            Self::Admin => "Administration role",
            Self::Customer => "Customer role",
            Self::Client => "Client role",
        }
    }

    /// The fixed authority set for this kind, always including [`RoleKind::marker`].
    pub fn authorities(self) -> BTreeSet<Authority> {
        let granted: &[Authority] = match self {
            Self::Admin => &[
                Authority::CrudUsers,
                Authority::CrudRoles,
                Authority::CrudCustomers,
                Authority::CrudItems,
                Authority::CrudCarts,
                Authority::ViewCatalog,
            ],
            Self::Customer => &[
                Authority::ViewCatalog,
                Authority::ManageOwnCart,
                Authority::ManageOwnProfile,
            ],
            Self::Client => &[
                Authority::ViewCatalog,
                Authority::CrudCarts,
                Authority::ActForCustomer,
            ],
        };

        std::iter::once(self.marker())
            .chain(granted.iter().copied())
            .collect()
    }

    /// Build a transient role for this kind.
    pub fn build(self) -> NewRole {
        NewRole {
            name: self.name(),
            description: self.description().to_string(),
            authorities: self.authorities(),
        }
    }
}

/// A role that has not yet been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    /// Unique role name
    pub name: String,
    /// Human readable description
    pub description: String,
    /// Authorities granted by the role
    pub authorities: BTreeSet<Authority>,
}
