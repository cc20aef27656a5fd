//! Demo data seeding.
//!
//! Populates the shared roles, the demo users and the demo book catalog. Each phase runs in
//! its own transaction and every record is saved by natural key, so re-running the loader
//! updates the existing records instead of duplicating them.

pub mod catalog;
pub mod users;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{item::ItemRepository, role::RoleRepository, user::UserRepository},
    error::Error,
    model::{db::RoleModel, role::RoleKind},
};

/// The persisted roles shared between the demo users.
pub struct SeededRoles {
    /// `ROLE_ADMIN`
    pub admin: RoleModel,
    /// `ROLE_CUSTOMER`
    pub customer: RoleModel,
    /// `ROLE_CLIENT`
    pub client: RoleModel,
}

/// Loads the demo data into the database.
pub struct DatabaseLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseLoader<'a> {
    /// Creates a new instance of [`DatabaseLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds roles, then users referencing those roles, then the catalog.
    ///
    /// A failure in any phase is returned immediately; phases already committed remain.
    pub async fn initialise(&self) -> Result<(), Error> {
        tracing::info!("Populating database");

        let roles = self.seed_roles().await?;
        self.seed_users(&roles).await?;
        self.seed_catalog().await?;

        tracing::info!("Complete");

        Ok(())
    }

    /// Saves the admin, customer and client roles with their authorities.
    pub async fn seed_roles(&self) -> Result<SeededRoles, Error> {
        let txn = self.db.begin().await?;
        let role_repo = RoleRepository::new(&txn);

        let admin = role_repo.save_or_update(&RoleKind::Admin.build()).await?;
        let customer = role_repo.save_or_update(&RoleKind::Customer.build()).await?;
        let client = role_repo.save_or_update(&RoleKind::Client.build()).await?;

        txn.commit().await?;

        tracing::debug!("Seeded {} roles", RoleKind::ALL.len());

        Ok(SeededRoles {
            admin,
            customer,
            client,
        })
    }

    /// Saves the demo users, linking each to one of the seeded roles.
    pub async fn seed_users(&self, roles: &SeededRoles) -> Result<(), Error> {
        let demo_users = users::demo_users(roles);

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        for user in &demo_users {
            user_repo.save_or_update(user).await?;
        }

        txn.commit().await?;

        tracing::debug!("Seeded {} users", demo_users.len());

        Ok(())
    }

    /// Saves the demo book catalog.
    pub async fn seed_catalog(&self) -> Result<(), Error> {
        let demo_catalog = catalog::demo_catalog();

        let txn = self.db.begin().await?;
        let item_repo = ItemRepository::new(&txn);

        for item in &demo_catalog {
            item_repo.save_or_update(item).await?;
        }

        txn.commit().await?;

        tracing::debug!("Seeded {} catalog items", demo_catalog.len());

        Ok(())
    }
}
