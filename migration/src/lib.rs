pub use sea_orm_migration::prelude::*;

mod m20261019_000001_mbm_role;
mod m20261019_000002_mbm_role_authority;
mod m20261019_000003_mbm_customer;
mod m20261019_000004_mbm_user;
mod m20261019_000005_mbm_user_contact_method;
mod m20261019_000006_mbm_item;
mod m20261019_000007_mbm_item_field_detail;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_mbm_role::Migration),
            Box::new(m20261019_000002_mbm_role_authority::Migration),
            Box::new(m20261019_000003_mbm_customer::Migration),
            Box::new(m20261019_000004_mbm_user::Migration),
            Box::new(m20261019_000005_mbm_user_contact_method::Migration),
            Box::new(m20261019_000006_mbm_item::Migration),
            Box::new(m20261019_000007_mbm_item_field_detail::Migration),
        ]
    }
}
