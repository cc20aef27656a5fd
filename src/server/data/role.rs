//! Role repository.

use chrono::Utc;
use entity::sea_orm_active_enums::Authority;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{db::RoleModel, role::NewRole};

/// Repository for roles and their granted authorities.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the role or updates the existing role with the same name
    ///
    /// The role's authorities are replaced by the provided set.
    pub async fn save_or_update(&self, role: &NewRole) -> Result<RoleModel, DbErr> {
        let now = Utc::now().naive_utc();

        let role_model = entity::prelude::MbmRole::insert(entity::mbm_role::ActiveModel {
            name: ActiveValue::Set(role.name.clone()),
            description: ActiveValue::Set(role.description.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::mbm_role::Column::Name)
                .update_columns([
                    entity::mbm_role::Column::Description,
                    entity::mbm_role::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        entity::prelude::MbmRoleAuthority::delete_many()
            .filter(entity::mbm_role_authority::Column::RoleId.eq(role_model.id))
            .exec(self.db)
            .await?;

        if !role.authorities.is_empty() {
            let authorities = role.authorities.iter().map(|authority| {
                entity::mbm_role_authority::ActiveModel {
                    role_id: ActiveValue::Set(role_model.id),
                    authority: ActiveValue::Set(*authority),
                    ..Default::default()
                }
            });

            entity::prelude::MbmRoleAuthority::insert_many(authorities)
                .exec(self.db)
                .await?;
        }

        Ok(role_model)
    }

    /// Finds a role by its unique name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::MbmRole::find()
            .filter(entity::mbm_role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets the authorities granted to a role, returning an empty list for unknown roles
    pub async fn get_authorities(&self, role_id: i32) -> Result<Vec<Authority>, DbErr> {
        let authorities = entity::prelude::MbmRoleAuthority::find()
            .filter(entity::mbm_role_authority::Column::RoleId.eq(role_id))
            .order_by_asc(entity::mbm_role_authority::Column::Authority)
            .all(self.db)
            .await?;

        Ok(authorities
            .into_iter()
            .map(|authority| authority.authority)
            .collect())
    }
}

#[cfg(test)]
mod tests {

    mod save_or_update {
        use entity::sea_orm_active_enums::Authority;
        use mbm_test_utils::prelude::*;
        use sea_orm::{EntityTrait, PaginatorTrait};

        use crate::server::{data::role::RoleRepository, model::role::RoleKind};

        /// Expect role and its authorities to be persisted
        #[tokio::test]
        async fn creates_role_with_authorities() -> Result<(), TestError> {
            let test = TestBuilder::new().with_merchant_tables().build().await?;

            let role_repo = RoleRepository::new(&test.db);
            let role = RoleKind::Customer.build();
            let result = role_repo.save_or_update(&role).await;

            assert!(result.is_ok());
            let role_model = result.unwrap();
            assert_eq!(role_model.name, "ROLE_CUSTOMER");
            let authorities = role_repo.get_authorities(role_model.id).await?;
            assert_eq!(authorities.len(), role.authorities.len());
            assert!(authorities.contains(&Authority::ManageOwnCart));

            Ok(())
        }

        /// Expect saving the same role twice to update in place rather than duplicate
        #[tokio::test]
        async fn updates_existing_role_by_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_merchant_tables().build().await?;

            let role_repo = RoleRepository::new(&test.db);
            let first = role_repo.save_or_update(&RoleKind::Admin.build()).await?;

            let mut changed = RoleKind::Admin.build();
            changed.description = "Store administrators".to_string();
            changed.authorities.remove(&Authority::CrudCarts);
            let second = role_repo.save_or_update(&changed).await?;

            assert_eq!(first.id, second.id);
            assert_eq!(second.description, "Store administrators");
            let role_count = entity::prelude::MbmRole::find().count(&test.db).await?;
            assert_eq!(role_count, 1);
            let authorities = role_repo.get_authorities(second.id).await?;
            assert_eq!(authorities.len(), changed.authorities.len());
            assert!(!authorities.contains(&Authority::CrudCarts));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let role_repo = RoleRepository::new(&test.db);
            let result = role_repo.save_or_update(&RoleKind::Client.build()).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_name {
        use mbm_test_utils::prelude::*;

        use crate::server::data::role::RoleRepository;

        /// Expect Some when role with name exists
        #[tokio::test]
        async fn finds_existing_role() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_merchant_tables()
                .with_mock_role("ROLE_CLIENT")
                .build()
                .await?;

            let role_repo = RoleRepository::new(&test.db);
            let result = role_repo.get_by_name("ROLE_CLIENT").await;

            assert!(matches!(result, Ok(Some(_))));

            Ok(())
        }

        /// Expect None when no role has the name
        #[tokio::test]
        async fn returns_none_for_unknown_name() -> Result<(), TestError> {
            let test = TestBuilder::new().with_merchant_tables().build().await?;

            let role_repo = RoleRepository::new(&test.db);
            let result = role_repo.get_by_name("ROLE_CLIENT").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
    mod get_authorities {
        use entity::sea_orm_active_enums::Authority;
        use mbm_test_utils::prelude::*;

        use crate::server::data::role::RoleRepository;

        /// Expect only the authorities granted to the role
        #[tokio::test]
        async fn returns_role_authorities() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_merchant_tables().build().await?;
            let customer_role = test.role().insert_role("ROLE_CUSTOMER").await?;
            let client_role = test.role().insert_role("ROLE_CLIENT").await?;
            test.role()
                .insert_authority(customer_role.id, Authority::ViewCatalog)
                .await?;
            test.role()
                .insert_authority(customer_role.id, Authority::ManageOwnCart)
                .await?;
            test.role()
                .insert_authority(client_role.id, Authority::ActForCustomer)
                .await?;

            let role_repo = RoleRepository::new(&test.db);
            let authorities = role_repo.get_authorities(customer_role.id).await?;

            assert_eq!(authorities.len(), 2);
            assert!(authorities.contains(&Authority::ViewCatalog));
            assert!(!authorities.contains(&Authority::ActForCustomer));

            Ok(())
        }

        /// Expect the same authority to be granted to a role only once
        #[tokio::test]
        async fn rejects_duplicate_authority() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_merchant_tables().build().await?;
            let customer_role = test.role().insert_role("ROLE_CUSTOMER").await?;
            test.role()
                .insert_authority(customer_role.id, Authority::ViewCatalog)
                .await?;

            let result = test
                .role()
                .insert_authority(customer_role.id, Authority::ViewCatalog)
                .await;

            assert!(result.is_err());
            let role_repo = RoleRepository::new(&test.db);
            let authorities = role_repo.get_authorities(customer_role.id).await?;
            assert_eq!(authorities, vec![Authority::ViewCatalog]);

            Ok(())
        }

        /// Expect an empty list for a role that does not exist
        #[tokio::test]
        async fn returns_empty_for_unknown_role() -> Result<(), TestError> {
            let test = TestBuilder::new().with_merchant_tables().build().await?;

            let role_repo = RoleRepository::new(&test.db);
            let authorities = role_repo.get_authorities(1).await?;

            assert!(authorities.is_empty());

            Ok(())
        }
    }
}
