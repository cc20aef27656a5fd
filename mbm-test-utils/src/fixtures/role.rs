use chrono::Utc;
use entity::sea_orm_active_enums::Authority;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::RoleModel, TestContext};

impl TestContext {
    pub fn role<'a>(&'a mut self) -> RoleFixtures<'a> {
        RoleFixtures { test: self }
    }
}

pub struct RoleFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> RoleFixtures<'a> {
    /// Insert a role with the provided name and no authorities
    pub async fn insert_role(&self, name: &str) -> Result<RoleModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MbmRole::insert(entity::mbm_role::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("{} description", name)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Grant an authority to an existing role
    pub async fn insert_authority(
        &self,
        role_id: i32,
        authority: Authority,
    ) -> Result<entity::mbm_role_authority::Model, TestError> {
        Ok(
            entity::prelude::MbmRoleAuthority::insert(entity::mbm_role_authority::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                authority: ActiveValue::Set(authority),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
