use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CustomerModel, RoleModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose password and keys are derived from the username
    pub async fn insert_user(
        &self,
        username: &str,
        role_id: i32,
        customer_id: Option<i32>,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MbmUser::insert(entity::mbm_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(format!("{}1", username)),
                api_key: ActiveValue::Set(format!("{}123", username)),
                secret_key: ActiveValue::Set(format!("{}456", username)),
                role_id: ActiveValue::Set(role_id),
                customer_id: ActiveValue::Set(customer_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a role, a customer and a user linked to both
    pub async fn insert_user_with_customer(
        &mut self,
        username: &str,
        open_id: Option<&str>,
    ) -> Result<
        (UserModel, RoleModel, CustomerModel),
        TestError,
    > {
        let role_model = self
            .test
            .role()
            .insert_role(&format!("ROLE_{}", username.to_uppercase()))
            .await?;
        let customer_model = self.test.customer().insert_customer(open_id, None).await?;
        let user_model = self
            .insert_user(username, role_model.id, Some(customer_model.id))
            .await?;

        Ok((user_model, role_model, customer_model))
    }
}
