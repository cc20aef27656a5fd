use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::CustomerModel, TestContext};

impl TestContext {
    pub fn customer<'a>(&'a mut self) -> CustomerFixtures<'a> {
        CustomerFixtures { test: self }
    }
}

pub struct CustomerFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> CustomerFixtures<'a> {
    pub async fn insert_customer(
        &self,
        open_id: Option<&str>,
        email_address: Option<&str>,
    ) -> Result<CustomerModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MbmCustomer::insert(entity::mbm_customer::ActiveModel {
                open_id: ActiveValue::Set(open_id.map(str::to_string)),
                email_address: ActiveValue::Set(email_address.map(str::to_string)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
