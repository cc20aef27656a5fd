//! Customer repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::{db::CustomerModel, user::NewCustomer};

/// Repository for the mbm_customer table.
pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    /// Creates a new instance of [`CustomerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer
    pub async fn create(&self, customer: &NewCustomer) -> Result<CustomerModel, DbErr> {
        let now = Utc::now().naive_utc();

        let customer = entity::mbm_customer::ActiveModel {
            open_id: ActiveValue::Set(customer.open_id.clone()),
            email_address: ActiveValue::Set(customer.email_address.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        customer.insert(self.db).await
    }

    /// Finds a customer by its ID
    pub async fn get_by_id(&self, customer_id: i32) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::MbmCustomer::find_by_id(customer_id)
            .one(self.db)
            .await
    }

    /// Finds a customer by its OpenID identity URL
    pub async fn get_by_open_id(&self, open_id: &str) -> Result<Option<CustomerModel>, DbErr> {
        entity::prelude::MbmCustomer::find()
            .filter(entity::mbm_customer::Column::OpenId.eq(open_id))
            .one(self.db)
            .await
    }

    /// Creates a customer for the OpenID identity unless one already exists
    ///
    /// Relies on the unique constraint on `open_id`, so concurrent callers cannot create
    /// duplicates. Returns `true` if a customer was created.
    pub async fn create_if_absent(&self, open_id: &str) -> Result<bool, DbErr> {
        let now = Utc::now().naive_utc();

        let rows_affected = entity::prelude::MbmCustomer::insert(entity::mbm_customer::ActiveModel {
            open_id: ActiveValue::Set(Some(open_id.to_string())),
            email_address: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::mbm_customer::Column::OpenId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows_affected > 0)
    }

    /// Sets the email address of a customer
    ///
    /// Returns `None` if the customer does not exist.
    pub async fn update_email(
        &self,
        customer_id: i32,
        email_address: &str,
    ) -> Result<Option<CustomerModel>, DbErr> {
        let customer = match entity::prelude::MbmCustomer::find_by_id(customer_id)
            .one(self.db)
            .await?
        {
            Some(customer) => customer,
            None => return Ok(None),
        };

        let mut customer_am = customer.into_active_model();
        customer_am.email_address = ActiveValue::Set(Some(email_address.to_string()));
        customer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let customer = customer_am.update(self.db).await?;

        Ok(Some(customer))
    }
}
