//! User repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::customer::CustomerRepository,
    model::{
        db::{CustomerModel, UserContactMethodModel, UserModel},
        user::{NewCustomer, NewUser},
    },
};

/// Repository for users, their contact methods and linked customers.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the user or updates the existing user with the same username
    ///
    /// If the user already has a linked customer it is reused, with any provided customer
    /// fields applied to it; otherwise a new customer is created. A user saved without a
    /// customer is unlinked from its previous customer, which is deleted. Contact methods are
    /// replaced by the provided set.
    ///
    /// # Notes
    /// - The role must exist in the mbm_role table due to foreign key constraint
    /// - Pass a transaction as the connection to save the user and its children atomically
    pub async fn save_or_update(&self, user: &NewUser) -> Result<UserModel, DbErr> {
        let existing = self.get_by_username(&user.credentials.username).await?;

        let customer_id = match &user.customer {
            Some(customer) => {
                let linked_customer_id = existing.as_ref().and_then(|user| user.customer_id);
                Some(self.save_customer(linked_customer_id, customer).await?.id)
            }
            None => None,
        };

        let now = Utc::now().naive_utc();
        let user_model = entity::prelude::MbmUser::insert(entity::mbm_user::ActiveModel {
            username: ActiveValue::Set(user.credentials.username.clone()),
            password: ActiveValue::Set(user.credentials.password.clone()),
            api_key: ActiveValue::Set(user.credentials.api_key.clone()),
            secret_key: ActiveValue::Set(user.credentials.secret_key.clone()),
            role_id: ActiveValue::Set(user.role_id()),
            customer_id: ActiveValue::Set(customer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::mbm_user::Column::Username)
                .update_columns([
                    entity::mbm_user::Column::Password,
                    entity::mbm_user::Column::ApiKey,
                    entity::mbm_user::Column::SecretKey,
                    entity::mbm_user::Column::RoleId,
                    entity::mbm_user::Column::CustomerId,
                    entity::mbm_user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        if let Some(unlinked_customer_id) = existing
            .and_then(|user| user.customer_id)
            .filter(|_| customer_id.is_none())
        {
            entity::prelude::MbmCustomer::delete_by_id(unlinked_customer_id)
                .exec(self.db)
                .await?;
        }

        entity::prelude::MbmUserContactMethod::delete_many()
            .filter(entity::mbm_user_contact_method::Column::UserId.eq(user_model.id))
            .exec(self.db)
            .await?;

        if !user.contact_methods.is_empty() {
            let contact_methods = user.contact_methods.iter().map(|(method, detail)| {
                entity::mbm_user_contact_method::ActiveModel {
                    user_id: ActiveValue::Set(user_model.id),
                    contact_method: ActiveValue::Set(*method),
                    detail: ActiveValue::Set(detail.clone()),
                    ..Default::default()
                }
            });

            entity::prelude::MbmUserContactMethod::insert_many(contact_methods)
                .exec(self.db)
                .await?;
        }

        Ok(user_model)
    }

    async fn save_customer(
        &self,
        linked_customer_id: Option<i32>,
        customer: &NewCustomer,
    ) -> Result<CustomerModel, DbErr> {
        let customer_repo = CustomerRepository::new(self.db);

        let linked_customer = match linked_customer_id {
            Some(customer_id) => customer_repo.get_by_id(customer_id).await?,
            None => None,
        };

        let Some(linked_customer) = linked_customer else {
            return customer_repo.create(customer).await;
        };

        if customer.open_id.is_none() && customer.email_address.is_none() {
            return Ok(linked_customer);
        }

        let mut customer_am = linked_customer.into_active_model();
        if let Some(open_id) = &customer.open_id {
            customer_am.open_id = ActiveValue::Set(Some(open_id.clone()));
        }
        if let Some(email_address) = &customer.email_address {
            customer_am.email_address = ActiveValue::Set(Some(email_address.clone()));
        }
        customer_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        customer_am.update(self.db).await
    }

    /// Finds a user by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::MbmUser::find()
            .filter(entity::mbm_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Gets a user along with the customer linked to it, if any
    pub async fn get_with_customer(
        &self,
        username: &str,
    ) -> Result<Option<(UserModel, Option<CustomerModel>)>, DbErr> {
        entity::prelude::MbmUser::find()
            .filter(entity::mbm_user::Column::Username.eq(username))
            .find_also_related(entity::mbm_customer::Entity)
            .one(self.db)
            .await
    }

    /// Contact methods of a user, ordered by method
    pub async fn get_contact_methods(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserContactMethodModel>, DbErr> {
        entity::prelude::MbmUserContactMethod::find()
            .filter(entity::mbm_user_contact_method::Column::UserId.eq(user_id))
            .order_by_asc(entity::mbm_user_contact_method::Column::ContactMethod)
            .all(self.db)
            .await
    }
}
