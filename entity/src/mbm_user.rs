use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    #[sea_orm(unique)]
    pub api_key: String,
    pub secret_key: String,
    pub role_id: i32,
    #[sea_orm(unique)]
    pub customer_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mbm_role::Entity",
        from = "Column::RoleId",
        to = "super::mbm_role::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    MbmRole,
    #[sea_orm(
        belongs_to = "super::mbm_customer::Entity",
        from = "Column::CustomerId",
        to = "super::mbm_customer::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    MbmCustomer,
    #[sea_orm(has_many = "super::mbm_user_contact_method::Entity")]
    MbmUserContactMethod,
}

impl Related<super::mbm_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmRole.def()
    }
}

impl Related<super::mbm_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmCustomer.def()
    }
}

impl Related<super::mbm_user_contact_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmUserContactMethod.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
