use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ContactMethod;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_user_contact_method")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "user_contact_method")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_contact_method")]
    pub contact_method: ContactMethod,
    pub detail: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mbm_user::Entity",
        from = "Column::UserId",
        to = "super::mbm_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MbmUser,
}

impl Related<super::mbm_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
