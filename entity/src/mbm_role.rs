use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mbm_role_authority::Entity")]
    MbmRoleAuthority,
    #[sea_orm(has_many = "super::mbm_user::Entity")]
    MbmUser,
}

impl Related<super::mbm_role_authority::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmRoleAuthority.def()
    }
}

impl Related<super::mbm_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
