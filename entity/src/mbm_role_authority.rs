use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Authority;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_role_authority")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "role_authority")]
    pub role_id: i32,
    #[sea_orm(unique_key = "role_authority")]
    pub authority: Authority,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mbm_role::Entity",
        from = "Column::RoleId",
        to = "super::mbm_role::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MbmRole,
}

impl Related<super::mbm_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
