use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sku: String,
    pub gtin: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mbm_item_field_detail::Entity")]
    MbmItemFieldDetail,
}

impl Related<super::mbm_item_field_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmItemFieldDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
