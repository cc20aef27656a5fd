use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ItemField;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mbm_item_field_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique_key = "item_field_locale")]
    pub item_id: i32,
    #[sea_orm(unique_key = "item_field_locale")]
    pub item_field: ItemField,
    #[sea_orm(unique_key = "item_field_locale")]
    pub locale: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mbm_item::Entity",
        from = "Column::ItemId",
        to = "super::mbm_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MbmItem,
}

impl Related<super::mbm_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MbmItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
