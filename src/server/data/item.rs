//! Catalog item repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    db::{ItemFieldDetailModel, ItemModel},
    item::NewItem,
};

/// Repository for catalog items and their localized field details.
pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the item or updates the existing item with the same SKU
    ///
    /// The item's field details are replaced by the provided set.
    pub async fn save_or_update(&self, item: &NewItem) -> Result<ItemModel, DbErr> {
        let now = Utc::now().naive_utc();

        let item_model = entity::prelude::MbmItem::insert(entity::mbm_item::ActiveModel {
            sku: ActiveValue::Set(item.sku.clone()),
            gtin: ActiveValue::Set(item.gtin.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::mbm_item::Column::Sku)
                .update_columns([
                    entity::mbm_item::Column::Gtin,
                    entity::mbm_item::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        entity::prelude::MbmItemFieldDetail::delete_many()
            .filter(entity::mbm_item_field_detail::Column::ItemId.eq(item_model.id))
            .exec(self.db)
            .await?;

        let field_details: Vec<_> = item
            .field_details()
            .map(
                |(item_field, locale, content)| entity::mbm_item_field_detail::ActiveModel {
                    item_id: ActiveValue::Set(item_model.id),
                    item_field: ActiveValue::Set(item_field),
                    locale: ActiveValue::Set(locale.to_string()),
                    content: ActiveValue::Set(content.to_string()),
                    ..Default::default()
                },
            )
            .collect();

        if !field_details.is_empty() {
            entity::prelude::MbmItemFieldDetail::insert_many(field_details)
                .exec(self.db)
                .await?;
        }

        Ok(item_model)
    }

    /// Finds an item by SKU
    pub async fn get_by_sku(&self, sku: &str) -> Result<Option<ItemModel>, DbErr> {
        entity::prelude::MbmItem::find()
            .filter(entity::mbm_item::Column::Sku.eq(sku))
            .one(self.db)
            .await
    }

    /// Gets every item ordered by SKU
    pub async fn get_all(&self) -> Result<Vec<ItemModel>, DbErr> {
        entity::prelude::MbmItem::find()
            .order_by_asc(entity::mbm_item::Column::Sku)
            .all(self.db)
            .await
    }

    /// Gets the field details of the provided items in a single locale
    pub async fn get_field_details(
        &self,
        item_ids: &[i32],
        locale: &str,
    ) -> Result<Vec<ItemFieldDetailModel>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MbmItemFieldDetail::find()
            .filter(entity::mbm_item_field_detail::Column::ItemId.is_in(item_ids.iter().copied()))
            .filter(entity::mbm_item_field_detail::Column::Locale.eq(locale))
            .order_by_asc(entity::mbm_item_field_detail::Column::ItemId)
            .order_by_asc(entity::mbm_item_field_detail::Column::ItemField)
            .all(self.db)
            .await
    }
}
