use chrono::Utc;
use entity::sea_orm_active_enums::ItemField;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ItemModel, TestContext};

impl TestContext {
    pub fn item<'a>(&'a mut self) -> ItemFixtures<'a> {
        ItemFixtures { test: self }
    }
}

pub struct ItemFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> ItemFixtures<'a> {
    /// Insert an item with an English title
    pub async fn insert_item(
        &self,
        sku: &str,
        title: &str,
    ) -> Result<ItemModel, TestError> {
        let now = Utc::now().naive_utc();

        let item_model = entity::prelude::MbmItem::insert(entity::mbm_item::ActiveModel {
            sku: ActiveValue::Set(sku.to_string()),
            gtin: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?;

        self.insert_field_detail(item_model.id, ItemField::Title, "en", title)
            .await?;

        Ok(item_model)
    }

    pub async fn insert_field_detail(
        &self,
        item_id: i32,
        item_field: ItemField,
        locale: &str,
        content: &str,
    ) -> Result<entity::mbm_item_field_detail::Model, TestError> {
        Ok(entity::prelude::MbmItemFieldDetail::insert(
            entity::mbm_item_field_detail::ActiveModel {
                item_id: ActiveValue::Set(item_id),
                item_field: ActiveValue::Set(item_field),
                locale: ActiveValue::Set(locale.to_string()),
                content: ActiveValue::Set(content.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
