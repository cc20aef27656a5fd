//! Catalog service layer.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::item::ItemDto,
    server::{
        data::item::ItemRepository,
        error::Error,
        model::db::{ItemFieldDetailModel, ItemModel},
    },
};

/// Locale used when a request does not name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Service for reading catalog items.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every item ordered by SKU with its field details in the given locale.
    pub async fn list_items(&self, locale: &str) -> Result<Vec<ItemDto>, Error> {
        let item_repo = ItemRepository::new(self.db);

        let items = item_repo.get_all().await?;
        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

        let mut details_by_item: HashMap<i32, Vec<ItemFieldDetailModel>> = HashMap::new();
        for detail in item_repo.get_field_details(&item_ids, locale).await? {
            details_by_item.entry(detail.item_id).or_default().push(detail);
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let details = details_by_item.remove(&item.id).unwrap_or_default();
                to_dto(item, details, locale)
            })
            .collect())
    }

    /// Gets a single item by SKU with its field details in the given locale.
    ///
    /// # Returns
    /// - `Ok(Some(ItemDto))` - Item found
    /// - `Ok(None)` - No item with the SKU exists
    pub async fn get_item(&self, sku: &str, locale: &str) -> Result<Option<ItemDto>, Error> {
        let item_repo = ItemRepository::new(self.db);

        let Some(item) = item_repo.get_by_sku(sku).await? else {
            return Ok(None);
        };

        let details = item_repo.get_field_details(&[item.id], locale).await?;

        Ok(Some(to_dto(item, details, locale)))
    }
}

fn to_dto(item: ItemModel, details: Vec<ItemFieldDetailModel>, locale: &str) -> ItemDto {
    let fields: BTreeMap<String, String> = details
        .into_iter()
        .map(|detail| (detail.item_field.to_value(), detail.content))
        .collect();

    ItemDto {
        sku: item.sku,
        gtin: item.gtin,
        locale: locale.to_string(),
        fields,
    }
}
