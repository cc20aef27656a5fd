//! Transient catalog items.

use std::collections::BTreeMap;

use entity::sea_orm_active_enums::ItemField;

/// An item that has not yet been persisted.
///
/// Field details are keyed by (field, locale), so each pair holds at most one primary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Merchant stock keeping unit, unique per item
    pub sku: String,
    /// Global trade item number, if the item has one
    pub gtin: Option<String>,
    field_details: BTreeMap<(ItemField, String), String>,
}

impl NewItem {
    /// An item with no GTIN and no field details.
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            gtin: None,
            field_details: BTreeMap::new(),
        }
    }

    /// Sets the GTIN.
    pub fn with_gtin(mut self, gtin: impl Into<String>) -> Self {
        self.gtin = Some(gtin.into());
        self
    }

    /// Set the primary detail for a field in a locale, replacing any previous value.
    pub fn with_primary_field_detail(
        mut self,
        field: ItemField,
        content: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        self.field_details
            .insert((field, locale.into()), content.into());
        self
    }

    /// Primary detail of a field in a locale.
    pub fn primary_field_detail(&self, field: ItemField, locale: &str) -> Option<&str> {
        self.field_details
            .get(&(field, locale.to_string()))
            .map(String::as_str)
    }

    /// All primary details as (field, locale, content).
    pub fn field_details(&self) -> impl Iterator<Item = (ItemField, &str, &str)> {
        self.field_details
            .iter()
            .map(|((field, locale), content)| (*field, locale.as_str(), content.as_str()))
    }
}
