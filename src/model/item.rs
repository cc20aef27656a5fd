use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A catalog item with the primary field details of a single locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ItemDto {
    pub sku: String,
    pub gtin: Option<String>,
    pub locale: String,
    /// Field name (e.g. `TITLE`) to content
    pub fields: BTreeMap<String, String>,
}
