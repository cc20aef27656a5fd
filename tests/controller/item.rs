//! Tests for the catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::ItemField;
use mbm::{
    model::item::ItemDto,
    server::controller::item::{get_item, list_items, ItemQuery},
};

use super::*;

/// Expect 200 OK with items ordered by SKU in the default locale
#[tokio::test]
async fn lists_items_in_default_locale() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let provence = test.item().insert_item("0140296034", "A Year In Provence").await?;
    test.item()
        .insert_field_detail(provence.id, ItemField::Title, "fr", "Une année en Provence")
        .await?;
    test.item().insert_item("0099410672", "Cryptonomicon").await?;

    let result = list_items(
        State(test.to_app_state::<AppState>()),
        Query(ItemQuery { locale: None }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemDto> = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].sku, "0099410672");
    assert_eq!(items[1].locale, "en");
    assert_eq!(
        items[1].fields.get("TITLE").map(String::as_str),
        Some("A Year In Provence")
    );

    Ok(())
}

/// Expect the requested locale to select the field details
#[tokio::test]
async fn gets_item_in_requested_locale() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let provence = test.item().insert_item("0140296034", "A Year In Provence").await?;
    test.item()
        .insert_field_detail(provence.id, ItemField::Title, "fr", "Une année en Provence")
        .await?;

    let result = get_item(
        State(test.to_app_state::<AppState>()),
        Path("0140296034".to_string()),
        Query(ItemQuery {
            locale: Some("fr".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let item: ItemDto = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(
        item.fields.get("TITLE").map(String::as_str),
        Some("Une année en Provence")
    );

    Ok(())
}

/// Expect 404 Not Found for an unknown SKU
#[tokio::test]
async fn not_found_for_unknown_sku() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    let result = get_item(
        State(test.to_app_state::<AppState>()),
        Path("0000000000".to_string()),
        Query(ItemQuery { locale: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_items(
        State(test.to_app_state::<AppState>()),
        Query(ItemQuery { locale: None }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
