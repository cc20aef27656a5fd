//! Tests for route registration and the OpenAPI document.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use super::*;

/// Expect the OpenAPI document to list every API path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = mbm::server::router::routes().with_state(test.to_app_state::<AppState>());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let document: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let paths = document["paths"].as_object().unwrap();
    for path in ["/swatch", "/api/customer", "/api/items", "/api/items/{sku}"] {
        assert!(paths.contains_key(path), "missing path {}", path);
    }

    Ok(())
}

/// Expect the item route to resolve the SKU path segment
#[tokio::test]
async fn routes_item_by_sku() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    test.item().insert_item("0575088893", "The Quantum Thief").await?;
    let app = mbm::server::router::routes().with_state(test.to_app_state::<AppState>());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items/0575088893")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("The Quantum Thief"));

    Ok(())
}
