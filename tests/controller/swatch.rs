//! Tests for the payment swatch endpoint.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use super::*;

/// Expect the swatch text with a plain text content type
#[tokio::test]
async fn returns_plain_text_swatch() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = mbm::server::router::routes().with_state(test.to_app_state::<AppState>());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swatch?amount=12.34&address=1abcdefgh&label=Hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_string(response).await, "1abcdefgh 12.34 Hello");

    Ok(())
}

/// Expect 400 Bad Request when a query parameter is missing
#[tokio::test]
async fn rejects_missing_parameter() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = mbm::server::router::routes().with_state(test.to_app_state::<AppState>());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swatch?amount=12.34&address=1abcdefgh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the amount to be passed through without reformatting
#[tokio::test]
async fn keeps_amount_as_given() -> Result<(), TestError> {
    let response = mbm::server::controller::swatch::create_swatch(axum::extract::Query(
        mbm::server::controller::swatch::SwatchParams {
            amount: "0.10000000".to_string(),
            address: "1abcdefgh".to_string(),
            label: "Coffee".to_string(),
        },
    ))
    .await;

    assert_eq!(response, "1abcdefgh 0.10000000 Coffee");

    Ok(())
}
