//! Tests for the get_customer endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use mbm::{
    model::customer::CustomerDto,
    server::{
        controller::customer::get_customer,
        model::{
            auth::{OpenIdAssertion, Principal},
            session::principal::SessionPrincipal,
        },
    },
};

use super::*;

/// Expect 200 OK with the customer for an OpenID principal, email filled from the assertion
#[tokio::test]
async fn returns_customer_for_open_id_principal() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_merchant_tables()
        .with_mock_customer(Some("https://id.example.org/alice"), None)
        .build()
        .await?;
    let principal = Principal::OpenId(
        OpenIdAssertion::new("https://id.example.org/alice")
            .with_attribute("email", vec!["alice@example.org".to_string()]),
    );
    SessionPrincipal::insert(&test.session, principal)
        .await
        .unwrap();

    let result = get_customer(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let customer: CustomerDto = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(customer.open_id.as_deref(), Some("https://id.example.org/alice"));
    assert_eq!(customer.email_address.as_deref(), Some("alice@example.org"));

    Ok(())
}

/// Expect 200 OK with the linked customer for a username principal
#[tokio::test]
async fn returns_customer_for_username_principal() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let (_, _, customer_model) = test
        .user()
        .insert_user_with_customer("alice", None)
        .await?;
    SessionPrincipal::insert(&test.session, Principal::Username("alice".to_string()))
        .await
        .unwrap();

    let result = get_customer(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let customer: CustomerDto = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(customer.id, customer_model.id);

    Ok(())
}

/// Expect 404 Not Found when no principal is in session
#[tokio::test]
async fn not_found_without_principal() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    let result = get_customer(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when the user has no customer
#[tokio::test]
async fn not_found_for_user_without_customer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let role_model = test.role().insert_role("ROLE_ADMIN").await?;
    test.user().insert_user("trent", role_model.id, None).await?;
    SessionPrincipal::insert(&test.session, Principal::Username("trent".to_string()))
        .await
        .unwrap();

    let result = get_customer(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionPrincipal::insert(
        &test.session,
        Principal::OpenId(OpenIdAssertion::new("https://id.example.org/alice")),
    )
    .await
    .unwrap();

    let result = get_customer(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
