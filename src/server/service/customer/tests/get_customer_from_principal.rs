use sea_orm::{EntityTrait, PaginatorTrait};

use crate::server::{
    model::auth::{OpenIdAssertion, Principal},
    service::customer::CustomerService,
};

use super::*;

fn open_id_principal(identity_url: &str, email: Option<&str>) -> Principal {
    let mut assertion = OpenIdAssertion::new(identity_url);
    if let Some(email) = email {
        assertion = assertion.with_attribute("email", vec![email.to_string()]);
    }

    Principal::OpenId(assertion)
}

/// Expect the email from the assertion to be stored when the customer has none
#[tokio::test]
async fn fills_missing_email_from_assertion() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_merchant_tables()
        .with_mock_customer(Some("https://id.example.org/alice"), None)
        .build()
        .await?;

    let customer_service = CustomerService::new(&test.db);
    let principal = open_id_principal("https://id.example.org/alice", Some("alice@example.org"));
    let result = customer_service.get_customer_from_principal(&principal).await;

    assert!(matches!(result, Ok(Some(_))));
    let customer = result.unwrap().unwrap();
    assert_eq!(customer.email_address.as_deref(), Some("alice@example.org"));
    let stored = entity::prelude::MbmCustomer::find_by_id(customer.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.email_address.as_deref(), Some("alice@example.org"));

    Ok(())
}

/// Expect an existing email to be kept even if the assertion supplies another
#[tokio::test]
async fn keeps_existing_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_merchant_tables()
        .with_mock_customer(Some("https://id.example.org/alice"), Some("alice@example.org"))
        .build()
        .await?;

    let customer_service = CustomerService::new(&test.db);
    let principal = open_id_principal("https://id.example.org/alice", Some("other@example.org"));
    let result = customer_service.get_customer_from_principal(&principal).await;

    assert!(matches!(result, Ok(Some(_))));
    let customer = result.unwrap().unwrap();
    assert_eq!(customer.email_address.as_deref(), Some("alice@example.org"));

    Ok(())
}

/// Expect a customer to be created for an identity that was never recorded
#[tokio::test]
async fn creates_customer_for_unknown_identity() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    let customer_service = CustomerService::new(&test.db);
    let principal = open_id_principal("https://id.example.org/bob", Some("bob@example.org"));
    let result = customer_service.get_customer_from_principal(&principal).await;

    assert!(matches!(result, Ok(Some(_))));
    let customer = result.unwrap().unwrap();
    assert_eq!(customer.open_id.as_deref(), Some("https://id.example.org/bob"));
    assert_eq!(customer.email_address.as_deref(), Some("bob@example.org"));
    let customer_count = entity::prelude::MbmCustomer::find().count(&test.db).await?;
    assert_eq!(customer_count, 1);

    Ok(())
}

/// Expect the email to stay unset when the assertion carries no email attribute
#[tokio::test]
async fn leaves_email_unset_without_attribute() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_merchant_tables()
        .with_mock_customer(Some("https://id.example.org/alice"), None)
        .build()
        .await?;

    let customer_service = CustomerService::new(&test.db);
    let principal = open_id_principal("https://id.example.org/alice", None);
    let result = customer_service.get_customer_from_principal(&principal).await;

    assert!(matches!(result, Ok(Some(_))));
    let customer = result.unwrap().unwrap();
    assert_eq!(customer.email_address, None);

    Ok(())
}

/// Expect the linked customer for a username principal
#[tokio::test]
async fn finds_customer_linked_to_username() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let (_, _, customer_model) = test
        .user()
        .insert_user_with_customer("alice", None)
        .await?;

    let customer_service = CustomerService::new(&test.db);
    let principal = Principal::Username("alice".to_string());
    let result = customer_service.get_customer_from_principal(&principal).await;

    assert!(matches!(result, Ok(Some(_))));
    assert_eq!(result.unwrap().unwrap().id, customer_model.id);

    Ok(())
}

/// Expect None for a username principal without customer or without user
#[tokio::test]
async fn returns_none_for_username_without_customer() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_merchant_tables().build().await?;
    let role_model = test.role().insert_role("ROLE_ADMIN").await?;
    test.user().insert_user("trent", role_model.id, None).await?;

    let customer_service = CustomerService::new(&test.db);
    let admin = customer_service
        .get_customer_from_principal(&Principal::Username("trent".to_string()))
        .await;
    let unknown = customer_service
        .get_customer_from_principal(&Principal::Username("mallory".to_string()))
        .await;

    assert!(matches!(admin, Ok(None)));
    assert!(matches!(unknown, Ok(None)));

    Ok(())
}
