use entity::sea_orm_active_enums::{Authority, ContactMethod, ItemField};
use mbm::server::{
    data::{item::ItemRepository, role::RoleRepository, user::UserRepository},
    model::role::RoleKind,
    seed::DatabaseLoader,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect every role to be seeded with its authorities
#[tokio::test]
async fn seeds_roles_with_authorities() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    DatabaseLoader::new(&test.db).initialise().await.unwrap();

    let role_repo = RoleRepository::new(&test.db);
    for kind in RoleKind::ALL {
        let role = role_repo.get_by_name(&kind.name()).await?.unwrap();
        let authorities = role_repo.get_authorities(role.id).await?;

        assert_eq!(role.description, kind.description());
        assert_eq!(authorities.len(), kind.authorities().len());
        assert!(authorities.contains(&kind.marker()));
    }

    Ok(())
}

/// Expect demo users with their roles, contact details and customers
#[tokio::test]
async fn seeds_users_linked_to_roles() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    DatabaseLoader::new(&test.db).initialise().await.unwrap();

    let role_repo = RoleRepository::new(&test.db);
    let user_repo = UserRepository::new(&test.db);
    let admin_role = role_repo.get_by_name("ROLE_ADMIN").await?.unwrap();
    let customer_role = role_repo.get_by_name("ROLE_CUSTOMER").await?.unwrap();

    let (trent, trent_customer) = user_repo.get_with_customer("trent").await?.unwrap();
    assert_eq!(trent.role_id, admin_role.id);
    assert_eq!(trent.api_key, "trent123");
    assert!(trent_customer.is_none());
    let trent_contact_methods = user_repo.get_contact_methods(trent.id).await?;
    assert!(trent_contact_methods.iter().any(|contact| {
        contact.contact_method == ContactMethod::Email && contact.detail == "admin@example.org"
    }));

    for username in ["alice", "bob"] {
        let (user, customer) = user_repo.get_with_customer(username).await?.unwrap();
        assert_eq!(user.role_id, customer_role.id);
        let customer = customer.unwrap();
        assert_eq!(customer.open_id, None);
        assert_eq!(customer.email_address, None);
    }

    let (store, store_customer) = user_repo.get_with_customer("store").await?.unwrap();
    let store_role_authorities = role_repo.get_authorities(store.role_id).await?;
    assert!(store_role_authorities.contains(&Authority::ActForCustomer));
    assert!(store_customer.is_none());

    Ok(())
}

/// Expect five books, each with an English title
#[tokio::test]
async fn seeds_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;

    DatabaseLoader::new(&test.db).initialise().await.unwrap();

    let item_repo = ItemRepository::new(&test.db);
    let items = item_repo.get_all().await?;
    assert_eq!(items.len(), 5);

    let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    let details = item_repo.get_field_details(&item_ids, "en").await?;
    for item in &items {
        assert!(details
            .iter()
            .any(|detail| detail.item_id == item.id && detail.item_field == ItemField::Title));
    }

    let quantum_thief = item_repo.get_by_sku("0575088893").await?.unwrap();
    assert_eq!(quantum_thief.gtin.as_deref(), Some("978-0575088894"));

    Ok(())
}

/// Expect a second run to update records in place instead of duplicating them
#[tokio::test]
async fn rerun_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_merchant_tables().build().await?;
    let loader = DatabaseLoader::new(&test.db);

    loader.initialise().await.unwrap();
    let alice_before = UserRepository::new(&test.db)
        .get_by_username("alice")
        .await?
        .unwrap();
    loader.initialise().await.unwrap();
    let alice_after = UserRepository::new(&test.db)
        .get_by_username("alice")
        .await?
        .unwrap();

    assert_eq!(entity::prelude::MbmRole::find().count(&test.db).await?, 3);
    assert_eq!(entity::prelude::MbmUser::find().count(&test.db).await?, 4);
    assert_eq!(entity::prelude::MbmCustomer::find().count(&test.db).await?, 2);
    assert_eq!(entity::prelude::MbmItem::find().count(&test.db).await?, 5);
    assert_eq!(
        entity::prelude::MbmUserContactMethod::find()
            .count(&test.db)
            .await?,
        12
    );
    assert_eq!(alice_before.id, alice_after.id);
    assert_eq!(alice_before.customer_id, alice_after.customer_id);

    Ok(())
}

/// Expect Error when the required tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = DatabaseLoader::new(&test.db).initialise().await;

    assert!(result.is_err());

    Ok(())
}
