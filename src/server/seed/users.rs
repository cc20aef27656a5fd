//! Demo users: an administrator, a store client and two customers.

use entity::sea_orm_active_enums::ContactMethod;

use crate::server::{
    model::{
        db::RoleModel,
        user::{Credentials, NewCustomer, NewUser},
    },
    seed::SeededRoles,
};

/// All demo users in seeding order.
pub fn demo_users(roles: &SeededRoles) -> Vec<NewUser> {
    vec![
        trent_administrator(&roles.admin),
        store_client(&roles.client),
        alice_customer(&roles.customer),
        bob_customer(&roles.customer),
    ]
}

/// Administrator without a customer.
pub fn trent_administrator(admin_role: &RoleModel) -> NewUser {
    demo_user("trent", "Trent", "Admin", "admin@example.org", admin_role)
}

/// Store client acting on behalf of customers.
pub fn store_client(client_role: &RoleModel) -> NewUser {
    demo_user("store", "Store", "Client", "store@example.org", client_role)
}

/// Customer with a fresh customer record.
pub fn alice_customer(customer_role: &RoleModel) -> NewUser {
    demo_user("alice", "Alice", "Customer", "alice@example.org", customer_role)
        .with_customer(NewCustomer::default())
}

/// Customer with a fresh customer record.
pub fn bob_customer(customer_role: &RoleModel) -> NewUser {
    demo_user("bob", "Bob", "Customer", "bob@example.org", customer_role)
        .with_customer(NewCustomer::default())
}

// Demo credentials follow a fixed pattern: password `<name>1`, API key `<name>123`,
// secret key `<name>456`.
fn demo_user(
    username: &str,
    names: &str,
    last_name: &str,
    email: &str,
    role: &RoleModel,
) -> NewUser {
    let credentials = Credentials {
        username: username.to_string(),
        password: format!("{}1", username),
        api_key: format!("{}123", username),
        secret_key: format!("{}456", username),
    };

    NewUser::new(credentials, role)
        .with_contact_method(ContactMethod::Names, names)
        .with_contact_method(ContactMethod::LastName, last_name)
        .with_contact_method(ContactMethod::Email, email)
}
