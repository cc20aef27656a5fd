//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate so fixtures and assertions read the same
//! in both places.

pub type RoleModel = entity::mbm_role::Model;

pub type CustomerModel = entity::mbm_customer::Model;

pub type UserModel = entity::mbm_user::Model;

pub type ItemModel = entity::mbm_item::Model;
