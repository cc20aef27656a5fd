//! Test fixture modules for database record creation.
//!
//! - `role` - roles and their authorities
//! - `customer` - customers with optional OpenID identity
//! - `user` - users linked to a role and optionally a customer
//! - `item` - catalog items with localized field details

pub mod customer;
pub mod item;
pub mod role;
pub mod user;
