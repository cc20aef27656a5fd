//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code runs against a
//! plain connection or inside a transaction. Lookups of a single record return `Option`, with
//! `None` meaning the record does not exist.

pub mod customer;
pub mod item;
pub mod role;
pub mod user;
