//! Merchant backend: catalog items, customers, users and roles.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
