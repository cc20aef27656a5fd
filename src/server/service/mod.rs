//! Service layer for business logic.
//!
//! Services coordinate repositories and own transaction boundaries: authentication
//! bookkeeping, customer resolution and catalog reads.

pub mod auth;
pub mod catalog;
pub mod customer;
