//! Server application models and type definitions.
//!
//! Application state, database model type aliases, the authenticated principal and its
//! session storage, and the transient "new" records handed to repositories for persistence.

pub mod app;
pub mod auth;
pub mod db;
pub mod item;
pub mod role;
pub mod session;
pub mod user;
