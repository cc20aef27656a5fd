//! Test utilities for the merchant backend.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and fixtures are
//! needed, then `build()` produces a [`TestContext`] backed by an in-memory SQLite database
//! and an in-memory session.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
