//! Session-backed values.

pub mod principal;
