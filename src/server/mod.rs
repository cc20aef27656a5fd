//! Server application core modules.
//!
//! This module contains all server-side functionality: HTTP routing, the data access layer,
//! business services, demo data seeding, configuration and startup.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
