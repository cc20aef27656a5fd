//! Application configuration read from the environment.

use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration.
pub struct Config {
    /// Connection URL of the PostgreSQL database
    pub database_url: String,
    /// Connection URL of the Valkey instance backing sessions
    pub valkey_url: String,
    /// Socket address the HTTP server listens on
    pub bind_address: String,
    /// Populate the demo roles, users and catalog at startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup, such as a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            None => false,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "SEED_DEMO_DATA".to_string(),
                    reason: format!("expected true or false, got {:?}", value),
                })?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_demo_data,
        })
    }
}
