//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds a
//! SQLite database and a session backed by an in-memory store. The database is in-memory on
//! a single connection unless a shared database was requested, in which case it is a
//! temporary file served by a pool of connections.

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_merchant_tables().build().await?;
///
/// let role = test.role().insert_role("ROLE_CUSTOMER").await?;
/// let customer = test.customer().insert_customer(Some("https://id.example.org/alice"), None).await?;
/// ```
pub struct TestContext {
    /// Database connection to the test SQLite database
    pub db: DatabaseConnection,
    /// Session for tests exercising the authenticated principal
    pub session: Session,
    database_file: Option<PathBuf>,
}

/// Connections in the pool of a shared test database
const SHARED_DATABASE_CONNECTIONS: u32 = 4;

static SHARED_DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to `AppState` without creating a circular dependency
    /// between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context with an empty database.
    ///
    /// # Arguments
    /// - `shared` - Use a temporary file database with several pooled connections so
    ///   transactions can run concurrently
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new(shared: bool) -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        if !shared {
            let db = Database::connect("sqlite::memory:").await?;

            return Ok(TestContext {
                db,
                session,
                database_file: None,
            });
        }

        let database_file = std::env::temp_dir().join(format!(
            "mbm-test-{}-{}.db",
            std::process::id(),
            SHARED_DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        let mut options =
            ConnectOptions::new(format!("sqlite://{}?mode=rwc", database_file.display()));
        options
            .max_connections(SHARED_DATABASE_CONNECTIONS)
            .sqlx_logging(false);
        let db = Database::connect(options).await?;

        Ok(TestContext {
            db,
            session,
            database_file: Some(database_file),
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(database_file) = self.database_file.take() {
            for suffix in ["", "-journal", "-wal", "-shm"] {
                let mut path = database_file.clone().into_os_string();
                path.push(suffix);
                let _ = std::fs::remove_file(path);
            }
        }
    }
}
