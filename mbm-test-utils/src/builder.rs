//! Declarative test builder.
//!
//! The builder queues tables and fixtures, all of which are created during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_merchant_tables: bool,
    shared_database: bool,

    roles: Vec<String>,
    customers: Vec<(Option<String>, Option<String>)>, // (open_id, email_address)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_merchant_tables: false,
            shared_database: false,
            roles: Vec::new(),
            customers: Vec::new(),
        }
    }

    /// Add every merchant table to the test database.
    ///
    /// Creates the role, role authority, customer, user, user contact method, item and
    /// item field detail tables in foreign key order.
    pub fn with_merchant_tables(mut self) -> Self {
        self.include_merchant_tables = true;
        self
    }

    /// Back the context with a temporary file database served by several connections.
    ///
    /// The default in-memory database has a single connection, so transactions started
    /// concurrently run one after another. Use this for tests that need them to overlap.
    pub fn with_shared_database(mut self) -> Self {
        self.shared_database = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; they are created in call order.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use mbm_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), mbm_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(MbmRole)
    ///     .with_table(MbmRoleAuthority)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a role with the provided name and no authorities.
    pub fn with_mock_role(mut self, name: impl Into<String>) -> Self {
        self.roles.push(name.into());
        self
    }

    /// Insert a customer with an optional OpenID identity and email address.
    pub fn with_mock_customer(
        mut self,
        open_id: Option<&str>,
        email_address: Option<&str>,
    ) -> Self {
        self.customers.push((
            open_id.map(str::to_string),
            email_address.map(str::to_string),
        ));
        self
    }

    /// Build the test context, creating tables then inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new(self.shared_database).await?;

        let mut tables = Vec::new();
        if self.include_merchant_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.extend([
                schema.create_table_from_entity(entity::prelude::MbmRole),
                schema.create_table_from_entity(entity::prelude::MbmRoleAuthority),
                schema.create_table_from_entity(entity::prelude::MbmCustomer),
                schema.create_table_from_entity(entity::prelude::MbmUser),
                schema.create_table_from_entity(entity::prelude::MbmUserContactMethod),
                schema.create_table_from_entity(entity::prelude::MbmItem),
                schema.create_table_from_entity(entity::prelude::MbmItemFieldDetail),
            ]);
        }
        tables.extend(self.tables);
        test.with_tables(tables).await?;

        for name in &self.roles {
            test.role().insert_role(name).await?;
        }

        for (open_id, email_address) in &self.customers {
            test.customer()
                .insert_customer(open_id.as_deref(), email_address.as_deref())
                .await?;
        }

        Ok(test)
    }
}
