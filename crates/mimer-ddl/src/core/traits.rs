//! Core traits for dialect-specific DDL generation.
//!
//! This module defines the seams between the compiler and its collaborators:
//!
//! - [`Dialect`]: Type and identifier rendering rules for one target engine
//! - [`SchemaSource`]: Read-only supplier of table metadata
//! - [`SqlExecutor`]: Raw SQL execution channel for compiled statements
//!
//! # Design Patterns
//!
//! - **Strategy**: `Dialect` implementations provide interchangeable rendering rules
//! - **Template Method**: Default `Dialect` methods build sequence DDL on top of
//!   the required rendering primitives

use async_trait::async_trait;

use crate::config::DialectConfig;
use crate::error::Result;

use super::identifier::{quote_generated, quote_if_needed};
use super::schema::Table;
use super::types::{AbstractType, IntervalType};

/// DDL rendering rules for a target engine.
///
/// Implementations hold an immutable [`DialectConfig`]; two dialect values
/// with different configurations can be used side by side in one process.
pub trait Dialect: Send + Sync {
    /// Get the dialect identifier (e.g., "mimer").
    fn name(&self) -> &str;

    /// Configuration this dialect was built with.
    fn config(&self) -> &DialectConfig;

    /// Render a column type.
    fn render_type(&self, ty: &AbstractType) -> Result<String>;

    /// Render an interval type, including the `INTERVAL` keyword.
    fn render_interval(&self, interval: &IntervalType) -> Result<String>;

    /// Validate an identifier and quote it when needed.
    fn quote_ident(&self, name: &str) -> Result<String> {
        quote_if_needed(name, self.config().max_identifier_length)
    }

    /// Name of the sequence backing an identity column (unquoted).
    ///
    /// Embedding both the table and the column name keeps the name unique
    /// across all tables of a schema.
    fn sequence_name(&self, table: &str, column: &str) -> String {
        format!("{}_{}_{}", table, column, self.config().sequence_suffix)
    }

    /// Validate a generated sequence name and quote it when needed.
    ///
    /// Every reference to a sequence goes through here, so the default
    /// expression and the CREATE/DROP statements always agree.
    fn quote_sequence(&self, sequence: &str) -> Result<String> {
        quote_generated(sequence, self.config().max_identifier_length)
    }

    /// Default expression that draws the next value from a sequence.
    fn identity_default(&self, sequence: &str) -> Result<String> {
        Ok(format!("NEXT VALUE FOR {}", self.quote_sequence(sequence)?))
    }

    /// Statement creating a sequence.
    fn create_sequence_sql(&self, sequence: &str) -> Result<String> {
        Ok(format!("CREATE SEQUENCE {}", self.quote_sequence(sequence)?))
    }

    /// Statement dropping a sequence.
    fn drop_sequence_sql(&self, sequence: &str) -> Result<String> {
        Ok(format!("DROP SEQUENCE {}", self.quote_sequence(sequence)?))
    }
}

/// Read-only supplier of table metadata.
///
/// The compiler only ever reads what this returns; connections, sessions and
/// query building stay with the implementation.
pub trait SchemaSource {
    /// All tables, in the order they should be created.
    fn tables(&self) -> Result<Vec<Table>>;

    /// Look up a single table by name.
    fn table(&self, name: &str) -> Result<Option<Table>> {
        Ok(self.tables()?.into_iter().find(|t| t.name == name))
    }
}

impl SchemaSource for Vec<Table> {
    fn tables(&self) -> Result<Vec<Table>> {
        Ok(self.clone())
    }
}

/// Raw SQL execution channel.
///
/// Receives fully compiled statements. Retrying and transaction handling are
/// up to the implementation; the compiler never retries.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    /// Execute a single DDL statement.
    async fn execute(&self, sql: &str) -> Result<()>;

    /// Get the database type identifier (e.g., "mimer").
    fn db_type(&self) -> &str;
}
