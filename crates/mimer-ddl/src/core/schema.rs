//! Table and column metadata.
//!
//! These types are the read-only schema model the compiler consumes. They are
//! built per compilation request (by hand, from a schema file, or by an ORM
//! reflection layer) and never mutated by the compiler.

use serde::{Deserialize, Serialize};

use super::types::AbstractType;
use crate::error::{DdlError, Result};

fn default_true() -> bool {
    true
}

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,

    /// Abstract column type.
    #[serde(rename = "type")]
    pub data_type: AbstractType,

    /// Whether the column allows NULL. Only an explicit `false` produces NOT NULL.
    #[serde(default = "default_true")]
    pub nullable: bool,

    /// Whether the column is part of the primary key.
    #[serde(default, rename = "primary_key")]
    pub is_primary_key: bool,

    /// Whether the column is fed by a backing sequence.
    #[serde(default, rename = "identity")]
    pub is_identity: bool,
}

impl Column {
    /// Create a nullable, non-key column.
    pub fn new(name: impl Into<String>, data_type: AbstractType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            is_primary_key: false,
            is_identity: false,
        }
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Mark the column as an identity column.
    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    /// Mark the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Table metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: String,

    /// Column definitions in declaration order.
    pub columns: Vec<Column>,

    /// Primary key column names, in addition to columns flagged `primary_key`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<String>,
}

impl Table {
    /// Create a table whose primary key comes from the column flags.
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            primary_key: Vec::new(),
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check if the table has a primary key.
    pub fn has_pk(&self) -> bool {
        !self.primary_key.is_empty() || self.columns.iter().any(|c| c.is_primary_key)
    }

    /// Primary key columns in declaration order.
    ///
    /// A column belongs to the key if it is flagged or listed in
    /// `primary_key`. Listed names that match no column are rejected.
    pub fn pk_columns(&self) -> Result<Vec<&Column>> {
        if let Some(missing) = self
            .primary_key
            .iter()
            .find(|name| self.column(name).is_none())
        {
            return Err(DdlError::type_spec(format!(
                "primary key of table {} references unknown column {}",
                self.name, missing
            )));
        }

        Ok(self
            .columns
            .iter()
            .filter(|c| self.is_pk_column(c))
            .collect())
    }

    /// Whether a column is part of the primary key by flag or by listing.
    pub fn is_pk_column(&self, col: &Column) -> bool {
        col.is_primary_key || self.primary_key.contains(&col.name)
    }

    /// Columns explicitly marked as identity columns.
    pub fn identity_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_identity).collect()
    }
}
