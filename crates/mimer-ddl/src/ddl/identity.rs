//! Identity column emulation.
//!
//! The target engine has no auto-increment column modifier. An identity
//! column instead gets a backing sequence named `<table>_<column>_autoinc_seq`
//! and the default expression `NEXT VALUE FOR <sequence>`. The planner derives
//! the sequence name, the statements that create and drop it, and the
//! column → sequence binding used by the column renderer.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::core::schema::{Column, Table};
use crate::core::traits::Dialect;
use crate::error::{DdlError, Result};

/// Sequence plan for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityPlan {
    /// Statements to run before CREATE TABLE.
    pub sequence_statements: Vec<String>,

    /// Statements to run after DROP TABLE.
    pub drop_statements: Vec<String>,

    /// Identity column name → backing sequence name.
    pub column_defaults: BTreeMap<String, String>,
}

impl IdentityPlan {
    /// Sequence backing a column, if it is an identity column.
    pub fn sequence_for(&self, column: &str) -> Option<&str> {
        self.column_defaults.get(column).map(String::as_str)
    }
}

/// Plans backing sequences for identity columns.
pub struct IdentityPlanner<'a, D: Dialect + ?Sized> {
    dialect: &'a D,
}

impl<'a, D: Dialect + ?Sized> IdentityPlanner<'a, D> {
    pub fn new(dialect: &'a D) -> Self {
        Self { dialect }
    }

    /// Build the sequence plan for a table.
    ///
    /// # Errors
    ///
    /// - `MultipleIdentityColumns` if more than one column is marked identity
    /// - `TypeSpecification` if an identity column is not an integer column
    pub fn plan(&self, table: &Table) -> Result<IdentityPlan> {
        let mut plan = IdentityPlan::default();

        let column = match self.identity_column(table)? {
            Some(col) => col,
            None => return Ok(plan),
        };

        if !column.data_type.is_integer() {
            return Err(DdlError::type_spec(format!(
                "identity column {}.{} must be an integer column, got {}",
                table.name,
                column.name,
                column.data_type.kind_name()
            )));
        }

        let sequence = self.dialect.sequence_name(&table.name, &column.name);
        if self.dialect.config().create_sequences {
            plan.sequence_statements
                .push(self.dialect.create_sequence_sql(&sequence)?);
            plan.drop_statements
                .push(self.dialect.drop_sequence_sql(&sequence)?);
        } else {
            // Still validates the derived name.
            self.dialect.quote_sequence(&sequence)?;
        }

        debug!(
            "Identity column {}.{} uses sequence {}",
            table.name, column.name, sequence
        );
        plan.column_defaults.insert(column.name.clone(), sequence);
        Ok(plan)
    }

    /// The single identity column of a table, explicit or inferred.
    fn identity_column<'t>(&self, table: &'t Table) -> Result<Option<&'t Column>> {
        let explicit = table.identity_columns();
        match explicit.len() {
            0 => {}
            1 => return Ok(Some(explicit[0])),
            _ => {
                return Err(DdlError::MultipleIdentityColumns {
                    table: table.name.clone(),
                    columns: explicit.iter().map(|c| c.name.clone()).collect(),
                })
            }
        }

        if !self.dialect.config().infer_identity {
            return Ok(None);
        }

        let pk = table.pk_columns()?;
        match pk.as_slice() {
            [only] if only.data_type.is_integer() => {
                debug!(
                    "Treating primary key {}.{} as identity column",
                    table.name, only.name
                );
                Ok(Some(*only))
            }
            _ => Ok(None),
        }
    }
}
