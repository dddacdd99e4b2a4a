//! Table DDL compiler.

use serde::Serialize;
use tracing::debug;

use crate::core::schema::Table;
use crate::core::traits::Dialect;
use crate::dialect::TokenList;
use crate::drivers::MimerDialect;
use crate::error::{DdlError, Result};

use super::column::render_column;
use super::identity::{IdentityPlan, IdentityPlanner};

/// Every statement needed to create and drop one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledTable {
    pub table_name: String,
    pub create_sequences: Vec<String>,
    pub create_table: String,
    pub drop_table: String,
    pub drop_sequences: Vec<String>,
}

impl CompiledTable {
    /// Sequences first, then the table.
    pub fn create_statements(&self) -> Vec<&str> {
        self.create_sequences
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.create_table.as_str()))
            .collect()
    }

    /// The table first, then its sequences.
    pub fn drop_statements(&self) -> Vec<&str> {
        std::iter::once(self.drop_table.as_str())
            .chain(self.drop_sequences.iter().map(String::as_str))
            .collect()
    }
}

/// Compiles table metadata into DDL for one dialect.
///
/// Holds no state besides the dialect, so one compiler can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct DdlCompiler<D: Dialect = MimerDialect> {
    dialect: D,
}

impl<D: Dialect> DdlCompiler<D> {
    pub fn new(dialect: D) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Compile `CREATE TABLE <name> ( <col>, ..., PRIMARY KEY (<pk>, ...) )`.
    ///
    /// Columns and primary key columns keep declaration order. Sequence
    /// statements for identity columns are not part of the result; use
    /// [`compile`](Self::compile) to get them.
    ///
    /// # Errors
    ///
    /// Returns an error, and no partial output, if the table has no columns,
    /// an identifier is invalid, a type is malformed or unsupported, or more
    /// than one identity column is declared.
    pub fn compile_create_table(&self, table: &Table) -> Result<String> {
        let plan = IdentityPlanner::new(&self.dialect).plan(table)?;
        self.create_table_sql(table, &plan)
    }

    /// Compile `DROP TABLE <name>`.
    pub fn compile_drop_table(&self, table: &Table) -> Result<String> {
        let sql = format!("DROP TABLE {}", self.table_name(table)?);
        debug!("Compiled: {}", sql);
        Ok(sql)
    }

    /// Compile all statements for a table.
    pub fn compile(&self, table: &Table) -> Result<CompiledTable> {
        let plan = IdentityPlanner::new(&self.dialect).plan(table)?;
        let create_table = self.create_table_sql(table, &plan)?;
        let drop_table = self.compile_drop_table(table)?;

        Ok(CompiledTable {
            table_name: table.name.clone(),
            create_sequences: plan.sequence_statements,
            create_table,
            drop_table,
            drop_sequences: plan.drop_statements,
        })
    }

    fn create_table_sql(&self, table: &Table, plan: &IdentityPlan) -> Result<String> {
        let name = self.table_name(table)?;
        if table.columns.is_empty() {
            return Err(DdlError::type_spec(format!(
                "table {} has no columns",
                table.name
            )));
        }

        let mut elements = Vec::with_capacity(table.columns.len() + 1);
        for col in &table.columns {
            elements.push(render_column(
                &self.dialect,
                col,
                plan.sequence_for(&col.name),
            )?);
        }

        let pk = table.pk_columns()?;
        if !pk.is_empty() {
            let names = pk
                .iter()
                .map(|c| self.dialect.quote_ident(&c.name))
                .collect::<Result<Vec<_>>>()?;
            let mut constraint = TokenList::new();
            constraint.push("PRIMARY KEY").push_group(&names);
            elements.push(constraint.finish());
        }

        let mut stmt = TokenList::new();
        stmt.push("CREATE TABLE")
            .push(name)
            .push_elements(&elements, self.dialect.config().layout);
        let sql = stmt.finish();

        debug!("Compiled: {}", sql);
        Ok(sql)
    }

    fn table_name(&self, table: &Table) -> Result<String> {
        self.dialect.quote_ident(&table.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DdlLayout, DialectConfig};
    use crate::core::schema::Column;
    use crate::core::types::{AbstractType, IntervalType, IntervalUnit};

    fn compiler() -> DdlCompiler {
        DdlCompiler::default()
    }

    #[test]
    fn test_simple_table() {
        let table = Table::new(
            "t",
            vec![
                Column::new("a", AbstractType::integer()),
                Column::new("b", AbstractType::Date),
            ],
        );
        assert_eq!(
            compiler().compile_create_table(&table).unwrap(),
            "CREATE TABLE t ( a INTEGER, b DATE )"
        );
    }

    #[test]
    fn test_identity_default() {
        let table = Table::new(
            "T",
            vec![Column::new("id", AbstractType::integer())
                .primary_key()
                .identity()],
        );
        let sql = compiler().compile_create_table(&table).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE \"T\" ( id INTEGER DEFAULT NEXT VALUE FOR T_id_autoinc_seq, PRIMARY KEY (id) )"
        );
        assert!(!sql.to_uppercase().contains("AUTOINCREMENT"));
        assert!(!sql.contains("IDENTITY"));
    }

    #[test]
    fn test_composite_pk_declaration_order() {
        let table = Table::new(
            "link",
            vec![
                Column::new("b", AbstractType::integer()).primary_key(),
                Column::new("note", AbstractType::Text),
                Column::new("a", AbstractType::integer()).primary_key(),
            ],
        );
        assert_eq!(
            compiler().compile_create_table(&table).unwrap(),
            "CREATE TABLE link ( b INTEGER, note CLOB, a INTEGER, PRIMARY KEY (b, a) )"
        );
    }

    #[test]
    fn test_explicit_pk_list() {
        let mut table = Table::new(
            "link",
            vec![
                Column::new("x", AbstractType::integer()),
                Column::new("y", AbstractType::integer()),
            ],
        );
        table.primary_key = vec!["y".to_string()];
        assert_eq!(
            compiler().compile_create_table(&table).unwrap(),
            "CREATE TABLE link ( x INTEGER, y INTEGER, PRIMARY KEY (y) )"
        );
    }

    #[test]
    fn test_deterministic() {
        let table = Table::new(
            "iv",
            vec![Column::new(
                "span",
                AbstractType::interval(IntervalType::day_to_second(Some(5), Some(2))),
            )],
        );
        let c = compiler();
        let first = c.compile_create_table(&table).unwrap();
        for _ in 0..10 {
            assert_eq!(c.compile_create_table(&table).unwrap(), first);
        }
        assert_eq!(
            first,
            "CREATE TABLE iv ( span INTERVAL DAY(5) TO SECOND(2) )"
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = Table::new("empty", vec![]);
        assert!(matches!(
            compiler().compile_create_table(&table),
            Err(DdlError::TypeSpecification(_))
        ));
    }

    #[test]
    fn test_invalid_table_name_rejected() {
        let table = Table::new("", vec![Column::new("a", AbstractType::integer())]);
        assert!(matches!(
            compiler().compile_create_table(&table),
            Err(DdlError::Identifier(_))
        ));
        assert!(compiler().compile_drop_table(&table).is_err());
    }

    #[test]
    fn test_failure_yields_no_output() {
        let table = Table::new(
            "t",
            vec![
                Column::new("ok", AbstractType::integer()),
                Column::new(
                    "bad",
                    AbstractType::interval(IntervalType::range(
                        IntervalUnit::Second,
                        None,
                        IntervalUnit::Year,
                        None,
                    )),
                ),
            ],
        );
        assert!(matches!(
            compiler().compile(&table),
            Err(DdlError::TypeSpecification(_))
        ));
    }

    #[test]
    fn test_compile_bundle() {
        let table = Table::new(
            "orders",
            vec![
                Column::new("id", AbstractType::big_integer())
                    .primary_key()
                    .identity(),
                Column::new("total", AbstractType::decimal(10, Some(2))).not_null(),
            ],
        );
        let compiled = compiler().compile(&table).unwrap();

        assert_eq!(compiled.table_name, "orders");
        assert_eq!(
            compiled.create_statements(),
            vec![
                "CREATE SEQUENCE orders_id_autoinc_seq",
                "CREATE TABLE orders ( id BIGINT DEFAULT NEXT VALUE FOR orders_id_autoinc_seq, total DECIMAL(10,2) NOT NULL, PRIMARY KEY (id) )",
            ]
        );
        assert_eq!(
            compiled.drop_statements(),
            vec!["DROP TABLE orders", "DROP SEQUENCE orders_id_autoinc_seq"]
        );
    }

    #[test]
    fn test_pretty_layout() {
        let dialect = MimerDialect::with_config(DialectConfig {
            layout: DdlLayout::Pretty,
            ..Default::default()
        })
        .unwrap();
        let table = Table::new(
            "t",
            vec![
                Column::new("a", AbstractType::integer()).primary_key(),
                Column::new("b", AbstractType::Date),
            ],
        );
        let pretty = DdlCompiler::new(dialect).compile_create_table(&table).unwrap();
        assert_eq!(
            pretty,
            "CREATE TABLE t (\n\ta INTEGER,\n\tb DATE,\n\tPRIMARY KEY (a)\n)"
        );

        let compact = compiler().compile_create_table(&table).unwrap();
        let normalize = |s: &str| s.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(
            normalize(&pretty).replace("( ", "(").replace(" )", ")"),
            normalize(&compact).replace("( ", "(").replace(" )", ")")
        );
    }

    #[test]
    fn test_reserved_word_column_quoted() {
        let table = Table::new(
            "t",
            vec![Column::new("order", AbstractType::integer())],
        );
        assert_eq!(
            compiler().compile_create_table(&table).unwrap(),
            "CREATE TABLE t ( \"order\" INTEGER )"
        );
    }
}
