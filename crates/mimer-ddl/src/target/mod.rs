//! Schema deployment through an execution channel.
//!
//! [`SchemaDeployer`] compiles tables and sends the statements to a
//! [`SqlExecutor`] in dependency order:
//!
//! - create: `CREATE SEQUENCE` for identity columns, then `CREATE TABLE`
//! - drop: `DROP TABLE`, then `DROP SEQUENCE`
//!
//! Every table is compiled before anything is executed, so a compile error
//! never leaves a half-deployed schema behind. If `CREATE TABLE` itself fails,
//! the sequences created for that table are dropped again before the error is
//! returned.

use tracing::{debug, info, warn};

use crate::core::schema::Table;
use crate::core::traits::{Dialect, SchemaSource, SqlExecutor};
use crate::ddl::{CompiledTable, DdlCompiler};
use crate::drivers::MimerDialect;
use crate::error::Result;

/// Deploys compiled DDL through an executor.
pub struct SchemaDeployer<E: SqlExecutor, D: Dialect = MimerDialect> {
    executor: E,
    compiler: DdlCompiler<D>,
}

impl<E: SqlExecutor> SchemaDeployer<E> {
    /// Create a deployer using the default Mimer SQL dialect.
    pub fn new(executor: E) -> Self {
        Self::with_compiler(executor, DdlCompiler::default())
    }
}

impl<E: SqlExecutor, D: Dialect> SchemaDeployer<E, D> {
    pub fn with_compiler(executor: E, compiler: DdlCompiler<D>) -> Self {
        Self { executor, compiler }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn compiler(&self) -> &DdlCompiler<D> {
        &self.compiler
    }

    /// Consume the deployer and hand back its executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Create one table and its sequences.
    pub async fn create_table(&self, table: &Table) -> Result<()> {
        let compiled = self.compiler.compile(table)?;
        self.run_create(&compiled).await
    }

    /// Drop one table and its sequences.
    pub async fn drop_table(&self, table: &Table) -> Result<()> {
        let compiled = self.compiler.compile(table)?;
        self.run_drop(&compiled).await
    }

    /// Create every table of a schema in declaration order.
    pub async fn create_all<S: SchemaSource + ?Sized>(&self, source: &S) -> Result<usize> {
        let compiled = self.compile_all(source)?;
        for table in &compiled {
            self.run_create(table).await?;
        }
        info!("Created {} tables", compiled.len());
        Ok(compiled.len())
    }

    /// Drop every table of a schema in reverse declaration order.
    pub async fn drop_all<S: SchemaSource + ?Sized>(&self, source: &S) -> Result<usize> {
        let compiled = self.compile_all(source)?;
        for table in compiled.iter().rev() {
            self.run_drop(table).await?;
        }
        info!("Dropped {} tables", compiled.len());
        Ok(compiled.len())
    }

    fn compile_all<S: SchemaSource + ?Sized>(&self, source: &S) -> Result<Vec<CompiledTable>> {
        source
            .tables()?
            .iter()
            .map(|t| self.compiler.compile(t))
            .collect()
    }

    async fn run_create(&self, compiled: &CompiledTable) -> Result<()> {
        // The table statement comes last, so `done` counts created sequences.
        for (done, sql) in compiled.create_statements().into_iter().enumerate() {
            debug!("Executing on {}: {}", self.executor.db_type(), sql);
            if let Err(e) = self.executor.execute(sql).await {
                self.drop_created_sequences(compiled, done).await;
                return Err(e);
            }
        }
        info!("Created table {}", compiled.table_name);
        Ok(())
    }

    /// Best-effort removal of the first `created` sequences of a table whose
    /// creation failed. Failures are logged; the caller reports the original error.
    async fn drop_created_sequences(&self, compiled: &CompiledTable, created: usize) {
        // create_sequences and drop_sequences are index-aligned
        for sql in compiled.drop_sequences.iter().take(created) {
            debug!("Executing on {}: {}", self.executor.db_type(), sql);
            if let Err(e) = self.executor.execute(sql).await {
                warn!(
                    "Failed to clean up after creating table {}: {}",
                    compiled.table_name, e
                );
            }
        }
    }

    async fn run_drop(&self, compiled: &CompiledTable) -> Result<()> {
        for sql in compiled.drop_statements() {
            debug!("Executing on {}: {}", self.executor.db_type(), sql);
            self.executor.execute(sql).await?;
        }
        info!("Dropped table {}", compiled.table_name);
        Ok(())
    }
}
