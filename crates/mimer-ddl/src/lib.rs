//! # mimer-ddl
//!
//! Compile engine-neutral table schemas into Mimer SQL DDL.
//!
//! This library turns table metadata into `CREATE TABLE` statements with
//! support for:
//!
//! - **Type mapping** from abstract column types to Mimer SQL types
//! - **Interval types** with single fields and field ranges
//! - **Identity columns** emulated with sequences and
//!   `DEFAULT NEXT VALUE FOR <sequence>`
//! - **Deployment** of compiled statements through an async execution channel
//! - **YAML schemas and dialect configuration**
//!
//! ## Example
//!
//! ```rust
//! use mimer_ddl::{AbstractType, Column, DdlCompiler, Table};
//!
//! let table = Table::new(
//!     "types_test",
//!     vec![
//!         Column::new("id", AbstractType::integer()).primary_key().identity(),
//!         Column::new("val_str", AbstractType::varchar(Some(40))),
//!     ],
//! );
//!
//! let compiler: DdlCompiler = DdlCompiler::default();
//! let sql = compiler.compile_create_table(&table).unwrap();
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE types_test ( id INTEGER DEFAULT NEXT VALUE FOR \
//!      types_test_id_autoinc_seq, val_str VARCHAR(40), PRIMARY KEY (id) )"
//! );
//! ```

pub mod config;
pub mod core;
pub mod ddl;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod target;

// Re-exports for convenient access
pub use config::{DdlLayout, DialectConfig};
pub use crate::core::{
    AbstractType, Column, Dialect, IntegerWidth, IntervalType, IntervalUnit, SchemaFile,
    SchemaSource, SqlExecutor, Table,
};
pub use ddl::{CompiledTable, DdlCache, DdlCompiler};
pub use drivers::MimerDialect;
pub use error::{DdlError, Result};
pub use target::SchemaDeployer;
