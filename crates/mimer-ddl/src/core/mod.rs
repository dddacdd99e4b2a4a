//! Core abstractions for dialect-independent schema compilation.
//!
//! - [`types`]: Abstract column types and interval field specifications
//! - [`schema`]: Table and column metadata
//! - [`schema_file`]: YAML schema documents
//! - [`identifier`]: Identifier validation and quoting
//! - [`traits`]: Dialect, schema source and execution channel traits

pub mod identifier;
pub mod schema;
pub mod schema_file;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use schema::{Column, Table};
pub use schema_file::SchemaFile;
pub use traits::{Dialect, SchemaSource, SqlExecutor};
pub use types::{AbstractType, IntegerWidth, IntervalType, IntervalUnit};
