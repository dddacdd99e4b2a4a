//! Error types for the DDL compiler.

use thiserror::Error;

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for invalid schemas (bad type parameters, identity conflicts, identifiers).
pub const EXIT_SCHEMA_ERROR: u8 = 2;
/// Exit code for types the configured dialect cannot render.
pub const EXIT_UNSUPPORTED_ERROR: u8 = 3;
/// Exit code for failures reported by the execution channel.
pub const EXIT_EXECUTION_ERROR: u8 = 4;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for DDL compilation.
#[derive(Error, Debug)]
pub enum DdlError {
    /// Malformed or out-of-range type parameters (negative length, reversed interval, ...)
    #[error("Type specification error: {0}")]
    TypeSpecification(String),

    /// More than one identity column requested on a single table
    #[error("Table {table} declares more than one identity column: {}", columns.join(", "))]
    MultipleIdentityColumns { table: String, columns: Vec<String> },

    /// The configured dialect has no rendering rule for this type
    #[error("Type {type_name} is not supported by dialect {dialect}")]
    UnsupportedType { type_name: String, dialect: String },

    /// Identifier rejected (empty, NUL byte, too long)
    #[error("Invalid identifier: {0}")]
    Identifier(String),

    /// Configuration error (invalid YAML, out-of-range settings, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The execution channel rejected a statement
    #[error("Execution failed for statement `{statement}`: {message}")]
    Execution { statement: String, message: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DdlError {
    /// Create a TypeSpecification error.
    pub fn type_spec(message: impl Into<String>) -> Self {
        DdlError::TypeSpecification(message.into())
    }

    /// Create an UnsupportedType error.
    pub fn unsupported(type_name: impl Into<String>, dialect: impl Into<String>) -> Self {
        DdlError::UnsupportedType {
            type_name: type_name.into(),
            dialect: dialect.into(),
        }
    }

    /// Create an Execution error
    pub fn execution(statement: impl Into<String>, message: impl Into<String>) -> Self {
        DdlError::Execution {
            statement: statement.into(),
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DdlError::Config(_) | DdlError::Yaml(_) | DdlError::Json(_) => EXIT_CONFIG_ERROR,
            DdlError::TypeSpecification(_)
            | DdlError::MultipleIdentityColumns { .. }
            | DdlError::Identifier(_) => EXIT_SCHEMA_ERROR,
            DdlError::UnsupportedType { .. } => EXIT_UNSUPPORTED_ERROR,
            DdlError::Execution { .. } => EXIT_EXECUTION_ERROR,
            DdlError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_identity_message_lists_columns() {
        let err = DdlError::MultipleIdentityColumns {
            table: "orders".to_string(),
            columns: vec!["id".to_string(), "seq_no".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Table orders declares more than one identity column: id, seq_no"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(DdlError::type_spec("bad").exit_code(), EXIT_SCHEMA_ERROR);
        assert_eq!(
            DdlError::unsupported("UUID", "mimer").exit_code(),
            EXIT_UNSUPPORTED_ERROR
        );
        assert_eq!(DdlError::Config("x".into()).exit_code(), EXIT_CONFIG_ERROR);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(DdlError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_format_detailed_includes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "schema.yaml");
        let err = DdlError::from(io);
        let detailed = err.format_detailed();
        assert!(detailed.starts_with("Error: IO error: schema.yaml"));
    }
}
