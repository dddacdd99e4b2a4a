//! Dialect configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::core::identifier::MAX_IDENTIFIER_LENGTH;

/// How compiled statements are laid out.
///
/// Both layouts produce the same token sequence; they differ only in
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DdlLayout {
    /// Single line, single spaces.
    #[default]
    Compact,
    /// One column definition per line, tab indented.
    Pretty,
}

/// Rendering options for a target dialect.
///
/// Every field has a default matching the current Mimer SQL engine, so an
/// empty YAML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Qualified name of the built-in UUID type.
    pub uuid_type_name: String,

    /// Whether the engine has a native UUID type (older engines do not).
    pub native_uuid: bool,

    /// Length used for VARCHAR columns declared without one.
    pub default_varchar_length: i32,

    /// Binary precision at or above which FLOAT(n) becomes DOUBLE PRECISION.
    pub float_double_threshold: i32,

    /// Emit CREATE/DROP SEQUENCE statements for identity columns.
    pub create_sequences: bool,

    /// Treat a lone integer primary key as an identity column when no column
    /// is explicitly marked.
    pub infer_identity: bool,

    /// Suffix of derived sequence names (`<table>_<column>_<suffix>`).
    pub sequence_suffix: String,

    /// Statement layout.
    pub layout: DdlLayout,

    /// Maximum identifier length in characters.
    pub max_identifier_length: usize,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            uuid_type_name: "BUILTIN.UUID".to_string(),
            native_uuid: true,
            default_varchar_length: 255,
            float_double_threshold: 54,
            create_sequences: true,
            infer_identity: false,
            sequence_suffix: "autoinc_seq".to_string(),
            layout: DdlLayout::Compact,
            max_identifier_length: MAX_IDENTIFIER_LENGTH,
        }
    }
}
