//! Identifier validation and quoting.
//!
//! Table, column and sequence names are spliced into DDL text, so every name
//! goes through [`validate_identifier`] before it is emitted. Names that are
//! valid regular identifiers are emitted bare; everything else is delimited
//! with double quotes.
//!
//! Regular identifiers are matched in their lower-case form only: the engine
//! folds unquoted names to upper case, so a mixed-case name has to be
//! delimited to keep its spelling.
//!
//! Generated names (identity sequences) follow a looser rule, see
//! [`quote_generated`]. They are only ever referenced by the DDL this crate
//! emits, so every reference folds the same way.

use crate::error::{DdlError, Result};

/// Default maximum identifier length in characters.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Reserved words that cannot be used as bare identifiers.
///
/// A curated subset of the Mimer SQL reserved word list (the SQL standard
/// reserved words plus a few keywords such as `sequence`), limited to words
/// plausible as table or column names. A missing entry leaves a name bare,
/// so additions only ever add quoting. Entries are lower case and sorted.
const RESERVED_WORDS: &[&str] = &[
    "all", "alter", "and", "any", "as", "asc", "begin", "between", "both", "by", "call", "case",
    "cast", "char", "character", "check", "close", "column", "commit", "constraint", "create",
    "cross", "current", "cursor", "date", "day", "declare", "default", "delete", "desc",
    "distinct", "double", "drop", "else", "end", "escape", "except", "exists", "false", "fetch",
    "for", "foreign", "from", "full", "grant", "group", "having", "hour", "in", "inner",
    "insert", "intersect", "interval", "into", "is", "join", "key", "leading", "left", "like",
    "minute", "month", "natural", "next", "not", "null", "of", "on", "or", "order", "outer",
    "primary", "references", "revoke", "right", "rollback", "second", "select", "sequence",
    "session_user", "set", "some", "table", "then", "time", "timestamp", "to", "trailing",
    "true", "union", "unique", "update", "user", "using", "value", "values", "when", "where",
    "with", "year",
];

/// Validate an identifier.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers longer than `max_length` characters
///
/// # Errors
///
/// Returns `DdlError::Identifier` with a descriptive message.
pub fn validate_identifier(name: &str, max_length: usize) -> Result<()> {
    if name.is_empty() {
        return Err(DdlError::Identifier("Identifier cannot be empty".to_string()));
    }

    if name.contains('\0') {
        return Err(DdlError::Identifier(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    let length = name.chars().count();
    if length > max_length {
        return Err(DdlError::Identifier(format!(
            "Identifier exceeds maximum length of {} characters (got {}): {:?}",
            max_length, length, name
        )));
    }

    Ok(())
}

/// Check whether a name can be emitted without delimiters.
pub fn is_regular_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = matches!(chars.next(), Some(c) if c.is_ascii_lowercase());
    first_ok
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !is_reserved(name)
}

/// Check if a word is reserved.
pub fn is_reserved(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    RESERVED_WORDS.contains(&lower.as_str())
}

/// Quote an identifier with double quotes, doubling embedded quotes.
pub fn quote_delimited(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Validate an identifier and quote it only if it is not a regular identifier.
///
/// # Examples
///
/// ```
/// use mimer_ddl::core::identifier::quote_if_needed;
///
/// assert_eq!(quote_if_needed("val_int", 128).unwrap(), "val_int");
/// assert_eq!(quote_if_needed("Order", 128).unwrap(), "\"Order\"");
/// assert_eq!(quote_if_needed("table", 128).unwrap(), "\"table\"");
/// ```
pub fn quote_if_needed(name: &str, max_length: usize) -> Result<String> {
    validate_identifier(name, max_length)?;
    if is_regular_identifier(name) {
        Ok(name.to_string())
    } else {
        Ok(quote_delimited(name))
    }
}

/// Validate a generated identifier and quote it only if it needs delimiting.
///
/// Bare when it starts with an ASCII letter, contains only ASCII letters,
/// digits and `_`, and is not a reserved word, regardless of case. Used for
/// sequence names derived from table and column names, so that
/// `NEXT VALUE FOR T_id_autoinc_seq` and `CREATE SEQUENCE T_id_autoinc_seq`
/// name the same object.
pub fn quote_generated(name: &str, max_length: usize) -> Result<String> {
    validate_identifier(name, max_length)?;
    let mut chars = name.chars();
    let plain = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_reserved(name);
    if plain {
        Ok(name.to_string())
    } else {
        Ok(quote_delimited(name))
    }
}
