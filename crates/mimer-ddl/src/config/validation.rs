//! Configuration validation.

use super::DialectConfig;
use crate::error::{DdlError, Result};

/// Validate the configuration.
pub fn validate(config: &DialectConfig) -> Result<()> {
    if config.uuid_type_name.trim().is_empty() {
        return Err(DdlError::Config("uuid_type_name is required".into()));
    }

    if config.default_varchar_length < 1 {
        return Err(DdlError::Config(format!(
            "default_varchar_length must be at least 1, got {}",
            config.default_varchar_length
        )));
    }

    if config.float_double_threshold < 2 {
        return Err(DdlError::Config(format!(
            "float_double_threshold must be at least 2, got {}",
            config.float_double_threshold
        )));
    }

    if config.sequence_suffix.is_empty()
        || !config
            .sequence_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(DdlError::Config(format!(
            "sequence_suffix must be non-empty and contain only letters, digits and '_', got {:?}",
            config.sequence_suffix
        )));
    }

    if config.max_identifier_length == 0 {
        return Err(DdlError::Config(
            "max_identifier_length must be at least 1".into(),
        ));
    }

    Ok(())
}
