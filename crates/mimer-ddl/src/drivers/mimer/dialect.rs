//! Mimer SQL dialect (Strategy pattern).
//!
//! Binds the type registry and interval renderer to an immutable
//! [`DialectConfig`]. Mimer SQL has no column-level auto-increment modifier,
//! so identity columns are emulated with a sequence and a
//! `DEFAULT NEXT VALUE FOR <sequence>` expression (see the default
//! [`Dialect`] methods).

use crate::config::DialectConfig;
use crate::core::traits::Dialect;
use crate::core::types::{AbstractType, IntervalType};
use crate::dialect::{render_interval, render_type};
use crate::error::Result;

/// Mimer SQL dialect implementation.
#[derive(Debug, Clone, Default)]
pub struct MimerDialect {
    config: DialectConfig,
}

impl MimerDialect {
    /// Create a dialect with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dialect with a validated configuration.
    pub fn with_config(config: DialectConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Dialect for MimerDialect {
    fn name(&self) -> &str {
        "mimer"
    }

    fn config(&self) -> &DialectConfig {
        &self.config
    }

    fn render_type(&self, ty: &AbstractType) -> Result<String> {
        render_type(ty, self)
    }

    fn render_interval(&self, interval: &IntervalType) -> Result<String> {
        render_interval(interval)
    }
}
