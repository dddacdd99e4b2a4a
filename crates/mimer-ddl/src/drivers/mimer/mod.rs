//! Mimer SQL driver.

pub mod dialect;

pub use dialect::MimerDialect;
