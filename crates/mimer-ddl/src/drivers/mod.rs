//! Database driver implementations.
//!
//! Each driver module implements [`Dialect`](crate::core::Dialect) for one
//! engine:
//!
//! - [`mimer`]: Mimer SQL
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` (e.g., `drivers/<engine>/`)
//! 2. Implement `Dialect`, reusing the functions in [`crate::dialect`] where
//!    the engine's type names agree
//! 3. Re-export the dialect type here

pub mod mimer;

pub use mimer::MimerDialect;
