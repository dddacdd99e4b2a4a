//! Type rendering for the target dialect.
//!
//! - [`typemap`]: Type registry mapping [`AbstractType`](crate::core::AbstractType)
//!   to type tokens
//! - [`interval`]: Interval grammar and validation
//! - [`builder`]: Token builders that own spacing and punctuation
//!
//! The functions here are pure; dialect objects in [`crate::drivers`] bind
//! them to a [`DialectConfig`](crate::config::DialectConfig).

pub mod builder;
pub mod interval;
pub mod typemap;

pub use builder::{TokenList, TypeToken};
pub use interval::{render_interval, validate_interval};
pub use typemap::render_type;
