//! DDL statement compilation.
//!
//! - [`column`]: Column definitions
//! - [`identity`]: Sequence emulation of identity columns
//! - [`table`]: CREATE TABLE / DROP TABLE compiler
//! - [`cache`]: Content-hash keyed cache of compiled tables

pub mod cache;
pub mod column;
pub mod identity;
pub mod table;

pub use cache::DdlCache;
pub use column::render_column;
pub use identity::{IdentityPlan, IdentityPlanner};
pub use table::{CompiledTable, DdlCompiler};
