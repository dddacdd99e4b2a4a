//! Compiled DDL cache keyed by content hash.
//!
//! The key is a SHA-256 digest of the dialect configuration hash and the
//! serialized table. Any change to either produces a new key, so entries
//! never need explicit invalidation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::schema::Table;
use crate::core::traits::Dialect;
use crate::error::Result;

use super::table::{CompiledTable, DdlCompiler};

/// Thread-safe cache of compiled tables.
#[derive(Debug, Default)]
pub struct DdlCache {
    entries: RwLock<HashMap<String, Arc<CompiledTable>>>,
}

impl DdlCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a table compiled by a given dialect.
    pub fn key<D: Dialect>(compiler: &DdlCompiler<D>, table: &Table) -> Result<String> {
        let table_json = serde_json::to_string(table)?;
        let mut hasher = Sha256::new();
        hasher.update(compiler.dialect().name().as_bytes());
        hasher.update(compiler.dialect().config().hash().as_bytes());
        hasher.update(table_json.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Return the cached compilation or compile and store it.
    ///
    /// Compilation errors are returned and nothing is stored.
    pub fn get_or_compile<D: Dialect>(
        &self,
        compiler: &DdlCompiler<D>,
        table: &Table,
    ) -> Result<Arc<CompiledTable>> {
        let key = Self::key(compiler, table)?;

        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = entries.get(&key) {
                debug!("DDL cache hit for {}", table.name);
                return Ok(Arc::clone(hit));
            }
        }

        let compiled = Arc::new(compiler.compile(table)?);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let entry = entries.entry(key).or_insert_with(|| Arc::clone(&compiled));
        Ok(Arc::clone(entry))
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_else(|e| e.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
