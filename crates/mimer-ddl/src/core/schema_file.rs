//! YAML schema files.
//!
//! A schema file lists tables in creation order:
//!
//! ```yaml
//! tables:
//!   - name: types_test
//!     columns:
//!       - { name: id, type: { kind: integer }, primary_key: true, identity: true }
//!       - { name: val_str, type: { kind: varchar, length: 40 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::schema::Table;
use super::traits::SchemaSource;
use crate::error::{DdlError, Result};

/// Tables loaded from a YAML document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    pub tables: Vec<Table>,
}

impl SchemaFile {
    /// Load a schema from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: SchemaFile = serde_yaml::from_str(yaml)?;
        schema.check_unique_names()?;
        Ok(schema)
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(DdlError::Config(format!(
                    "table {} is defined more than once",
                    table.name
                )));
            }
        }
        Ok(())
    }
}

impl SchemaSource for SchemaFile {
    fn tables(&self) -> Result<Vec<Table>> {
        Ok(self.tables.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AbstractType;

    const SCHEMA: &str = r#"
tables:
  - name: types_test
    columns:
      - { name: id, type: { kind: integer }, primary_key: true, identity: true }
      - { name: val_str, type: { kind: varchar, length: 40 } }
  - name: notes
    columns:
      - { name: body, type: { kind: text } }
"#;

    #[test]
    fn test_from_yaml() {
        let schema = SchemaFile::from_yaml(SCHEMA).unwrap();
        let tables = schema.tables().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].columns[1].data_type, AbstractType::varchar(Some(40)));
        assert_eq!(tables[1].columns[0].data_type, AbstractType::Text);
    }

    #[test]
    fn test_duplicate_table_names() {
        let yaml = r#"
tables:
  - { name: t, columns: [] }
  - { name: t, columns: [] }
"#;
        assert!(matches!(
            SchemaFile::from_yaml(yaml),
            Err(DdlError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            SchemaFile::from_yaml("tables: [ {"),
            Err(DdlError::Yaml(_))
        ));
    }
}
