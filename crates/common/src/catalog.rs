//! In-memory standards catalog
//!
//! A read-only snapshot of standard rows loaded from a JSON file. Backs the
//! in-memory record store and vector search for local runs and tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::CrosswalkError;
use crate::standard::StandardRow;
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Arc<Vec<StandardRow>>,
    by_id: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Build a catalog from rows. Identifiers must be unique.
    pub fn from_rows(rows: Vec<StandardRow>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if by_id.insert(row.standard.id.clone(), idx).is_some() {
                return Err(CrosswalkError::config(format!(
                    "Duplicate standard id in catalog: {}",
                    row.standard.id
                )));
            }
        }

        Ok(Self {
            rows: Arc::new(rows),
            by_id: Arc::new(by_id),
        })
    }

    /// Load a catalog from a JSON array of standard rows
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            CrosswalkError::config(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        let rows: Vec<StandardRow> = serde_json::from_str(&data)?;
        let catalog = Self::from_rows(rows)?;

        info!(
            "Catalog loaded: {} standards ({} with embeddings) from {}",
            catalog.len(),
            catalog.embedded_count(),
            path.display()
        );
        Ok(catalog)
    }

    /// Get row by standard id
    pub fn get(&self, id: &str) -> Option<&StandardRow> {
        self.by_id.get(id).map(|&idx| &self.rows[idx])
    }

    /// Iterate over all rows in load order
    pub fn rows(&self) -> impl Iterator<Item = &StandardRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count rows carrying an embedding
    pub fn embedded_count(&self) -> usize {
        self.rows.iter().filter(|r| r.embedding.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard::Standard;
    use std::io::Write;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::from_rows(vec![
            StandardRow::new(Standard::new("A"), Some(vec![1.0, 0.0])),
            StandardRow::new(Standard::new("B"), None),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.embedded_count(), 1);
        assert!(catalog.get("B").unwrap().embedding.is_none());
        assert!(catalog.get("C").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_rows(vec![
            StandardRow::new(Standard::new("A"), None),
            StandardRow::new(Standard::new("A"), None),
        ]);
        assert!(matches!(result, Err(CrosswalkError::Config(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "A", "jurisdiction_id": "J1", "embedding": [0.6, 0.8]}},
                {{"id": "B", "jurisdiction_id": "J2", "ancestor_ids": ["root", "A"]}}
            ]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A").unwrap().embedding, Some(vec![0.6, 0.8]));
        assert_eq!(catalog.get("B").unwrap().standard.ancestor_ids, vec!["root", "A"]);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Catalog::from_json_file(Path::new("/nonexistent/catalog.json"));
        assert!(matches!(result, Err(CrosswalkError::Config(_))));
    }
}
