use async_trait::async_trait;
use crosswalk_common::{Catalog, Result, Standard};
use tracing::debug;

use crate::store_trait::StandardStore;

/// Record store over an in-memory catalog
#[derive(Debug, Clone)]
pub struct MemoryStandardStore {
    catalog: Catalog,
}

impl MemoryStandardStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl StandardStore for MemoryStandardStore {
    async fn fetch_standard(&self, id: &str) -> Result<Option<Standard>> {
        let standard = self.catalog.get(id).map(|row| row.standard.clone());
        debug!("Catalog lookup {} - found: {}", id, standard.is_some());
        Ok(standard)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswalk_common::StandardRow;

    #[tokio::test]
    async fn test_fetch_returns_projection_or_none() {
        let catalog = Catalog::from_rows(vec![StandardRow::new(
            Standard::new("S1").with_jurisdiction("J1", "Ohio"),
            Some(vec![1.0, 0.0]),
        )])
        .unwrap();
        let store = MemoryStandardStore::new(catalog);

        let found = store.fetch_standard("S1").await.unwrap().unwrap();
        assert_eq!(found.jurisdiction_title.as_deref(), Some("Ohio"));

        assert!(store.fetch_standard("missing").await.unwrap().is_none());
    }
}
