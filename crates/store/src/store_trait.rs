use async_trait::async_trait;
use crosswalk_common::{Result, Standard};

/// Read access to standard records
#[async_trait]
pub trait StandardStore: Send + Sync {
    /// Fetch the standard with the given id.
    ///
    /// `Ok(None)` when no record matches; errors are storage failures only.
    async fn fetch_standard(&self, id: &str) -> Result<Option<Standard>>;

    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
