use std::time::Duration;

use async_trait::async_trait;
use crosswalk_common::{CrosswalkError, Result, Standard, STANDARD_FIELDS};
use reqwest::Client;
use tracing::{debug, info};

use crate::store_trait::StandardStore;

/// Table holding the standards
const STANDARDS_TABLE: &str = "standards";

/// PostgREST (Supabase REST) record store client
#[derive(Debug, Clone)]
pub struct PostgrestStore {
    base_url: String,
    api_key: String,
    client: Client,
}

impl PostgrestStore {
    /// Create new record store client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CrosswalkError::store(format!("Failed to create HTTP client: {}", e)))?;

        info!("Record store client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, STANDARDS_TABLE)
    }
}

#[async_trait]
impl StandardStore for PostgrestStore {
    async fn fetch_standard(&self, id: &str) -> Result<Option<Standard>> {
        if id.is_empty() {
            return Ok(None);
        }

        debug!("Fetching standard {} from record store", id);

        let response = self
            .client
            .get(self.table_url())
            .query(&[
                ("select", STANDARD_FIELDS.join(",")),
                ("id", format!("eq.{}", id)),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| CrosswalkError::store(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| CrosswalkError::store(format!("Record store API error: {}", e)))?;

        let rows: Vec<Standard> = response
            .json()
            .await
            .map_err(|e| CrosswalkError::store(format!("Failed to parse response: {}", e)))?;

        debug!("Record store returned {} rows for {}", rows.len(), id);
        Ok(rows.into_iter().next())
    }

    fn backend_name(&self) -> &'static str {
        "postgrest"
    }
}
