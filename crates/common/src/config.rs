use crate::error::CrosswalkError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of matches returned when `count` is absent or invalid
pub const DEFAULT_MATCH_COUNT: usize = 20;

/// Default similarity floor
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.75;

/// Crosswalk application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Record store (PostgREST) base URL
    pub store_url: Option<String>,

    /// Record store service key
    #[serde(skip_serializing)]
    pub store_api_key: Option<String>,

    /// Postgres connection string for vector search
    #[serde(skip_serializing)]
    pub database_url: Option<String>,

    /// Connection pool size
    pub db_pool_size: u32,

    /// Max wait for a pooled connection (seconds)
    pub db_acquire_timeout_secs: u64,

    /// Max duration of a single search query (seconds)
    pub db_query_timeout_secs: u64,

    /// Record store HTTP timeout (seconds)
    pub store_timeout_secs: u64,

    /// JSON catalog path; when set, store and search run in memory
    pub catalog_path: Option<PathBuf>,

    /// Upper bound on requested match count
    pub max_match_count: usize,

    /// Minimum similarity for a candidate to be returned
    pub min_similarity: f64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: None,
            store_api_key: None,
            database_url: None,
            db_pool_size: 3,
            db_acquire_timeout_secs: 5,
            db_query_timeout_secs: 10,
            store_timeout_secs: 10,
            catalog_path: None,
            max_match_count: 100,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, CrosswalkError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            store_url: Self::get_env("SUPABASE_URL"),
            store_api_key: Self::get_env("SUPABASE_SERVICE_ROLE_KEY"),
            database_url: Self::get_env("SUPABASE_DB_URL"),
            db_pool_size: Self::get_env_parsed("DB_POOL_SIZE")?
                .unwrap_or(defaults.db_pool_size),
            db_acquire_timeout_secs: Self::get_env_parsed("DB_ACQUIRE_TIMEOUT_SECS")?
                .unwrap_or(defaults.db_acquire_timeout_secs),
            db_query_timeout_secs: Self::get_env_parsed("DB_QUERY_TIMEOUT_SECS")?
                .unwrap_or(defaults.db_query_timeout_secs),
            store_timeout_secs: Self::get_env_parsed("STORE_TIMEOUT_SECS")?
                .unwrap_or(defaults.store_timeout_secs),
            catalog_path: Self::get_env("CATALOG_PATH").map(PathBuf::from),
            max_match_count: Self::get_env_parsed("MAX_MATCH_COUNT")?
                .unwrap_or(defaults.max_match_count),
            min_similarity: Self::get_env_parsed("MIN_SIMILARITY")?
                .unwrap_or(defaults.min_similarity),
            server_host: Self::get_env("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT")?
                .unwrap_or(defaults.server_port),
            log_dir: Self::get_env("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: Self::get_env("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        Ok(config)
    }

    /// Get non-empty environment variable
    fn get_env(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    /// Get and parse environment variable; a present but unparsable value is an error
    fn get_env_parsed<T: FromStr>(key: &str) -> Result<Option<T>, CrosswalkError> {
        Self::get_env(key)
            .map(|raw| parse_value(key, &raw))
            .transpose()
    }

    /// Whether store and search are served from an in-memory catalog
    pub fn uses_catalog(&self) -> bool {
        self.catalog_path.is_some()
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CrosswalkError> {
        if !self.uses_catalog() {
            let store_url = self.store_url.as_deref().ok_or_else(|| {
                CrosswalkError::config("SUPABASE_URL is required unless CATALOG_PATH is set")
            })?;
            if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
                return Err(CrosswalkError::config(
                    "Record store URL must start with http:// or https://",
                ));
            }
            if self.store_api_key.is_none() {
                return Err(CrosswalkError::config(
                    "SUPABASE_SERVICE_ROLE_KEY is required unless CATALOG_PATH is set",
                ));
            }
            if self.database_url.is_none() {
                return Err(CrosswalkError::config(
                    "SUPABASE_DB_URL is required unless CATALOG_PATH is set",
                ));
            }
        }

        if self.db_pool_size == 0 {
            return Err(CrosswalkError::config("Database pool size cannot be 0"));
        }

        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(CrosswalkError::config(format!(
                "Minimum similarity must be within [0, 1], got {}",
                self.min_similarity
            )));
        }

        if self.max_match_count == 0 {
            return Err(CrosswalkError::config("Maximum match count cannot be 0"));
        }

        // Validate port range
        if self.server_port == 0 {
            return Err(CrosswalkError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, CrosswalkError> {
    raw.trim()
        .parse()
        .map_err(|_| CrosswalkError::config(format!("Invalid value for {}: {:?}", key, raw)))
}
