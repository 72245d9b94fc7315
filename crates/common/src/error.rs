/// Crosswalk error types
///
/// Domain-level absence (an unknown standard, a standard without an
/// embedding, an empty candidate set) is never an error; these variants are
/// reserved for infrastructure faults and rejected input.
#[derive(Debug, thiserror::Error)]
pub enum CrosswalkError {
    /// Record store failure (transport, status, decoding)
    #[error("Record store error: {0}")]
    Store(String),

    /// Vector search failure (pool, query, dimension mismatch)
    #[error("Vector search error: {0}")]
    VectorSearch(String),

    /// Missing or malformed settings, unusable catalog, logging setup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected request parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file decoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CrosswalkError {
    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::Store(msg.into())
    }

    pub fn vector_search<S: Into<String>>(msg: S) -> Self {
        Self::VectorSearch(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// HTTP status for this error: the caller's fault is 400, anything
    /// else is a server-side failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Store(_) | Self::VectorSearch(_) | Self::Config(_) => 500,
            Self::Io(_) | Self::Json(_) => 500,
        }
    }
}
