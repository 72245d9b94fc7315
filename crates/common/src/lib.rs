pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod standard;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::CrosswalkError;
pub use standard::{MatchCandidate, Standard, StandardRow, STANDARD_FIELDS};
pub type Result<T> = std::result::Result<T, CrosswalkError>;
