//! Crosswalk Vector Search Engine
//!
//! Cosine similarity search over standard embeddings, scoped to a target
//! jurisdiction and filtered by a similarity floor

mod engine;
mod pgvector;
mod search_trait;
pub mod similarity;

pub use engine::{rank_candidates, MemoryVectorSearch};
pub use pgvector::PgVectorSearch;
pub use search_trait::{SearchParams, VectorSearch};
