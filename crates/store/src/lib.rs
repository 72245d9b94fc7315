//! Crosswalk Record Store Client
//!
//! Fetches a single standard's field projection by identifier

mod memory;
mod postgrest;
mod store_trait;

pub use memory::MemoryStandardStore;
pub use postgrest::PostgrestStore;
pub use store_trait::StandardStore;
