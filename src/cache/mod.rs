//! Cache module for reducing API calls
//!
//! Loaded collections are stored per user and trusted until explicitly
//! cleared.

mod releases;
mod storage;

pub use releases::{CacheKey, CacheStatus, CollectionCache};
pub use storage::{FileStorage, MemoryStorage, Storage};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status of a single cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntryStatus {
    pub key: String,
    pub cached_at: Option<DateTime<Utc>>,
    pub count: Option<usize>,
    /// The stored value could not be decoded and will be reloaded
    pub corrupt: bool,
}
