//! Per-user collection caching

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{CacheEntryStatus, Storage};
use crate::collection::Collection;
use crate::error::Result;

const KEY_PREFIX: &str = "releases_";

/// Storage key for one user's collection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for `username`'s collection
    pub fn for_user(username: &str) -> Self {
        Self(format!("{KEY_PREFIX}{username}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored collection with metadata
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    cached_at: DateTime<Utc>,
    releases: Collection,
}

/// Overall cache status
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub entries: Vec<CacheEntryStatus>,
}

/// Get-or-populate cache of user collections over a [`Storage`] backend
pub struct CollectionCache<S> {
    storage: S,
    in_flight: Mutex<HashMap<CacheKey, Arc<Mutex<()>>>>,
}

impl<S: Storage> CollectionCache<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Return the stored collection for `key`, or run `load` and store its
    /// result.
    ///
    /// Concurrent calls for the same key run one at a time, so `load` runs
    /// at most once per miss. A stored value that fails to decode counts as
    /// a miss. When `load` fails nothing is written.
    pub fn get_or_load<F>(&self, key: &CacheKey, load: F) -> Result<Collection>
    where
        F: FnOnce() -> Result<Collection>,
    {
        let lock = self.key_lock(key);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.get_or_load_locked(key, load)
        };
        self.release_key_lock(key, lock);
        result
    }

    fn get_or_load_locked<F>(&self, key: &CacheKey, load: F) -> Result<Collection>
    where
        F: FnOnce() -> Result<Collection>,
    {
        if let Some(releases) = self.get(key)? {
            debug!(%key, count = releases.len(), "cache hit");
            return Ok(releases);
        }

        debug!(%key, "cache miss");
        let releases = load()?;
        self.set(key, &releases)?;
        info!(%key, count = releases.len(), "cached collection");
        Ok(releases)
    }

    /// Read a stored collection. Undecodable entries are reported as absent.
    pub fn get(&self, key: &CacheKey) -> Result<Option<Collection>> {
        let Some(data) = self.storage.get(key.as_str())? else {
            return Ok(None);
        };

        match serde_json::from_str::<CacheEntry>(&data) {
            Ok(entry) => Ok(Some(entry.releases)),
            Err(e) => {
                warn!(%key, error = %e, "ignoring corrupt cache entry");
                Ok(None)
            }
        }
    }

    /// Store `releases` under `key`
    pub fn set(&self, key: &CacheKey, releases: &Collection) -> Result<()> {
        let entry = CacheEntry {
            key: key.to_string(),
            cached_at: Utc::now(),
            releases: releases.clone(),
        };
        let json = serde_json::to_string(&entry)?;
        self.storage.set(key.as_str(), &json)
    }

    /// Remove one entry, returning whether it existed. Clearing a missing
    /// key is a no-op. Waits for any in-flight load of the same key.
    pub fn clear(&self, key: &CacheKey) -> Result<bool> {
        let lock = self.key_lock(key);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            debug!(%key, "clearing cache entry");
            self.storage.remove(key.as_str())
        };
        self.release_key_lock(key, lock);
        result
    }

    /// Remove every cached collection, returning how many were removed
    pub fn clear_all(&self) -> Result<usize> {
        let mut removed = 0;
        for key in self.storage.keys()? {
            if self.clear(&CacheKey(key))? {
                removed += 1;
            }
        }
        info!(count = removed, "cleared cache");
        Ok(removed)
    }

    /// Describe every stored entry
    pub fn status(&self) -> Result<CacheStatus> {
        let mut entries = Vec::new();
        for key in self.storage.keys()? {
            let parsed = self
                .storage
                .get(&key)?
                .and_then(|data| serde_json::from_str::<CacheEntry>(&data).ok());

            entries.push(match parsed {
                Some(entry) => CacheEntryStatus {
                    key,
                    cached_at: Some(entry.cached_at),
                    count: Some(entry.releases.len()),
                    corrupt: false,
                },
                None => CacheEntryStatus {
                    key,
                    cached_at: None,
                    count: None,
                    corrupt: true,
                },
            });
        }
        Ok(CacheStatus { entries })
    }

    fn key_lock(&self, key: &CacheKey) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(in_flight.entry(key.clone()).or_default())
    }

    /// Drop the per-key lock from the map once no other caller holds it
    fn release_key_lock(&self, key: &CacheKey, lock: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if in_flight
            .get(key)
            .is_some_and(|shared| Arc::strong_count(shared) == 1)
        {
            in_flight.remove(key);
        }
    }
}
