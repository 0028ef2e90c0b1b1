//! Username in, random release out
//!
//! Ties the loader, the cache and selection together. Rendering is left to
//! the caller.

use rand::Rng;
use tracing::debug;

use crate::cache::{CacheKey, CollectionCache, Storage};
use crate::collection::{select_random, Collection, CollectionItem, CollectionLoader, RemoteSource};
use crate::error::{Result, ShuffleError};

/// Picks random releases from cached or freshly loaded collections
pub struct Shuffler<R, S> {
    loader: CollectionLoader<R>,
    cache: CollectionCache<S>,
}

impl<R: RemoteSource, S: Storage> Shuffler<R, S> {
    pub fn new(source: R, storage: S) -> Self {
        Self {
            loader: CollectionLoader::new(source),
            cache: CollectionCache::new(storage),
        }
    }

    pub fn cache(&self) -> &CollectionCache<S> {
        &self.cache
    }

    /// The user's full collection, from cache when present
    pub fn collection(&self, username: &str) -> Result<Collection> {
        let username = validate_username(username)?;
        let key = CacheKey::for_user(username);
        self.cache.get_or_load(&key, || self.loader.load(username))
    }

    /// Drop the user's cached collection and load it again
    pub fn refresh(&self, username: &str) -> Result<Collection> {
        let username = validate_username(username)?;
        self.cache.clear(&CacheKey::for_user(username))?;
        self.collection(username)
    }

    /// One random release from the user's collection
    pub fn shuffle(&self, username: &str) -> Result<CollectionItem> {
        self.shuffle_with(username, &mut rand::thread_rng())
    }

    /// Like [`Shuffler::shuffle`], with a caller-provided RNG
    pub fn shuffle_with<G: Rng + ?Sized>(&self, username: &str, rng: &mut G) -> Result<CollectionItem> {
        let releases = self.collection(username)?;
        let picked = select_random(&releases, username.trim(), rng)?;
        debug!(username, title = %picked.title, of = releases.len(), "picked release");
        Ok(picked.clone())
    }

    /// Clear one user's cached collection, or everything when `username`
    /// is `None`. Returns how many entries were removed.
    pub fn clear(&self, username: Option<&str>) -> Result<usize> {
        clear_cached(&self.cache, username)
    }
}

/// Clear one user's entry in `cache`, or all entries when `username` is
/// `None`. Returns how many entries were removed.
pub fn clear_cached<S: Storage>(cache: &CollectionCache<S>, username: Option<&str>) -> Result<usize> {
    match username {
        Some(username) => {
            let username = validate_username(username)?;
            let removed = cache.clear(&CacheKey::for_user(username))?;
            Ok(usize::from(removed))
        }
        None => cache.clear_all(),
    }
}

/// Reject blank usernames before they reach the cache or the network
fn validate_username(username: &str) -> Result<&str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ShuffleError::EmptyUsername);
    }
    Ok(trimmed)
}
