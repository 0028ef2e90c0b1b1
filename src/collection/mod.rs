//! Collection model, paginated loading and random selection

mod loader;
mod select;

pub use loader::{CollectionLoader, CollectionPage, RemoteSource, PAGE_SIZE};
pub use select::select_random;

use serde::{Deserialize, Serialize};

/// One release in a user's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub title: String,
    pub artists: Vec<String>,
    /// Cover image URL, empty when Discogs has none
    #[serde(default)]
    pub cover_image: String,
}

impl CollectionItem {
    /// Artist names joined for display
    pub fn artist_display(&self) -> String {
        self.artists.join(", ")
    }
}

/// A user's releases, in the order Discogs returned them
pub type Collection = Vec<CollectionItem>;
