use serde::{Deserialize, Serialize};

use crate::collection::{CollectionItem, CollectionPage};

/// Response for `GET /users/{username}/collection/folders/{folder}/releases`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionReleasesResponse {
    pub pagination: Pagination,
    pub releases: Vec<Release>,
}

/// Pagination metadata returned with every page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
}

/// One release instance in a user's collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    pub basic_information: BasicInformation,
}

/// Release summary embedded in collection listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicInformation {
    pub title: String,
    pub artists: Vec<ArtistCredit>,
    #[serde(default)]
    pub cover_image: String,
}

/// Artist credit on a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCredit {
    pub name: String,
}

/// Error body Discogs sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<Release> for CollectionItem {
    fn from(release: Release) -> Self {
        let info = release.basic_information;
        CollectionItem {
            title: info.title,
            artists: info.artists.into_iter().map(|a| a.name).collect(),
            cover_image: info.cover_image,
        }
    }
}

impl From<CollectionReleasesResponse> for CollectionPage {
    fn from(response: CollectionReleasesResponse) -> Self {
        CollectionPage {
            page: response.pagination.page,
            pages: response.pagination.pages,
            items: response.releases.into_iter().map(CollectionItem::from).collect(),
        }
    }
}
