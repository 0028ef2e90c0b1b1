use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::types::*;
use crate::collection::{CollectionPage, RemoteSource};
use crate::config::Config;
use crate::error::{Result, ShuffleError};

pub const DEFAULT_BASE_URL: &str = "https://api.discogs.com";
/// Discogs' built-in "All" folder
const ALL_FOLDER: u32 = 0;
const USER_AGENT: &str = concat!("discogs-shuffle/", env!("CARGO_PKG_VERSION"));

/// Discogs API client
pub struct DiscogsClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl DiscogsClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_settings(config.base_url(), config.api.token.clone())
    }

    /// Create a client against an explicit base URL, optionally authenticated
    pub fn with_settings(base_url: &str, token: Option<String>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ShuffleError::InvalidArgument(format!("Invalid API URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ShuffleError::InvalidArgument(format!(
                "Invalid API URL: {base_url}"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ShuffleError::InvalidArgument(format!("Invalid API URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request to the Discogs API
    fn get<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let mut request = self.client.get(url);
        if let Some(ref token) = self.token {
            request = request.header("Authorization", format!("Discogs token={token}"));
        }
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ShuffleError::api(status.as_u16(), message));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(ShuffleError::Schema)
    }

    /// List one page of a user's collection folder
    pub fn collection_releases(
        &self,
        username: &str,
        folder: u32,
        page: u32,
        per_page: u32,
    ) -> Result<CollectionReleasesResponse> {
        let folder = folder.to_string();
        let mut url = self.endpoint(&[
            "users",
            username,
            "collection",
            "folders",
            &folder,
            "releases",
        ])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());

        self.get(url)
    }
}

impl RemoteSource for DiscogsClient {
    fn fetch_page(&self, username: &str, page: u32, per_page: u32) -> Result<CollectionPage> {
        self.collection_releases(username, ALL_FOLDER, page, per_page)
            .map(CollectionPage::from)
    }
}
