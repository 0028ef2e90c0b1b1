//! Helpers shared by commands that talk to Discogs

use crate::cache::FileStorage;
use crate::config::{Config, Paths};
use crate::discogs::DiscogsClient;
use crate::error::Result;
use crate::shuffle::Shuffler;

/// Values given on the command line or in the environment that take
/// precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct ClientOverrides {
    pub token: Option<String>,
    pub api_url: Option<String>,
}

/// Build a shuffler backed by the Discogs API and the on-disk cache
pub fn build_shuffler(
    config: &Config,
    paths: &Paths,
    overrides: &ClientOverrides,
) -> Result<Shuffler<DiscogsClient, FileStorage>> {
    let mut config = config.clone();
    if let Some(ref api_url) = overrides.api_url {
        config.api.base_url = Some(api_url.clone());
    }
    if let Some(ref token) = overrides.token {
        config.set_token(token.clone());
    }

    let client = DiscogsClient::new(&config)?;
    Ok(Shuffler::new(client, FileStorage::new(&paths.cache_dir)))
}
