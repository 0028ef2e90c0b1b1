use serde::{Deserialize, Serialize};
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use super::paths::Paths;
use crate::discogs::DEFAULT_BASE_URL;
use crate::error::{Result, ShuffleError};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Default settings
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// API-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Discogs personal access token, needed only for private collections
    pub token: Option<String>,
    /// Override for the Discogs API root
    pub base_url: Option<String>,
}

/// Default values for commands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Username used when none is given on the command line
    pub username: Option<String>,
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a specific paths instance
    pub fn save_to(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let contents = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, &contents)?;

        // The file may contain an API token
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&paths.config_file, perms)?;
        }

        Ok(())
    }

    /// API root, falling back to the public Discogs API
    pub fn base_url(&self) -> &str {
        self.api
            .base_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Pick the username from the command line or the configured default
    pub fn resolve_username<'a>(&'a self, arg: Option<&'a str>) -> Result<&'a str> {
        arg.or(self.defaults.username.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ShuffleError::EmptyUsername)
    }

    /// Set the default username
    pub fn set_username(&mut self, username: String) {
        self.defaults.username = Some(username);
    }

    /// Set the API token
    pub fn set_token(&mut self, token: String) {
        self.api.token = Some(token);
    }

    /// Apply a `section.key = value` assignment
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.token" => self.set_token(value.to_string()),
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| {
                    ShuffleError::InvalidArgument(format!("api.base_url is not a valid URL: {e}"))
                })?;
                self.api.base_url = Some(value.to_string());
            }
            "defaults.username" => {
                if value.trim().is_empty() {
                    return Err(ShuffleError::EmptyUsername);
                }
                self.set_username(value.trim().to_string());
            }
            "output.format" => {
                if value != "pretty" && value != "json" {
                    return Err(ShuffleError::InvalidArgument(
                        "output.format must be 'pretty' or 'json'".to_string(),
                    ));
                }
                self.output.format = value.to_string();
            }
            _ => {
                return Err(ShuffleError::InvalidArgument(format!(
                    "Unknown config key: {key}. Valid keys: api.token, api.base_url, defaults.username, output.format"
                )));
            }
        }
        Ok(())
    }
}
