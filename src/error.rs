use thiserror::Error;

/// Result type alias for discogs-shuffle operations
pub type Result<T> = std::result::Result<T, ShuffleError>;

/// Errors that can occur while loading, caching or picking releases
#[derive(Error, Debug)]
pub enum ShuffleError {
    /// API error with HTTP status
    #[error("Discogs API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("Unexpected response from Discogs: {0}")]
    Schema(#[source] serde_json::Error),

    /// Failed to encode a cache entry or command output
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No username given and none configured
    #[error("No username given. Pass one or run 'discogs-shuffle config set defaults.username <name>'.")]
    EmptyUsername,

    /// Selection was asked to pick from nothing
    #[error("Collection for '{0}' is empty, nothing to pick from")]
    EmptyCollection(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Coarse classification used for exit codes and user hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Anything that went wrong talking to the catalog service
    RemoteFetch,
    /// Reading or writing the local cache
    Storage,
    /// Bad input: empty username, empty collection, bad flag value
    Precondition,
    /// Config file or environment problems
    Config,
}

impl ShuffleError {
    /// Create an API error from HTTP status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Api { .. } | Self::Http(_) | Self::Schema(_) => ErrorKind::RemoteFetch,
            Self::Io(_) | Self::Json(_) => ErrorKind::Storage,
            Self::EmptyUsername | Self::EmptyCollection(_) | Self::InvalidArgument(_) => {
                ErrorKind::Precondition
            }
            Self::Toml(_) | Self::TomlSerialize(_) | Self::Env(_) => ErrorKind::Config,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config | ErrorKind::Precondition => 2,
            ErrorKind::RemoteFetch => 3,
            ErrorKind::Storage => 4,
        }
    }

    /// Extra line shown to the user under the error, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self.kind() {
            ErrorKind::RemoteFetch => {
                Some("Please check the username or switch your collection to public.")
            }
            _ => None,
        }
    }
}
