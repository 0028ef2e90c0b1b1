use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// Pick a random record from your Discogs collection
#[derive(Parser)]
#[command(name = "discogs-shuffle")]
#[command(version, propagate_version = true)]
#[command(about = "Pick a random record from your Discogs collection")]
pub struct Cli {
    /// Output format for command results [default: from config, else pretty]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Discogs personal access token (overrides config)
    #[arg(long, env = "DISCOGS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Discogs API root (overrides config)
    #[arg(long, env = "DISCOGS_SHUFFLE_API_URL", global = true, hide = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value, defaulting to pretty
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pick a random release from a collection
    #[command(alias = "s")]
    Shuffle(ShuffleArgs),

    /// List every release in a collection
    #[command(alias = "ls")]
    List(ListArgs),

    /// Manage locally cached collections
    Cache(CacheArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the shuffle command
#[derive(Args)]
pub struct ShuffleArgs {
    /// Discogs username (defaults to defaults.username from config)
    pub username: Option<String>,

    /// Reload the collection from Discogs before picking
    #[arg(short, long)]
    pub refresh: bool,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Discogs username (defaults to defaults.username from config)
    pub username: Option<String>,

    /// Maximum number of releases to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Reload the collection from Discogs first
    #[arg(short, long)]
    pub refresh: bool,
}

/// Arguments for the cache command
#[derive(Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands
#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show cached collections
    Status,
    /// Clear cached collections
    Clear {
        /// Only clear this user's collection
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., defaults.username)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
