//! Cache management commands

use crate::cache::{CollectionCache, FileStorage};
use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::config::Paths;
use crate::error::Result;
use crate::output;
use crate::shuffle::clear_cached;

/// Handle cache commands
pub fn cache(paths: &Paths, args: &CacheArgs, format: OutputFormat) -> Result<String> {
    let cache = CollectionCache::new(FileStorage::new(&paths.cache_dir));

    match &args.command {
        CacheCommands::Status => {
            let status = cache.status()?;
            output::format_cache_status(&status, &paths.cache_dir, format)
        }
        CacheCommands::Clear { user } => {
            let username = user.as_deref().map(str::trim);
            let count = clear_cached(&cache, username)?;
            output::format_cache_cleared(username, count, format)
        }
    }
}
