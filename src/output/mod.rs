pub mod json;
pub mod pretty;

use std::path::Path;

use crate::cache::CacheStatus;
use crate::cli::OutputFormat;
use crate::collection::CollectionItem;
use crate::error::Result;

/// Format a single picked release
pub fn format_item(item: &CollectionItem, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_item(item)),
        OutputFormat::Json => json::format_item(item),
    }
}

/// Format a (possibly truncated) collection listing
pub fn format_collection(
    username: &str,
    releases: &[CollectionItem],
    total: usize,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_collection(username, releases, total)),
        OutputFormat::Json => json::format_collection(username, releases, total),
    }
}

/// Format cache status
pub fn format_cache_status(status: &CacheStatus, cache_dir: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cache_status(status, cache_dir)),
        OutputFormat::Json => json::format_cache_status(status, cache_dir),
    }
}

/// Format the result of a cache clear
pub fn format_cache_cleared(username: Option<&str>, count: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cache_cleared(username, count)),
        OutputFormat::Json => json::format_cache_cleared(username, count),
    }
}
