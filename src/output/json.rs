use std::path::Path;

use crate::cache::CacheStatus;
use crate::collection::CollectionItem;
use crate::error::Result;

/// Format a release as JSON
pub fn format_item(item: &CollectionItem) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

/// Format a collection listing as JSON
pub fn format_collection(username: &str, releases: &[CollectionItem], total: usize) -> Result<String> {
    let json = serde_json::json!({
        "username": username,
        "total": total,
        "releases": releases,
    });
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Format cache status as JSON
pub fn format_cache_status(status: &CacheStatus, cache_dir: &Path) -> Result<String> {
    let json = serde_json::json!({
        "cache_dir": cache_dir.to_string_lossy(),
        "entries": status.entries,
    });
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Format a cache clear result as JSON
pub fn format_cache_cleared(username: Option<&str>, count: usize) -> Result<String> {
    let json = serde_json::json!({
        "status": "cleared",
        "username": username,
        "count": count,
    });
    Ok(serde_json::to_string_pretty(&json)?)
}
