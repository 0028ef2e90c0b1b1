use std::path::Path;

use chrono::Utc;
use colored::Colorize;
use terminal_size::{terminal_size, Width};

use crate::cache::CacheStatus;
use crate::collection::CollectionItem;

/// Width used when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

fn term_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Format age in human-readable form
fn format_age(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86_400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86_400, (secs % 86_400) / 3600)
    }
}

/// Format one release for pretty output
pub fn format_item(item: &CollectionItem) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", item.title.bold()));
    let artists = item.artist_display();
    if !artists.is_empty() {
        output.push_str(&format!("{}\n", artists.cyan()));
    }
    if !item.cover_image.is_empty() {
        output.push_str(&format!("{} {}\n", "Cover:".dimmed(), item.cover_image));
    }

    output.trim_end().to_string()
}

/// Format a collection listing, one release per line
pub fn format_collection(username: &str, releases: &[CollectionItem], total: usize) -> String {
    if total == 0 {
        return format!("No releases in {}'s collection.", username);
    }

    let width = term_width();
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({} releases)\n",
        format!("{}'s collection", username).bold(),
        total
    ));
    output.push_str(&"─".repeat(width.min(70)));
    output.push('\n');

    let number_width = total.to_string().len();
    for (index, item) in releases.iter().enumerate() {
        let prefix = format!("{:>number_width$}. ", index + 1);
        let line = format!("{} - {}", item.artist_display(), item.title);
        let available = width.saturating_sub(prefix.chars().count()).max(10);
        output.push_str(&format!("{}{}\n", prefix.dimmed(), truncate_str(&line, available)));
    }

    if releases.len() < total {
        output.push_str(&format!(
            "{}\n",
            format!("... and {} more", total - releases.len()).dimmed()
        ));
    }

    output.trim_end().to_string()
}

/// Format cache status for pretty output
pub fn format_cache_status(status: &CacheStatus, cache_dir: &Path) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Cache Status".bold()));
    output.push_str(&format!("Location: {}\n\n", cache_dir.display()));

    if status.entries.is_empty() {
        output.push_str(&format!("  {}\n", "Nothing cached".dimmed()));
        return output.trim_end().to_string();
    }

    let now = Utc::now();
    for entry in &status.entries {
        output.push_str(&format!("{}\n", entry.key.cyan()));
        if entry.corrupt {
            output.push_str(&format!(
                "  {}\n",
                "Unreadable, will be reloaded on next use".red()
            ));
            continue;
        }
        if let Some(count) = entry.count {
            output.push_str(&format!("  Releases: {}\n", count));
        }
        if let Some(cached_at) = entry.cached_at {
            let age = (now - cached_at).num_seconds().max(0) as u64;
            output.push_str(&format!("  Age: {}\n", format_age(age)));
        }
    }

    output.trim_end().to_string()
}

/// Format the result of clearing the cache
pub fn format_cache_cleared(username: Option<&str>, count: usize) -> String {
    match username {
        Some(username) if count == 0 => format!("Nothing cached for {}", username),
        Some(username) => format!("{} Cache cleared for {}", "✓".green(), username),
        None => format!("{} Cache cleared ({} entries)", "✓".green(), count),
    }
}
