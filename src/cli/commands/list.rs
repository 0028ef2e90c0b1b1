use crate::cache::Storage;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::collection::RemoteSource;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::shuffle::Shuffler;

/// Handle the list command
pub fn list<R: RemoteSource, S: Storage>(
    shuffler: &Shuffler<R, S>,
    config: &Config,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String> {
    let username = config.resolve_username(args.username.as_deref())?;

    let releases = if args.refresh {
        shuffler.refresh(username)?
    } else {
        shuffler.collection(username)?
    };

    let shown = match args.limit {
        Some(limit) => &releases[..limit.min(releases.len())],
        None => &releases[..],
    };

    output::format_collection(username, shown, releases.len(), format)
}
