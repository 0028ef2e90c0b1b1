use crate::cache::Storage;
use crate::cli::args::{OutputFormat, ShuffleArgs};
use crate::collection::RemoteSource;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::shuffle::Shuffler;

/// Handle the shuffle command
pub fn shuffle<R: RemoteSource, S: Storage>(
    shuffler: &Shuffler<R, S>,
    config: &Config,
    args: &ShuffleArgs,
    format: OutputFormat,
) -> Result<String> {
    let username = config.resolve_username(args.username.as_deref())?;

    if args.refresh {
        shuffler.refresh(username)?;
    }

    let item = shuffler.shuffle(username)?;
    output::format_item(&item, format)
}
