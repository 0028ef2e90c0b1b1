mod cache;
mod common;
mod config;
mod list;
mod shuffle;

pub use self::cache::cache;
pub use self::common::{build_shuffler, ClientOverrides};
pub use self::config::config;
pub use self::list::list;
pub use self::shuffle::shuffle;
