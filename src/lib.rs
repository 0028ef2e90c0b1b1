//! Pick a random record from a Discogs collection.
//!
//! The library side is UI-free: [`shuffle::Shuffler`] combines a
//! [`collection::RemoteSource`] (normally [`discogs::DiscogsClient`]) with a
//! [`cache::Storage`] (normally [`cache::FileStorage`]) and hands back plain
//! [`collection::CollectionItem`]s.

pub mod cache;
pub mod cli;
pub mod collection;
pub mod config;
pub mod discogs;
pub mod error;
pub mod output;
pub mod shuffle;
