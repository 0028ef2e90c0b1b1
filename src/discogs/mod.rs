mod client;
pub mod types;

pub use client::{DiscogsClient, DEFAULT_BASE_URL};
pub use types::*;
