//! The HTTP dispatch boundary.

#[allow(clippy::module_inception)]
pub mod client;
pub mod config;

pub use self::client::SolrClient;
pub use self::config::SolrConfig;
