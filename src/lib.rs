//! # solrkit
//!
//! An asynchronous Apache Solr client library for Rust.
//!
//! ## Features
//!
//! - Fluent search query builder with flat-parameter and JSON Request API
//!   serialization
//! - Recursive JSON facet trees with domains and tag exclusion
//! - Collections API administration commands
//! - Document add/delete/commit, atomic updates, and real-time get
//! - Lucene special-character escaping and recursive date normalization
//!
//! ## Example
//!
//! ```no_run
//! use solrkit::client::{SolrClient, SolrConfig};
//! use solrkit::query::{Query, SortOrder};
//!
//! # async fn run() -> solrkit::error::Result<()> {
//! let client = SolrClient::new(SolrConfig::new("127.0.0.1", 8983, "films"))?;
//! let response = client
//!     .search(&Query::new().q("genre:fantasy").sort("rate", SortOrder::Desc).rows(10))
//!     .await?;
//! println!("{} matches", response.response.unwrap().num_found);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod client;
pub mod error;
pub mod escape;
pub mod query;
pub mod response;
pub mod value;

pub mod prelude {
    //! Convenience re-exports of the most commonly used types.
    pub use crate::admin::CollectionAdmin;
    pub use crate::client::{SolrClient, SolrConfig};
    pub use crate::error::{Result, SolrError};
    pub use crate::escape::escape;
    pub use crate::query::{Facet, FacetSpec, FilterClause, Query, SortOrder};
    pub use crate::value::SolrValue;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
