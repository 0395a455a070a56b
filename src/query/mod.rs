//! Query construction and serialization for search requests.

pub mod builder;
pub mod facet;
pub mod filter;
pub mod group;
pub mod highlight;
pub mod more_like_this;
pub mod sort;
pub mod terms;

pub use self::builder::{MATCH_ALL, Query};
pub use self::facet::{
    Facet, FacetDomain, FacetRange, FacetSort, FacetSpec, QueryFacet, RangeFacet, RangeInclude,
    TermsFacet,
};
pub use self::filter::{FilterClause, JoinFilter, MatchStyle, RangeFilter};
pub use self::group::GroupConfig;
pub use self::highlight::HighlightConfig;
pub use self::more_like_this::MoreLikeThisConfig;
pub use self::sort::{SortOrder, SortSpec};
pub use self::terms::TermsConfig;
