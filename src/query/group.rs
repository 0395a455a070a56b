//! Result grouping configuration.

use crate::query::sort::{SortOrder, SortSpec};

/// Configuration for grouping search results by field or query.
///
/// Only fields the caller supplies are serialized; the builder performs no
/// cross-field validation (a group limit without a group field is passed
/// through for the server to judge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupConfig {
    fields: Vec<String>,
    queries: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    sort: SortSpec,
    format: Option<String>,
    main: Option<bool>,
    ngroups: Option<bool>,
    truncate: Option<bool>,
    facet: Option<bool>,
}

impl GroupConfig {
    /// Create a grouping configuration with defaults.
    pub fn new() -> Self {
        GroupConfig::default()
    }

    /// Group by the given field. May be called repeatedly.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Group by the given query. May be called repeatedly.
    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.queries.push(query.into());
        self
    }

    /// Maximum number of documents per group.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Initial offset inside each group.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sort documents within each group.
    pub fn sort<S: Into<String>>(mut self, field: S, order: SortOrder) -> Self {
        self.sort.push(field, order);
        self
    }

    /// Response format, `grouped` (default) or `simple`.
    pub fn format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Flatten the result of the first command into the main result list.
    pub fn main(mut self, main: bool) -> Self {
        self.main = Some(main);
        self
    }

    /// Include the number of groups that matched.
    pub fn ngroups(mut self, ngroups: bool) -> Self {
        self.ngroups = Some(ngroups);
        self
    }

    /// Compute facet counts per most relevant document of each group.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = Some(truncate);
        self
    }

    /// Group-based faceting.
    pub fn facet(mut self, facet: bool) -> Self {
        self.facet = Some(facet);
        self
    }

    /// Append this configuration's flat parameters.
    pub fn write_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("group".to_string(), "true".to_string()));
        for field in &self.fields {
            params.push(("group.field".to_string(), field.clone()));
        }
        for query in &self.queries {
            params.push(("group.query".to_string(), query.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("group.limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("group.offset".to_string(), offset.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("group.sort".to_string(), self.sort.to_param()));
        }
        if let Some(format) = &self.format {
            params.push(("group.format".to_string(), format.clone()));
        }
        if let Some(main) = self.main {
            params.push(("group.main".to_string(), main.to_string()));
        }
        if let Some(ngroups) = self.ngroups {
            params.push(("group.ngroups".to_string(), ngroups.to_string()));
        }
        if let Some(truncate) = self.truncate {
            params.push(("group.truncate".to_string(), truncate.to_string()));
        }
        if let Some(facet) = self.facet {
            params.push(("group.facet".to_string(), facet.to_string()));
        }
    }
}
