//! The search query builder.
//!
//! [`Query`] accumulates one search request's parameters through chained
//! setters and serializes them on demand in either of two wire forms:
//!
//! - **flat parameters** ([`Query::to_params`] / [`Query::to_query_string`]):
//!   an ordered `key=value` list, percent-encoded, usable as a query string
//!   or form-encoded body;
//! - **structured body** ([`Query::to_json_body`]): the JSON Request API
//!   shape with top-level `query`, `filter`, `offset`, `limit`, `sort`,
//!   `fields`, `facet`, and a `params` bag for settings without a
//!   first-class slot.
//!
//! Serialization is a pure read: finalizing twice without mutation yields
//! identical output. The builder performs no cross-field validation — the
//! server is the source of truth for request validity.

use serde_json::{Map, Value};

use crate::query::facet::{Facet, FacetSpec};
use crate::query::filter::{FilterClause, JoinFilter, RangeFilter};
use crate::query::group::GroupConfig;
use crate::query::highlight::HighlightConfig;
use crate::query::more_like_this::MoreLikeThisConfig;
use crate::query::sort::{SortOrder, SortSpec};
use crate::query::terms::TermsConfig;

/// The main query when none is given: match all documents.
pub const MATCH_ALL: &str = "*:*";

/// A search request under construction.
///
/// All setters take and return the builder by value to support chaining.
/// A builder is a plain single-owner value: it does no I/O, holds no locks,
/// and concurrent mutation of one instance from several callers is a caller
/// bug, not something the builder guards against.
///
/// # Examples
///
/// ```
/// use solrkit::query::{Query, SortOrder};
///
/// let query = Query::new()
///     .q("name:Megumin")
///     .sort("rate", SortOrder::Desc)
///     .rows(10);
/// let body = query.to_json_body();
/// assert_eq!(body["query"], "name:Megumin");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    q: Option<String>,
    def_type: Option<String>,
    start: Option<u64>,
    rows: Option<u64>,
    sort: SortSpec,
    fields: Vec<String>,
    filters: Vec<String>,
    facets: FacetSpec,
    highlight: Option<HighlightConfig>,
    more_like_this: Option<MoreLikeThisConfig>,
    group: Option<GroupConfig>,
    terms: Option<TermsConfig>,
    query_fields: Option<String>,
    phrase_fields: Option<String>,
    boost_functions: Option<String>,
    boost_query: Option<String>,
    tie: Option<f64>,
    min_match: Option<String>,
    query_slop: Option<u64>,
    phrase_slop: Option<u64>,
    debug: bool,
    time_allowed: Option<u64>,
    extra: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query. Without further calls it matches all
    /// documents.
    pub fn new() -> Self {
        Query::default()
    }

    /// Set the main query string. Not auto-escaped; see
    /// [`crate::escape::escape`] for interpolating untrusted text.
    pub fn q<S: Into<String>>(mut self, q: S) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Select a named query parser (`defType`).
    pub fn def_type<S: Into<String>>(mut self, parser: S) -> Self {
        self.def_type = Some(parser.into());
        self
    }

    /// Select the dismax relevance parser.
    pub fn dismax(self) -> Self {
        self.def_type("dismax")
    }

    /// Select the extended dismax relevance parser.
    pub fn edismax(self) -> Self {
        self.def_type("edismax")
    }

    /// Result offset (`start`).
    pub fn start(mut self, start: u64) -> Self {
        self.start = Some(start);
        self
    }

    /// Result limit (`rows`). Zero is legitimate: it returns no documents
    /// and only aggregate results, the usual shape for facet-only requests.
    pub fn rows(mut self, rows: u64) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Append a sort field. Order across calls is preserved.
    pub fn sort<S: Into<String>>(mut self, field: S, order: SortOrder) -> Self {
        self.sort.push(field, order);
        self
    }

    /// Add one response field.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add several response fields.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add one filter clause. Each clause becomes an independent `fq`
    /// entry, AND-combined with all others by the server.
    pub fn filter(mut self, clause: FilterClause) -> Self {
        self.filters.push(clause.to_fq());
        self
    }

    /// Add several filter clauses at once.
    pub fn filters<I>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = FilterClause>,
    {
        self.filters.extend(clauses.into_iter().map(|c| c.to_fq()));
        self
    }

    /// Add one range filter as its own clause.
    pub fn range_filter(mut self, range: RangeFilter) -> Self {
        self.filters.push(range.to_fq());
        self
    }

    /// Add several range filters AND-joined into one clause.
    pub fn range_filters<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = RangeFilter>,
    {
        let joined = ranges
            .into_iter()
            .map(|r| r.to_fq())
            .collect::<Vec<_>>()
            .join(" AND ");
        if !joined.is_empty() {
            self.filters.push(joined);
        }
        self
    }

    /// Add a cross-core join filter clause.
    pub fn join_filter(mut self, join: JoinFilter) -> Self {
        self.filters.push(join.to_fq());
        self
    }

    /// Add a named facet to the facet tree.
    pub fn facet<S: Into<String>>(mut self, name: S, facet: Facet) -> Self {
        self.facets = self.facets.insert(name, facet);
        self
    }

    /// Replace the facet tree with a full specification.
    pub fn facets(mut self, facets: FacetSpec) -> Self {
        self.facets = facets;
        self
    }

    /// Enable highlighting with the given configuration.
    pub fn highlight(mut self, config: HighlightConfig) -> Self {
        self.highlight = Some(config);
        self
    }

    /// Enable more-like-this with the given configuration.
    pub fn more_like_this(mut self, config: MoreLikeThisConfig) -> Self {
        self.more_like_this = Some(config);
        self
    }

    /// Enable result grouping with the given configuration.
    pub fn group(mut self, config: GroupConfig) -> Self {
        self.group = Some(config);
        self
    }

    /// Enable the terms component with the given configuration.
    pub fn terms(mut self, config: TermsConfig) -> Self {
        self.terms = Some(config);
        self
    }

    /// Query fields with boosts (`qf`), for the dismax parsers.
    pub fn query_fields_boost<S: Into<String>>(mut self, qf: S) -> Self {
        self.query_fields = Some(qf.into());
        self
    }

    /// Phrase fields with boosts (`pf`).
    pub fn phrase_fields<S: Into<String>>(mut self, pf: S) -> Self {
        self.phrase_fields = Some(pf.into());
        self
    }

    /// Boost functions (`bf`).
    pub fn boost_functions<S: Into<String>>(mut self, bf: S) -> Self {
        self.boost_functions = Some(bf.into());
        self
    }

    /// Boost query (`bq`).
    pub fn boost_query<S: Into<String>>(mut self, bq: S) -> Self {
        self.boost_query = Some(bq.into());
        self
    }

    /// Tiebreaker between matching clauses (`tie`).
    pub fn tie(mut self, tie: f64) -> Self {
        self.tie = Some(tie);
        self
    }

    /// Minimum-match specification (`mm`).
    pub fn min_match<S: Into<String>>(mut self, mm: S) -> Self {
        self.min_match = Some(mm.into());
        self
    }

    /// Query phrase slop (`qs`).
    pub fn query_slop(mut self, slop: u64) -> Self {
        self.query_slop = Some(slop);
        self
    }

    /// Phrase slop (`ps`).
    pub fn phrase_slop(mut self, slop: u64) -> Self {
        self.phrase_slop = Some(slop);
        self
    }

    /// Enable debug output in the response.
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Server-side time budget in milliseconds (`timeAllowed`).
    pub fn time_allowed(mut self, millis: u64) -> Self {
        self.time_allowed = Some(millis);
        self
    }

    /// Add an arbitrary named parameter, the escape hatch for server
    /// options not otherwise modeled.
    pub fn param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Settings without a first-class slot in the structured body: parser
    /// selection, dismax knobs, debug, time budget, component params, and
    /// the caller's extra params.
    fn auxiliary_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(parser) = &self.def_type {
            params.push(("defType".to_string(), parser.clone()));
        }
        if let Some(qf) = &self.query_fields {
            params.push(("qf".to_string(), qf.clone()));
        }
        if let Some(pf) = &self.phrase_fields {
            params.push(("pf".to_string(), pf.clone()));
        }
        if let Some(mm) = &self.min_match {
            params.push(("mm".to_string(), mm.clone()));
        }
        if let Some(tie) = self.tie {
            params.push(("tie".to_string(), tie.to_string()));
        }
        if let Some(bq) = &self.boost_query {
            params.push(("bq".to_string(), bq.clone()));
        }
        if let Some(bf) = &self.boost_functions {
            params.push(("bf".to_string(), bf.clone()));
        }
        if let Some(slop) = self.query_slop {
            params.push(("qs".to_string(), slop.to_string()));
        }
        if let Some(slop) = self.phrase_slop {
            params.push(("ps".to_string(), slop.to_string()));
        }
        if self.debug {
            params.push(("debugQuery".to_string(), "true".to_string()));
        }
        if let Some(millis) = self.time_allowed {
            params.push(("timeAllowed".to_string(), millis.to_string()));
        }
        if let Some(highlight) = &self.highlight {
            highlight.write_params(&mut params);
        }
        if let Some(group) = &self.group {
            group.write_params(&mut params);
        }
        if let Some(mlt) = &self.more_like_this {
            mlt.write_params(&mut params);
        }
        if let Some(terms) = &self.terms {
            terms.write_params(&mut params);
        }
        params.extend(self.extra.iter().cloned());
        params
    }

    /// Finalize as an ordered flat parameter list.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        params.push((
            "q".to_string(),
            self.q.clone().unwrap_or_else(|| MATCH_ALL.to_string()),
        ));
        if let Some(start) = self.start {
            params.push(("start".to_string(), start.to_string()));
        }
        if let Some(rows) = self.rows {
            params.push(("rows".to_string(), rows.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort".to_string(), self.sort.to_param()));
        }
        if !self.fields.is_empty() {
            params.push(("fl".to_string(), self.fields.join(",")));
        }
        for fq in &self.filters {
            params.push(("fq".to_string(), fq.clone()));
        }
        params.extend(self.auxiliary_params());
        if !self.facets.is_empty() {
            // The facet tree travels as one json.facet parameter so nesting
            // survives flat mode.
            params.push(("json.facet".to_string(), self.facets.to_json().to_string()));
        }
        params
    }

    /// Finalize as a percent-encoded `&`-joined query string.
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Finalize as a structured JSON Request API body.
    ///
    /// An empty `params` bag is omitted entirely.
    pub fn to_json_body(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            "query".to_string(),
            Value::String(self.q.clone().unwrap_or_else(|| MATCH_ALL.to_string())),
        );
        if !self.filters.is_empty() {
            body.insert(
                "filter".to_string(),
                Value::Array(self.filters.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(start) = self.start {
            body.insert("offset".to_string(), Value::from(start));
        }
        if let Some(rows) = self.rows {
            body.insert("limit".to_string(), Value::from(rows));
        }
        if !self.sort.is_empty() {
            body.insert("sort".to_string(), Value::String(self.sort.to_param()));
        }
        if !self.fields.is_empty() {
            body.insert("fields".to_string(), Value::String(self.fields.join(",")));
        }
        if !self.facets.is_empty() {
            body.insert("facet".to_string(), self.facets.to_json());
        }
        let aux = self.auxiliary_params();
        if !aux.is_empty() {
            let mut params = Map::new();
            for (key, value) in aux {
                params.insert(key, Value::String(value));
            }
            body.insert("params".to_string(), Value::Object(params));
        }
        Value::Object(body)
    }
}
