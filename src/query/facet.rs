//! Facet tree construction for the JSON Facet API.
//!
//! A [`FacetSpec`] maps caller-chosen facet names to facet definitions.
//! Definitions nest without depth limit: each facet may carry a child
//! [`FacetSpec`], and the serialized tree mirrors the caller's structure
//! exactly — child facets appear under their parent's `facet` key, never
//! flattened to the top level. Keys that were not supplied are omitted from
//! the output, so e.g. a facet with no domain serializes with no `domain`
//! key at all.

use serde_json::{Map, Value};

use crate::value::SolrValue;

/// Sort order for facet buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSort {
    /// Highest count first (the server default).
    CountDesc,
    /// Lowest count first.
    CountAsc,
    /// Bucket value ascending.
    IndexAsc,
    /// Bucket value descending.
    IndexDesc,
}

impl FacetSort {
    /// The wire token for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetSort::CountDesc => "count desc",
            FacetSort::CountAsc => "count asc",
            FacetSort::IndexAsc => "index asc",
            FacetSort::IndexDesc => "index desc",
        }
    }
}

/// Boundary-inclusion policy for range facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeInclude {
    /// Include the lower bound of each range.
    Lower,
    /// Include the upper bound of each range.
    Upper,
    /// Include the edge bounds of the first and last ranges.
    Edge,
    /// Include bounds of the `before`/`after` ranges.
    Outer,
    /// All of the above.
    All,
}

impl RangeInclude {
    /// The wire token for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeInclude::Lower => "lower",
            RangeInclude::Upper => "upper",
            RangeInclude::Edge => "edge",
            RangeInclude::Outer => "outer",
            RangeInclude::All => "all",
        }
    }
}

/// A filter domain for a facet, used for tag-based exclusion in multi-select
/// faceting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetDomain {
    exclude_tags: Vec<String>,
    filter: Option<String>,
}

impl FacetDomain {
    /// Create an empty domain.
    pub fn new() -> Self {
        FacetDomain::default()
    }

    /// Exclude filters tagged with `tag` when computing this facet.
    pub fn exclude_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.exclude_tags.push(tag.into());
        self
    }

    /// Restrict the domain with an additional filter query.
    pub fn filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        if !self.exclude_tags.is_empty() {
            map.insert(
                "excludeTags".to_string(),
                Value::Array(self.exclude_tags.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(filter) = &self.filter {
            map.insert("filter".to_string(), Value::String(filter.clone()));
        }
        Value::Object(map)
    }
}

/// An explicit sub-range for a range facet.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetRange {
    from: Option<SolrValue>,
    to: Option<SolrValue>,
    inclusive_from: bool,
    inclusive_to: bool,
}

impl FacetRange {
    /// Create a sub-range with inclusive start and exclusive end, the
    /// server's default boundary policy.
    pub fn new(from: Option<SolrValue>, to: Option<SolrValue>) -> Self {
        FacetRange {
            from,
            to,
            inclusive_from: true,
            inclusive_to: false,
        }
    }

    /// Set whether the lower bound is inclusive.
    pub fn inclusive_from(mut self, inclusive: bool) -> Self {
        self.inclusive_from = inclusive;
        self
    }

    /// Set whether the upper bound is inclusive.
    pub fn inclusive_to(mut self, inclusive: bool) -> Self {
        self.inclusive_to = inclusive;
        self
    }

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        if let Some(from) = &self.from {
            map.insert("from".to_string(), from.to_json());
        }
        if let Some(to) = &self.to {
            map.insert("to".to_string(), to.to_json());
        }
        map.insert("inclusive_from".to_string(), Value::Bool(self.inclusive_from));
        map.insert("inclusive_to".to_string(), Value::Bool(self.inclusive_to));
        Value::Object(map)
    }
}

/// A terms facet: bucket counts per distinct value of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsFacet {
    field: String,
    limit: Option<u64>,
    offset: Option<u64>,
    min_count: Option<u64>,
    sort: Option<FacetSort>,
    prefix: Option<String>,
    missing: Option<bool>,
    facet: FacetSpec,
    domain: Option<FacetDomain>,
}

impl TermsFacet {
    /// Create a terms facet over `field`.
    pub fn new<S: Into<String>>(field: S) -> Self {
        TermsFacet {
            field: field.into(),
            limit: None,
            offset: None,
            min_count: None,
            sort: None,
            prefix: None,
            missing: None,
            facet: FacetSpec::new(),
            domain: None,
        }
    }

    /// Maximum number of buckets to return.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of buckets to skip.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Minimum count for a bucket to be returned.
    pub fn min_count(mut self, min_count: u64) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Bucket sort order.
    pub fn sort(mut self, sort: FacetSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Only produce buckets for values with this prefix.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Include a bucket for documents missing the field.
    pub fn missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Add a nested sub-facet.
    pub fn sub_facet<S: Into<String>>(mut self, name: S, facet: Facet) -> Self {
        self.facet = self.facet.insert(name, facet);
        self
    }

    /// Set the facet domain.
    pub fn domain(mut self, domain: FacetDomain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// A range facet: bucket counts over intervals of a numeric or date field.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFacet {
    field: String,
    start: Option<SolrValue>,
    end: Option<SolrValue>,
    gap: Option<SolrValue>,
    include: Option<RangeInclude>,
    ranges: Vec<FacetRange>,
    facet: FacetSpec,
    domain: Option<FacetDomain>,
}

impl RangeFacet {
    /// Create a range facet over `field`.
    pub fn new<S: Into<String>>(field: S) -> Self {
        RangeFacet {
            field: field.into(),
            start: None,
            end: None,
            gap: None,
            include: None,
            ranges: Vec::new(),
            facet: FacetSpec::new(),
            domain: None,
        }
    }

    /// Lower bound of the faceted interval. Dates normalize to the
    /// canonical timestamp form.
    pub fn start<V: Into<SolrValue>>(mut self, start: V) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Upper bound of the faceted interval.
    pub fn end<V: Into<SolrValue>>(mut self, end: V) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Bucket width. Accepts numbers or date-math strings like `+1MONTH`.
    pub fn gap<V: Into<SolrValue>>(mut self, gap: V) -> Self {
        self.gap = Some(gap.into());
        self
    }

    /// Boundary-inclusion policy.
    pub fn include(mut self, include: RangeInclude) -> Self {
        self.include = Some(include);
        self
    }

    /// Add an explicit arbitrary sub-range. When any are present they take
    /// the place of start/end/gap bucketing on the wire.
    pub fn range(mut self, range: FacetRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Add a nested sub-facet.
    pub fn sub_facet<S: Into<String>>(mut self, name: S, facet: Facet) -> Self {
        self.facet = self.facet.insert(name, facet);
        self
    }

    /// Set the facet domain.
    pub fn domain(mut self, domain: FacetDomain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// A query facet: a single bucket counting documents matching a sub-query.
///
/// Multiple named sub-queries are expressed as named child query facets
/// nested under a parent via [`QueryFacet::sub_facet`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFacet {
    q: String,
    facet: FacetSpec,
    domain: Option<FacetDomain>,
}

impl QueryFacet {
    /// Create a query facet with sub-query `q`.
    pub fn new<S: Into<String>>(q: S) -> Self {
        QueryFacet {
            q: q.into(),
            facet: FacetSpec::new(),
            domain: None,
        }
    }

    /// Add a nested sub-facet.
    pub fn sub_facet<S: Into<String>>(mut self, name: S, facet: Facet) -> Self {
        self.facet = self.facet.insert(name, facet);
        self
    }

    /// Set the facet domain.
    pub fn domain(mut self, domain: FacetDomain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// A facet definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    /// Bucket counts per distinct field value.
    Terms(TermsFacet),
    /// Bucket counts over field value intervals.
    Range(RangeFacet),
    /// A single bucket for a sub-query.
    Query(QueryFacet),
}

impl Facet {
    fn to_json(&self) -> Value {
        let mut map = Map::new();
        match self {
            Facet::Terms(t) => {
                map.insert("type".to_string(), Value::String("terms".to_string()));
                map.insert("field".to_string(), Value::String(t.field.clone()));
                if let Some(limit) = t.limit {
                    map.insert("limit".to_string(), Value::from(limit));
                }
                if let Some(offset) = t.offset {
                    map.insert("offset".to_string(), Value::from(offset));
                }
                if let Some(min_count) = t.min_count {
                    map.insert("mincount".to_string(), Value::from(min_count));
                }
                if let Some(sort) = t.sort {
                    map.insert("sort".to_string(), Value::String(sort.as_str().to_string()));
                }
                if let Some(prefix) = &t.prefix {
                    map.insert("prefix".to_string(), Value::String(prefix.clone()));
                }
                if let Some(missing) = t.missing {
                    map.insert("missing".to_string(), Value::Bool(missing));
                }
                append_common(&mut map, &t.facet, &t.domain);
            }
            Facet::Range(r) => {
                map.insert("type".to_string(), Value::String("range".to_string()));
                map.insert("field".to_string(), Value::String(r.field.clone()));
                if r.ranges.is_empty() {
                    if let Some(start) = &r.start {
                        map.insert("start".to_string(), start.to_json());
                    }
                    if let Some(end) = &r.end {
                        map.insert("end".to_string(), end.to_json());
                    }
                    if let Some(gap) = &r.gap {
                        map.insert("gap".to_string(), gap.to_json());
                    }
                    if let Some(include) = r.include {
                        map.insert(
                            "include".to_string(),
                            Value::String(include.as_str().to_string()),
                        );
                    }
                } else {
                    map.insert(
                        "ranges".to_string(),
                        Value::Array(r.ranges.iter().map(FacetRange::to_json).collect()),
                    );
                }
                append_common(&mut map, &r.facet, &r.domain);
            }
            Facet::Query(q) => {
                map.insert("type".to_string(), Value::String("query".to_string()));
                map.insert("q".to_string(), Value::String(q.q.clone()));
                append_common(&mut map, &q.facet, &q.domain);
            }
        }
        Value::Object(map)
    }
}

fn append_common(map: &mut Map<String, Value>, facet: &FacetSpec, domain: &Option<FacetDomain>) {
    if !facet.is_empty() {
        map.insert("facet".to_string(), facet.to_json());
    }
    if let Some(domain) = domain {
        map.insert("domain".to_string(), domain.to_json());
    }
}

/// An ordered mapping from facet name to facet definition.
///
/// Names must be unique within one sibling level; inserting a duplicate name
/// replaces the earlier definition in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSpec {
    facets: Vec<(String, Facet)>,
}

impl FacetSpec {
    /// Create an empty facet specification.
    pub fn new() -> Self {
        FacetSpec::default()
    }

    /// Add a named facet, replacing any earlier facet with the same name.
    pub fn insert<S: Into<String>>(mut self, name: S, facet: Facet) -> Self {
        let name = name.into();
        match self.facets.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = facet,
            None => self.facets.push((name, facet)),
        }
        self
    }

    /// Whether no facets have been defined.
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Serialize the full tree for the JSON Facet API.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, facet) in &self.facets {
            map.insert(name.clone(), facet.to_json());
        }
        Value::Object(map)
    }
}
