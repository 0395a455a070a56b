//! Filter clause construction.
//!
//! Each filter renders to one `fq` clause. Distinct clauses are ANDed by the
//! server; multiple values for one field OR-join inside a single clause.
//! Text values are rendered verbatim — callers interpolating untrusted text
//! must escape it first with [`crate::escape::escape`]. Date values render in
//! the canonical timestamp form via [`crate::value`].

use crate::value::SolrValue;

/// Match-style annotation for a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStyle {
    /// Plain `field:value` matching.
    #[default]
    Default,
    /// Complex-phrase matching: phrase queries with embedded wildcards,
    /// requiring the `{!complexphrase}` prefix marker.
    ComplexPhrase,
}

/// A single field filter: one field, one or more values, optional match
/// style.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    field: String,
    values: Vec<SolrValue>,
    style: MatchStyle,
}

impl FilterClause {
    /// Create a filter on one field with one value.
    pub fn new<S: Into<String>, V: Into<SolrValue>>(field: S, value: V) -> Self {
        FilterClause {
            field: field.into(),
            values: vec![value.into()],
            style: MatchStyle::Default,
        }
    }

    /// Create a filter on one field with several values, OR-joined inside
    /// the clause.
    pub fn with_values<S: Into<String>>(field: S, values: Vec<SolrValue>) -> Self {
        FilterClause {
            field: field.into(),
            values,
            style: MatchStyle::Default,
        }
    }

    /// Use complex-phrase matching for this clause.
    pub fn complex_phrase(mut self) -> Self {
        self.style = MatchStyle::ComplexPhrase;
        self
    }

    /// Render this clause as an `fq` expression.
    pub fn to_fq(&self) -> String {
        let body = self
            .values
            .iter()
            .map(|value| match self.style {
                MatchStyle::Default => format!("{}:{}", self.field, value.render()),
                MatchStyle::ComplexPhrase => format!("{}:\"{}\"", self.field, value.render()),
            })
            .collect::<Vec<_>>()
            .join(" OR ");
        match self.style {
            MatchStyle::Default => body,
            MatchStyle::ComplexPhrase => format!("{{!complexphrase inOrder=true}}{body}"),
        }
    }
}

/// A range filter, rendering to the inclusive `field:[start TO end]` form.
///
/// An unspecified bound serializes to `*`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    field: String,
    start: Option<SolrValue>,
    end: Option<SolrValue>,
}

impl RangeFilter {
    /// Create a range filter over `field`.
    pub fn new<S: Into<String>>(field: S, start: Option<SolrValue>, end: Option<SolrValue>) -> Self {
        RangeFilter {
            field: field.into(),
            start,
            end,
        }
    }

    /// Render this range as an `fq` expression.
    pub fn to_fq(&self) -> String {
        let start = self.start.as_ref().map_or("*".to_string(), SolrValue::render);
        let end = self.end.as_ref().map_or("*".to_string(), SolrValue::render);
        format!("{}:[{} TO {}]", self.field, start, end)
    }
}

/// A cross-core join filter, rendering to the `{!join}` form.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinFilter {
    from: String,
    to: String,
    from_index: Option<String>,
    query: String,
}

impl JoinFilter {
    /// Create a join from `from` to `to` with an embedded `field:value`
    /// pair.
    pub fn new<S1, S2, S3, V>(from: S1, to: S2, field: S3, value: V) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        V: Into<SolrValue>,
    {
        JoinFilter {
            from: from.into(),
            to: to.into(),
            from_index: None,
            query: format!("{}:{}", field.into(), value.into().render()),
        }
    }

    /// Create a join with an embedded raw sub-query.
    pub fn with_query<S1, S2, Q>(from: S1, to: S2, query: Q) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        Q: Into<String>,
    {
        JoinFilter {
            from: from.into(),
            to: to.into(),
            from_index: None,
            query: query.into(),
        }
    }

    /// Set the source collection for a cross-collection join.
    pub fn from_index<S: Into<String>>(mut self, index: S) -> Self {
        self.from_index = Some(index.into());
        self
    }

    /// Render this join as an `fq` expression.
    pub fn to_fq(&self) -> String {
        match &self.from_index {
            Some(index) => format!(
                "{{!join from={} to={} fromIndex={}}}{}",
                self.from, self.to, index, self.query
            ),
            None => format!("{{!join from={} to={}}}{}", self.from, self.to, self.query),
        }
    }
}
