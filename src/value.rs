//! Document values and recursive date normalization.
//!
//! Solr documents carry date fields on the wire as canonical UTC timestamp
//! strings. [`SolrValue`] is a JSON-like tree with a first-class
//! [`SolrValue::Date`] variant; converting the tree to wire JSON with
//! [`SolrValue::to_json`] normalizes every date instant at any depth to its
//! canonical string form, leaving all other scalars, list shapes, and key
//! sets untouched. The conversion never mutates its input and is a no-op for
//! trees that contain no dates, so normalizing twice is equivalent to
//! normalizing once.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Number, Value};

/// Canonical wire format for date instants (Solr's ISO-8601 instant form).
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A field value in a Solr document or filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum SolrValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Date-time instant, normalized to UTC.
    Date(DateTime<Utc>),
    /// Sequence of values.
    Array(Vec<SolrValue>),
    /// Keyed mapping of values.
    Object(BTreeMap<String, SolrValue>),
}

impl SolrValue {
    /// Build a date value from a millisecond UNIX timestamp.
    ///
    /// Returns [`SolrValue::Null`] when the timestamp does not denote a
    /// representable instant, which is the null-equivalent marker dates
    /// normalize to on the wire.
    pub fn from_timestamp_millis(millis: i64) -> SolrValue {
        match Utc.timestamp_millis_opt(millis) {
            chrono::LocalResult::Single(dt) => SolrValue::Date(dt),
            _ => SolrValue::Null,
        }
    }

    /// Convert this value to wire JSON, normalizing dates recursively.
    ///
    /// Dates become canonical timestamp strings, sequences are mapped
    /// element-wise, mappings are copied key-by-key, and every other scalar
    /// passes through unchanged. Non-finite floats have no JSON
    /// representation and become null.
    pub fn to_json(&self) -> Value {
        match self {
            SolrValue::Null => Value::Null,
            SolrValue::Bool(b) => Value::Bool(*b),
            SolrValue::Int(i) => Value::Number(Number::from(*i)),
            SolrValue::Float(f) => match Number::from_f64(*f) {
                Some(n) => Value::Number(n),
                None => Value::Null,
            },
            SolrValue::Text(s) => Value::String(s.clone()),
            SolrValue::Date(dt) => Value::String(format_date(dt)),
            SolrValue::Array(items) => Value::Array(items.iter().map(SolrValue::to_json).collect()),
            SolrValue::Object(map) => {
                let mut out = serde_json::Map::new();
                for (key, value) in map {
                    out.insert(key.clone(), value.to_json());
                }
                Value::Object(out)
            }
        }
    }

    /// Render this value as it appears inside a query or filter clause.
    ///
    /// Text renders verbatim (escaping is the caller's concern, see
    /// [`crate::escape::escape`]); dates render in canonical form; scalars
    /// render with their natural textual form.
    pub fn render(&self) -> String {
        match self {
            SolrValue::Null => "null".to_string(),
            SolrValue::Bool(b) => b.to_string(),
            SolrValue::Int(i) => i.to_string(),
            SolrValue::Float(f) => f.to_string(),
            SolrValue::Text(s) => s.clone(),
            SolrValue::Date(dt) => format_date(dt),
            SolrValue::Array(items) => items
                .iter()
                .map(SolrValue::render)
                .collect::<Vec<_>>()
                .join(","),
            SolrValue::Object(_) => self.to_json().to_string(),
        }
    }

    /// Whether this value is a date instant.
    pub fn is_date(&self) -> bool {
        matches!(self, SolrValue::Date(_))
    }
}

/// Format a date instant in the canonical wire form.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

impl From<bool> for SolrValue {
    fn from(value: bool) -> Self {
        SolrValue::Bool(value)
    }
}

impl From<i32> for SolrValue {
    fn from(value: i32) -> Self {
        SolrValue::Int(value as i64)
    }
}

impl From<i64> for SolrValue {
    fn from(value: i64) -> Self {
        SolrValue::Int(value)
    }
}

impl From<u32> for SolrValue {
    fn from(value: u32) -> Self {
        SolrValue::Int(value as i64)
    }
}

impl From<f64> for SolrValue {
    fn from(value: f64) -> Self {
        SolrValue::Float(value)
    }
}

impl From<&str> for SolrValue {
    fn from(value: &str) -> Self {
        SolrValue::Text(value.to_string())
    }
}

impl From<String> for SolrValue {
    fn from(value: String) -> Self {
        SolrValue::Text(value)
    }
}

impl From<DateTime<Utc>> for SolrValue {
    fn from(value: DateTime<Utc>) -> Self {
        SolrValue::Date(value)
    }
}

impl<T: Into<SolrValue>> From<Vec<T>> for SolrValue {
    fn from(values: Vec<T>) -> Self {
        SolrValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SolrValue>> From<Option<T>> for SolrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SolrValue::Null,
        }
    }
}

impl From<Value> for SolrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SolrValue::Null,
            Value::Bool(b) => SolrValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SolrValue::Int(i)
                } else if let Some(f) = n.as_f64() {
                    SolrValue::Float(f)
                } else {
                    SolrValue::Text(n.to_string())
                }
            }
            Value::String(s) => SolrValue::Text(s),
            Value::Array(items) => {
                SolrValue::Array(items.into_iter().map(SolrValue::from).collect())
            }
            Value::Object(map) => SolrValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, SolrValue::from(v)))
                    .collect(),
            ),
        }
    }
}
