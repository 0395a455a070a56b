//! Sort specification for search requests.

use std::fmt;

/// Sort direction for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// The wire token for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of field/direction pairs.
///
/// Order is preserved exactly as given by the caller; it serializes to a
/// comma-joined `field direction` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    entries: Vec<(String, SortOrder)>,
}

impl SortSpec {
    /// Create an empty sort specification.
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// Append a field/direction pair.
    pub fn push<S: Into<String>>(&mut self, field: S, order: SortOrder) {
        self.entries.push((field.into(), order));
    }

    /// Whether no sort fields have been given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the `field direction` comma-joined wire form.
    pub fn to_param(&self) -> String {
        self.entries
            .iter()
            .map(|(field, order)| format!("{field} {order}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_tokens() {
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn test_sort_spec_preserves_order() {
        let mut sort = SortSpec::new();
        sort.push("rate", SortOrder::Desc);
        sort.push("age", SortOrder::Asc);
        assert_eq!(sort.to_param(), "rate desc,age asc");
    }

    #[test]
    fn test_empty_sort_spec() {
        let sort = SortSpec::new();
        assert!(sort.is_empty());
        assert_eq!(sort.to_param(), "");
    }
}
