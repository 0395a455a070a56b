//! Terms component configuration.

/// Configuration for the terms component, which enumerates indexed terms
/// and their document frequencies without running a search.
///
/// Only fields the caller supplies are serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermsConfig {
    field: Option<String>,
    lower: Option<String>,
    lower_include: Option<bool>,
    upper: Option<String>,
    upper_include: Option<bool>,
    limit: Option<u64>,
    min_count: Option<u64>,
    max_count: Option<i64>,
    prefix: Option<String>,
    regex: Option<String>,
    sort: Option<String>,
    raw: Option<bool>,
}

impl TermsConfig {
    /// Create a terms configuration with defaults.
    pub fn new() -> Self {
        TermsConfig::default()
    }

    /// Field to enumerate terms from.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Term to start enumerating at.
    pub fn lower<S: Into<String>>(mut self, lower: S) -> Self {
        self.lower = Some(lower.into());
        self
    }

    /// Whether the lower term itself is included.
    pub fn lower_include(mut self, include: bool) -> Self {
        self.lower_include = Some(include);
        self
    }

    /// Term to stop enumerating at.
    pub fn upper<S: Into<String>>(mut self, upper: S) -> Self {
        self.upper = Some(upper.into());
        self
    }

    /// Whether the upper term itself is included.
    pub fn upper_include(mut self, include: bool) -> Self {
        self.upper_include = Some(include);
        self
    }

    /// Maximum number of terms to return.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Minimum document frequency for a term to be returned.
    pub fn min_count(mut self, count: u64) -> Self {
        self.min_count = Some(count);
        self
    }

    /// Maximum document frequency for a term to be returned (-1 for no
    /// limit).
    pub fn max_count(mut self, count: i64) -> Self {
        self.max_count = Some(count);
        self
    }

    /// Only return terms with this prefix.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Only return terms matching this regular expression.
    pub fn regex<S: Into<String>>(mut self, regex: S) -> Self {
        self.regex = Some(regex.into());
        self
    }

    /// Sort order, `count` or `index`.
    pub fn sort<S: Into<String>>(mut self, sort: S) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Return raw (index-internal) term representations.
    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = Some(raw);
        self
    }

    /// Append this configuration's flat parameters.
    pub fn write_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("terms".to_string(), "true".to_string()));
        if let Some(field) = &self.field {
            params.push(("terms.fl".to_string(), field.clone()));
        }
        if let Some(lower) = &self.lower {
            params.push(("terms.lower".to_string(), lower.clone()));
        }
        if let Some(include) = self.lower_include {
            params.push(("terms.lower.incl".to_string(), include.to_string()));
        }
        if let Some(upper) = &self.upper {
            params.push(("terms.upper".to_string(), upper.clone()));
        }
        if let Some(include) = self.upper_include {
            params.push(("terms.upper.incl".to_string(), include.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("terms.limit".to_string(), limit.to_string()));
        }
        if let Some(count) = self.min_count {
            params.push(("terms.mincount".to_string(), count.to_string()));
        }
        if let Some(count) = self.max_count {
            params.push(("terms.maxcount".to_string(), count.to_string()));
        }
        if let Some(prefix) = &self.prefix {
            params.push(("terms.prefix".to_string(), prefix.clone()));
        }
        if let Some(regex) = &self.regex {
            params.push(("terms.regex".to_string(), regex.clone()));
        }
        if let Some(sort) = &self.sort {
            params.push(("terms.sort".to_string(), sort.clone()));
        }
        if let Some(raw) = self.raw {
            params.push(("terms.raw".to_string(), raw.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_params() {
        let mut params = Vec::new();
        TermsConfig::new()
            .field("name")
            .prefix("Me")
            .limit(20)
            .write_params(&mut params);
        assert!(params.contains(&("terms".to_string(), "true".to_string())));
        assert!(params.contains(&("terms.fl".to_string(), "name".to_string())));
        assert!(params.contains(&("terms.prefix".to_string(), "Me".to_string())));
        assert!(params.contains(&("terms.limit".to_string(), "20".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "terms.regex"));
    }
}
