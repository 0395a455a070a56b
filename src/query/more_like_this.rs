//! More-like-this configuration.

/// Configuration for retrieving documents similar to each search hit.
///
/// Only fields the caller supplies are serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoreLikeThisConfig {
    fields: Vec<String>,
    count: Option<u64>,
    min_term_freq: Option<u64>,
    min_doc_freq: Option<u64>,
    min_word_length: Option<u64>,
    max_word_length: Option<u64>,
    max_query_terms: Option<u64>,
    max_tokens: Option<u64>,
    boost: Option<bool>,
    query_fields: Option<String>,
}

impl MoreLikeThisConfig {
    /// Create a more-like-this configuration with defaults.
    pub fn new() -> Self {
        MoreLikeThisConfig::default()
    }

    /// Field to derive similarity from. May be called repeatedly.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Number of similar documents per hit.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Minimum term frequency below which terms are ignored.
    pub fn min_term_freq(mut self, freq: u64) -> Self {
        self.min_term_freq = Some(freq);
        self
    }

    /// Minimum document frequency below which terms are ignored.
    pub fn min_doc_freq(mut self, freq: u64) -> Self {
        self.min_doc_freq = Some(freq);
        self
    }

    /// Minimum word length below which words are ignored.
    pub fn min_word_length(mut self, length: u64) -> Self {
        self.min_word_length = Some(length);
        self
    }

    /// Maximum word length above which words are ignored.
    pub fn max_word_length(mut self, length: u64) -> Self {
        self.max_word_length = Some(length);
        self
    }

    /// Maximum number of query terms included in a generated query.
    pub fn max_query_terms(mut self, terms: u64) -> Self {
        self.max_query_terms = Some(terms);
        self
    }

    /// Maximum number of tokens parsed per unstored field.
    pub fn max_tokens(mut self, tokens: u64) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Boost the query by interesting-term relevance.
    pub fn boost(mut self, boost: bool) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Query fields with boosts for the generated query.
    pub fn query_fields<S: Into<String>>(mut self, qf: S) -> Self {
        self.query_fields = Some(qf.into());
        self
    }

    /// Append this configuration's flat parameters.
    pub fn write_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("mlt".to_string(), "true".to_string()));
        if !self.fields.is_empty() {
            params.push(("mlt.fl".to_string(), self.fields.join(",")));
        }
        if let Some(count) = self.count {
            params.push(("mlt.count".to_string(), count.to_string()));
        }
        if let Some(freq) = self.min_term_freq {
            params.push(("mlt.mintf".to_string(), freq.to_string()));
        }
        if let Some(freq) = self.min_doc_freq {
            params.push(("mlt.mindf".to_string(), freq.to_string()));
        }
        if let Some(length) = self.min_word_length {
            params.push(("mlt.minwl".to_string(), length.to_string()));
        }
        if let Some(length) = self.max_word_length {
            params.push(("mlt.maxwl".to_string(), length.to_string()));
        }
        if let Some(terms) = self.max_query_terms {
            params.push(("mlt.maxqt".to_string(), terms.to_string()));
        }
        if let Some(tokens) = self.max_tokens {
            params.push(("mlt.maxntp".to_string(), tokens.to_string()));
        }
        if let Some(boost) = self.boost {
            params.push(("mlt.boost".to_string(), boost.to_string()));
        }
        if let Some(qf) = &self.query_fields {
            params.push(("mlt.qf".to_string(), qf.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlt_params() {
        let mut params = Vec::new();
        MoreLikeThisConfig::new()
            .field("title")
            .field("body")
            .count(5)
            .min_term_freq(2)
            .write_params(&mut params);
        assert!(params.contains(&("mlt".to_string(), "true".to_string())));
        assert!(params.contains(&("mlt.fl".to_string(), "title,body".to_string())));
        assert!(params.contains(&("mlt.count".to_string(), "5".to_string())));
        assert!(params.contains(&("mlt.mintf".to_string(), "2".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "mlt.boost"));
    }
}
