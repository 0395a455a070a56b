//! Highlighting configuration.

/// Configuration for search-result highlighting.
///
/// Only fields the caller supplies are serialized. When highlighting is
/// enabled and no markers are given, the pre/post markers default to the
/// `<em>`/`</em>` emphasis pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightConfig {
    q: Option<String>,
    fields: Vec<String>,
    snippets: Option<u64>,
    fragsize: Option<u64>,
    simple_pre: Option<String>,
    simple_post: Option<String>,
    require_field_match: Option<bool>,
    use_phrase_highlighter: Option<bool>,
    highlight_multi_term: Option<bool>,
    max_analyzed_chars: Option<u64>,
    merge_contiguous: Option<bool>,
    alternate_field: Option<String>,
}

impl HighlightConfig {
    /// Create a highlighting configuration with defaults.
    pub fn new() -> Self {
        HighlightConfig::default()
    }

    /// Overriding query used for highlighting.
    pub fn q<S: Into<String>>(mut self, q: S) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Field to generate highlighted snippets for.
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Maximum number of snippets per field.
    pub fn snippets(mut self, snippets: u64) -> Self {
        self.snippets = Some(snippets);
        self
    }

    /// Snippet fragment size in characters.
    pub fn fragsize(mut self, fragsize: u64) -> Self {
        self.fragsize = Some(fragsize);
        self
    }

    /// Marker inserted before each highlighted term.
    pub fn simple_pre<S: Into<String>>(mut self, marker: S) -> Self {
        self.simple_pre = Some(marker.into());
        self
    }

    /// Marker inserted after each highlighted term.
    pub fn simple_post<S: Into<String>>(mut self, marker: S) -> Self {
        self.simple_post = Some(marker.into());
        self
    }

    /// Only highlight fields the query matched.
    pub fn require_field_match(mut self, required: bool) -> Self {
        self.require_field_match = Some(required);
        self
    }

    /// Highlight phrase terms only when the full phrase matches.
    pub fn use_phrase_highlighter(mut self, enabled: bool) -> Self {
        self.use_phrase_highlighter = Some(enabled);
        self
    }

    /// Highlight wildcard/fuzzy/range matches as well.
    pub fn highlight_multi_term(mut self, enabled: bool) -> Self {
        self.highlight_multi_term = Some(enabled);
        self
    }

    /// Maximum number of characters analyzed per field.
    pub fn max_analyzed_chars(mut self, chars: u64) -> Self {
        self.max_analyzed_chars = Some(chars);
        self
    }

    /// Merge contiguous fragments into one.
    pub fn merge_contiguous(mut self, enabled: bool) -> Self {
        self.merge_contiguous = Some(enabled);
        self
    }

    /// Field to show when no snippet could be generated.
    pub fn alternate_field<S: Into<String>>(mut self, field: S) -> Self {
        self.alternate_field = Some(field.into());
        self
    }

    /// Append this configuration's flat parameters.
    pub fn write_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("hl".to_string(), "true".to_string()));
        if let Some(q) = &self.q {
            params.push(("hl.q".to_string(), q.clone()));
        }
        if !self.fields.is_empty() {
            params.push(("hl.fl".to_string(), self.fields.join(",")));
        }
        if let Some(snippets) = self.snippets {
            params.push(("hl.snippets".to_string(), snippets.to_string()));
        }
        if let Some(fragsize) = self.fragsize {
            params.push(("hl.fragsize".to_string(), fragsize.to_string()));
        }
        let pre = self.simple_pre.clone().unwrap_or_else(|| "<em>".to_string());
        let post = self.simple_post.clone().unwrap_or_else(|| "</em>".to_string());
        params.push(("hl.simple.pre".to_string(), pre));
        params.push(("hl.simple.post".to_string(), post));
        if let Some(required) = self.require_field_match {
            params.push(("hl.requireFieldMatch".to_string(), required.to_string()));
        }
        if let Some(enabled) = self.use_phrase_highlighter {
            params.push(("hl.usePhraseHighlighter".to_string(), enabled.to_string()));
        }
        if let Some(enabled) = self.highlight_multi_term {
            params.push(("hl.highlightMultiTerm".to_string(), enabled.to_string()));
        }
        if let Some(chars) = self.max_analyzed_chars {
            params.push(("hl.maxAnalyzedChars".to_string(), chars.to_string()));
        }
        if let Some(enabled) = self.merge_contiguous {
            params.push(("hl.mergeContiguous".to_string(), enabled.to_string()));
        }
        if let Some(field) = &self.alternate_field {
            params.push(("hl.alternateField".to_string(), field.clone()));
        }
    }
}
