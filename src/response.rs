//! Typed wire responses.
//!
//! Response documents stay untyped `serde_json::Value` — the document schema
//! is the caller's business. Unknown response fields are tolerated
//! everywhere so that newer servers do not break parsing.

use serde::Deserialize;
use serde_json::Value;

/// The `responseHeader` block present on every Solr response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseHeader {
    /// Zero on success.
    #[serde(default)]
    pub status: i32,
    /// Server-side processing time in milliseconds.
    #[serde(rename = "QTime", default)]
    pub q_time: i64,
    /// Echo of the request parameters, when the server includes it.
    #[serde(default)]
    pub params: Option<Value>,
}

/// The main document list of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocList {
    /// Total number of matching documents.
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    /// Offset of the first returned document.
    #[serde(default)]
    pub start: u64,
    /// Highest relevance score among the matches, when requested.
    #[serde(rename = "maxScore", default)]
    pub max_score: Option<f64>,
    /// The returned documents.
    #[serde(default)]
    pub docs: Vec<Value>,
}

/// A parsed search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Response header.
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    /// The document list. Absent for some component-only requests.
    #[serde(default)]
    pub response: Option<DocList>,
    /// JSON Facet API results.
    #[serde(default)]
    pub facets: Option<Value>,
    /// Highlighting snippets by document key.
    #[serde(default)]
    pub highlighting: Option<Value>,
    /// Grouped results.
    #[serde(default)]
    pub grouped: Option<Value>,
    /// Terms component results.
    #[serde(default)]
    pub terms: Option<Value>,
    /// More-like-this results by document key.
    #[serde(rename = "moreLikeThis", default)]
    pub more_like_this: Option<Value>,
    /// Debug output, when requested.
    #[serde(default)]
    pub debug: Option<Value>,
}

/// A parsed update (add/delete/commit) response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResponse {
    /// Response header.
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
}

/// A parsed administration response. The payload shape varies per action,
/// so everything outside the header stays untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminResponse {
    /// Response header.
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    /// Action-specific payload keys (e.g. `collections`, `cluster`,
    /// `success`).
    #[serde(flatten)]
    pub body: serde_json::Map<String, Value>,
}

/// A parsed ping response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PingResponse {
    /// Response header.
    #[serde(rename = "responseHeader", default)]
    pub header: ResponseHeader,
    /// `OK` when the core is healthy.
    #[serde(default)]
    pub status: String,
}

/// The structured error block the server attaches to failed requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorInfo {
    /// Server-supplied numeric error code.
    #[serde(default)]
    pub code: i64,
    /// Human-readable error message.
    #[serde(default)]
    pub msg: String,
    /// Alternating key/value metadata entries (e.g. error class names).
    #[serde(default)]
    pub metadata: Vec<String>,
}

/// A full error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// The structured error block.
    pub error: ErrorInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_search_response() {
        let raw = json!({
            "responseHeader": {"status": 0, "QTime": 3},
            "response": {
                "numFound": 2,
                "start": 0,
                "docs": [{"id": "1", "name": "Megumin"}, {"id": "2"}]
            },
            "facets": {"count": 2}
        });
        let parsed: SearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.header.status, 0);
        assert_eq!(parsed.header.q_time, 3);
        let docs = parsed.response.unwrap();
        assert_eq!(docs.num_found, 2);
        assert_eq!(docs.docs[0]["name"], "Megumin");
        assert!(parsed.facets.is_some());
        assert!(parsed.highlighting.is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let raw = json!({
            "responseHeader": {"status": 400, "QTime": 1},
            "error": {
                "metadata": ["error-class", "org.apache.solr.common.SolrException"],
                "msg": "undefined field rate",
                "code": 400
            }
        });
        let parsed: ErrorBody = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.error.code, 400);
        assert_eq!(parsed.error.msg, "undefined field rate");
        assert_eq!(parsed.error.metadata.len(), 2);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let raw = json!({
            "responseHeader": {"status": 0, "QTime": 1, "zkConnected": true},
            "response": {"numFound": 0, "start": 0, "docs": []},
            "nextCursorMark": "*"
        });
        let parsed: SearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.response.unwrap().num_found, 0);
    }

    #[test]
    fn test_admin_response_body_flattened() {
        let raw = json!({
            "responseHeader": {"status": 0, "QTime": 10},
            "collections": ["coll1", "coll2"]
        });
        let parsed: AdminResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.body["collections"], json!(["coll1", "coll2"]));
    }
}
