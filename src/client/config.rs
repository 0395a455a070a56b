//! Client endpoint configuration.

use std::time::Duration;

/// Where and how to reach the Solr server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolrConfig {
    /// Server host name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Target collection or core name.
    pub collection: String,
    /// Path prefix the server is mounted under.
    pub root_path: String,
    /// Use HTTPS.
    pub secure: bool,
    /// Per-request timeout, passed through to the HTTP client.
    pub timeout: Option<Duration>,
}

impl Default for SolrConfig {
    fn default() -> Self {
        SolrConfig {
            host: "127.0.0.1".to_string(),
            port: 8983,
            collection: String::new(),
            root_path: "solr".to_string(),
            secure: false,
            timeout: None,
        }
    }
}

impl SolrConfig {
    /// Create a configuration for the given host, port, and collection.
    pub fn new<H: Into<String>, C: Into<String>>(host: H, port: u16, collection: C) -> Self {
        SolrConfig {
            host: host.into(),
            port,
            collection: collection.into(),
            ..SolrConfig::default()
        }
    }

    /// Set the target collection.
    pub fn collection<S: Into<String>>(mut self, collection: S) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set the path prefix.
    pub fn root_path<S: Into<String>>(mut self, root_path: S) -> Self {
        self.root_path = root_path.into();
        self
    }

    /// Use HTTPS.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:8983/solr`.
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}:{}/{}", self.host, self.port, self.root_path)
    }

    /// URL of a path under the target collection.
    pub fn collection_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url(), self.collection, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolrConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8983/solr");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_collection_url() {
        let config = SolrConfig::new("solr.example.com", 8080, "films").secure(true);
        assert_eq!(
            config.collection_url("select"),
            "https://solr.example.com:8080/solr/films/select"
        );
    }
}
