//! The asynchronous request dispatcher.
//!
//! [`SolrClient`] is the only place that touches the network: it serializes
//! built queries and commands onto the wire, hands them to a shared
//! `reqwest` client, and parses the response into the typed structures of
//! [`crate::response`] or into a typed error. There are no retries and no
//! pooling beyond what `reqwest` itself provides; callers needing backoff
//! wrap the dispatcher.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::admin::CollectionAdmin;
use crate::client::config::SolrConfig;
use crate::error::{Result, SolrError};
use crate::query::Query;
use crate::response::{AdminResponse, ErrorBody, PingResponse, SearchResponse, UpdateResponse};
use crate::value::SolrValue;

/// An asynchronous Solr client.
///
/// Cloning is cheap and clones share the underlying HTTP connection pool;
/// independent requests may run concurrently from any number of clones.
#[derive(Debug, Clone)]
pub struct SolrClient {
    config: SolrConfig,
    http: reqwest::Client,
}

impl SolrClient {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: SolrConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(SolrClient { config, http })
    }

    /// The endpoint configuration this client was built with.
    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    /// Read a response body, shaping failures per the error contract: a
    /// structured `error` block becomes [`SolrError::Server`], any other
    /// non-success response becomes [`SolrError::Transport`] carrying just
    /// the status.
    async fn read<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }
        match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => Err(SolrError::server(
                status.as_u16(),
                body.error.code,
                body.error.msg,
                body.error.metadata,
            )),
            Err(_) => Err(SolrError::transport(status.as_u16())),
        }
    }

    async fn post_update(&self, body: &Value) -> Result<UpdateResponse> {
        let url = self.config.collection_url("update");
        debug!(%url, "dispatching update");
        let response = self.http.post(&url).json(body).send().await?;
        self.read(response).await
    }

    /// Execute a search with the structured JSON Request API body, the
    /// primary wire protocol.
    pub async fn search(&self, query: &Query) -> Result<SearchResponse> {
        let url = self.config.collection_url("select");
        let body = query.to_json_body();
        debug!(%url, "dispatching structured search");
        let response = self.http.post(&url).json(&body).send().await?;
        self.read(response).await
    }

    /// Execute a search with the legacy flat parameter list.
    pub async fn search_params(&self, query: &Query) -> Result<SearchResponse> {
        let url = format!("{}?{}", self.config.collection_url("select"), query.to_query_string());
        debug!(%url, "dispatching flat search");
        let response = self.http.get(&url).send().await?;
        self.read(response).await
    }

    /// Execute a collection administration command.
    pub async fn admin(&self, command: &CollectionAdmin) -> Result<AdminResponse> {
        let url = format!(
            "{}/admin/collections?{}",
            self.config.base_url(),
            command.to_query_string()
        );
        debug!(%url, action = %command.action(), "dispatching admin command");
        let response = self.http.get(&url).send().await?;
        self.read(response).await
    }

    /// Add documents to the index. Date fields normalize to canonical
    /// timestamp strings before they cross the wire. Changes become visible
    /// after a commit.
    pub async fn add(&self, docs: &[SolrValue]) -> Result<UpdateResponse> {
        let body = Value::Array(docs.iter().map(SolrValue::to_json).collect());
        self.post_update(&body).await
    }

    /// Add documents with a commit-within window in milliseconds.
    pub async fn add_within(&self, docs: &[SolrValue], millis: u64) -> Result<UpdateResponse> {
        let url = self.config.collection_url("update");
        let body = Value::Array(docs.iter().map(SolrValue::to_json).collect());
        debug!(%url, commit_within = millis, "dispatching update");
        let response = self
            .http
            .post(&url)
            .query(&[("commitWithin", millis.to_string())])
            .json(&body)
            .send()
            .await?;
        self.read(response).await
    }

    /// Apply atomic updates. An alias of [`SolrClient::add`]: an atomic
    /// update is an add whose documents carry modifier objects
    /// (`{"set": ...}`, `{"inc": ...}`) instead of plain field values.
    pub async fn atomic_update(&self, docs: &[SolrValue]) -> Result<UpdateResponse> {
        self.add(docs).await
    }

    /// Delete documents by unique key.
    pub async fn delete_by_id(&self, ids: &[&str]) -> Result<UpdateResponse> {
        let mut body = Map::new();
        body.insert(
            "delete".to_string(),
            Value::Array(ids.iter().map(|id| Value::String((*id).to_string())).collect()),
        );
        self.post_update(&Value::Object(body)).await
    }

    /// Delete documents matching a query.
    pub async fn delete_by_query(&self, query: &str) -> Result<UpdateResponse> {
        let mut delete = Map::new();
        delete.insert("query".to_string(), Value::String(query.to_string()));
        let mut body = Map::new();
        body.insert("delete".to_string(), Value::Object(delete));
        self.post_update(&Value::Object(body)).await
    }

    /// Hard commit: flush pending changes and open a new searcher.
    pub async fn commit(&self) -> Result<UpdateResponse> {
        let mut body = Map::new();
        body.insert("commit".to_string(), Value::Object(Map::new()));
        self.post_update(&Value::Object(body)).await
    }

    /// Soft commit: make pending changes visible without flushing.
    pub async fn soft_commit(&self) -> Result<UpdateResponse> {
        let mut commit = Map::new();
        commit.insert("softCommit".to_string(), Value::Bool(true));
        let mut body = Map::new();
        body.insert("commit".to_string(), Value::Object(commit));
        self.post_update(&Value::Object(body)).await
    }

    /// Roll back all changes since the last commit.
    pub async fn rollback(&self) -> Result<UpdateResponse> {
        let mut body = Map::new();
        body.insert("rollback".to_string(), Value::Object(Map::new()));
        self.post_update(&Value::Object(body)).await
    }

    /// Merge index segments for faster searches.
    pub async fn optimize(&self) -> Result<UpdateResponse> {
        let mut body = Map::new();
        body.insert("optimize".to_string(), Value::Object(Map::new()));
        self.post_update(&Value::Object(body)).await
    }

    /// Real-time get: fetch documents by unique key straight from the
    /// update log, visible before any commit.
    pub async fn real_time_get(&self, ids: &[&str]) -> Result<SearchResponse> {
        let url = self.config.collection_url("get");
        debug!(%url, "dispatching real-time get");
        let response = self
            .http
            .get(&url)
            .query(&[("ids", ids.join(","))])
            .send()
            .await?;
        self.read(response).await
    }

    /// Health check against the collection's ping handler.
    pub async fn ping(&self) -> Result<PingResponse> {
        let url = self.config.collection_url("admin/ping");
        debug!(%url, "dispatching ping");
        let response = self.http.get(&url).send().await?;
        self.read(response).await
    }
}
