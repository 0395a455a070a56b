//! Integration tests for the HTTP dispatcher against a mock server.

use chrono::{TimeZone, Utc};
use mockito::Matcher;
use serde_json::json;
use solrkit::admin::CollectionAdmin;
use solrkit::client::{SolrClient, SolrConfig};
use solrkit::error::SolrError;
use solrkit::query::{Query, SortOrder};
use solrkit::value::SolrValue;
use std::collections::BTreeMap;

fn config_for(server: &mockito::Server) -> SolrConfig {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port.split_once(':').unwrap();
    SolrConfig::new(host, port.parse().unwrap(), "films")
}

fn search_body() -> String {
    json!({
        "responseHeader": {"status": 0, "QTime": 2},
        "response": {
            "numFound": 1,
            "start": 0,
            "docs": [{"id": "1", "name": "Megumin", "rate": 9}]
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_structured_search_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/solr/films/select")
        .match_body(Matcher::PartialJson(json!({
            "query": "name:Megumin",
            "sort": "rate desc",
            "limit": 1
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client
        .search(&Query::new().q("name:Megumin").sort("rate", SortOrder::Desc).rows(1))
        .await
        .unwrap();

    mock.assert_async().await;
    let docs = response.response.unwrap();
    assert_eq!(docs.num_found, 1);
    assert_eq!(docs.docs[0]["name"], "Megumin");
}

#[tokio::test]
async fn test_flat_search_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/solr/films/select")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "name:Megumin".into()),
            Matcher::UrlEncoded("rows".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client
        .search_params(&Query::new().q("name:Megumin").rows(1))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.header.status, 0);
}

#[tokio::test]
async fn test_structured_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/solr/films/select")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "responseHeader": {"status": 400, "QTime": 1},
                "error": {
                    "metadata": ["error-class", "org.apache.solr.common.SolrException"],
                    "msg": "undefined field rate",
                    "code": 400
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let error = client.search(&Query::new()).await.unwrap_err();
    match error {
        SolrError::Server {
            status,
            code,
            message,
            metadata,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, 400);
            assert_eq!(message, "undefined field rate");
            assert_eq!(metadata[0], "error-class");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_fallback_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/solr/films/select")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Bad Gateway</body></html>")
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let error = client.search(&Query::new()).await.unwrap_err();
    match error {
        SolrError::Transport { status, .. } => assert_eq!(status, 502),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_admin_create() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/solr/admin/collections")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("action".into(), "CREATE".into()),
            Matcher::UrlEncoded("name".into(), "coll1".into()),
            Matcher::UrlEncoded("numShards".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "responseHeader": {"status": 0, "QTime": 2412},
                "success": {"node1": {"core": "coll1_shard1_replica_n1"}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client
        .admin(&CollectionAdmin::create("coll1").num_shards(2))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.header.status, 0);
    assert!(response.body.contains_key("success"));
}

#[tokio::test]
async fn test_add_normalizes_dates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/solr/films/update")
        .match_body(Matcher::Json(json!([{
            "id": "doc-1",
            "name": "Megumin",
            "registered": "2017-02-10T13:05:26.000Z"
        }])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"responseHeader": {"status": 0, "QTime": 5}}).to_string())
        .create_async()
        .await;

    let doc = SolrValue::Object(BTreeMap::from([
        ("id".to_string(), SolrValue::from("doc-1")),
        ("name".to_string(), SolrValue::from("Megumin")),
        (
            "registered".to_string(),
            SolrValue::from(Utc.with_ymd_and_hms(2017, 2, 10, 13, 5, 26).unwrap()),
        ),
    ]));

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client.add(&[doc]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.header.status, 0);
}

#[tokio::test]
async fn test_delete_and_commit() {
    let mut server = mockito::Server::new_async().await;
    let delete_mock = server
        .mock("POST", "/solr/films/update")
        .match_body(Matcher::Json(json!({"delete": ["1", "2"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"responseHeader": {"status": 0, "QTime": 3}}).to_string())
        .create_async()
        .await;
    let commit_mock = server
        .mock("POST", "/solr/films/update")
        .match_body(Matcher::Json(json!({"commit": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"responseHeader": {"status": 0, "QTime": 40}}).to_string())
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    client.delete_by_id(&["1", "2"]).await.unwrap();
    client.commit().await.unwrap();

    delete_mock.assert_async().await;
    commit_mock.assert_async().await;
}

#[tokio::test]
async fn test_real_time_get() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/solr/films/get")
        .match_query(Matcher::UrlEncoded("ids".into(), "1,2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "response": {"numFound": 2, "start": 0, "docs": [{"id": "1"}, {"id": "2"}]}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client.real_time_get(&["1", "2"]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.response.unwrap().num_found, 2);
}

#[tokio::test]
async fn test_ping() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/solr/films/admin/ping")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"responseHeader": {"status": 0, "QTime": 1}, "status": "OK"}).to_string(),
        )
        .create_async()
        .await;

    let client = SolrClient::new(config_for(&server)).unwrap();
    let response = client.ping().await.unwrap();
    assert_eq!(response.status, "OK");
}
