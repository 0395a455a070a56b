//! Integration tests for query construction and serialization.

use chrono::{TimeZone, Utc};
use serde_json::json;
use solrkit::escape::{escape, unescape};
use solrkit::query::{
    Facet, FacetDomain, FacetSpec, FilterClause, HighlightConfig, JoinFilter, Query, QueryFacet,
    RangeFilter, SortOrder, TermsFacet,
};
use solrkit::value::SolrValue;

#[test]
fn test_default_query_is_match_all() {
    let query = Query::new();
    assert_eq!(query.to_query_string(), "q=%2A%3A%2A");

    let body = query.to_json_body();
    assert_eq!(body["query"], "*:*");
    assert!(body.get("filter").is_none());
}

#[test]
fn test_flat_and_structured_modes_agree() {
    let query = Query::new()
        .q("name:Megumin")
        .start(5)
        .rows(20)
        .sort("rate", SortOrder::Desc)
        .sort("age", SortOrder::Asc)
        .fields(["id", "name", "rate"])
        .filter(FilterClause::new("category", "novel"));

    let params = query.to_params();
    let body = query.to_json_body();

    assert!(params.contains(&("q".to_string(), "name:Megumin".to_string())));
    assert_eq!(body["query"], "name:Megumin");

    assert!(params.contains(&("start".to_string(), "5".to_string())));
    assert_eq!(body["offset"], 5);

    assert!(params.contains(&("rows".to_string(), "20".to_string())));
    assert_eq!(body["limit"], 20);

    assert!(params.contains(&("sort".to_string(), "rate desc,age asc".to_string())));
    assert_eq!(body["sort"], "rate desc,age asc");

    assert!(params.contains(&("fl".to_string(), "id,name,rate".to_string())));
    assert_eq!(body["fields"], "id,name,rate");

    assert!(params.contains(&("fq".to_string(), "category:novel".to_string())));
    assert_eq!(body["filter"], json!(["category:novel"]));
}

#[test]
fn test_spec_example_request() {
    let query = Query::new()
        .filter(FilterClause::new("age", "[* TO 18]"))
        .filter(FilterClause::new("name", "(\"Megumin\" OR \"Konami Kirie\")"))
        .sort("rate", SortOrder::Desc)
        .rows(1);

    // Flat mode: two independent AND-combined filter fragments.
    let qs = query.to_query_string();
    assert!(qs.contains("fq=age%3A%5B%2A%20TO%2018%5D"));
    assert!(qs.contains("rows=1"));
    assert_eq!(qs.matches("fq=").count(), 2);

    // Structured mode equivalent.
    let body = query.to_json_body();
    assert_eq!(body["filter"].as_array().unwrap().len(), 2);
    assert_eq!(body["sort"], "rate desc");
    assert_eq!(body["limit"], 1);
}

#[test]
fn test_finalization_idempotence() {
    let query = Query::new()
        .q("*:*")
        .facet("occ", Facet::Terms(TermsFacet::new("occupation").limit(10)))
        .filter(FilterClause::new("age", "[* TO 18]"))
        .highlight(HighlightConfig::new().field("name"))
        .param("spellcheck", "true");

    let first = query.to_query_string();
    let second = query.to_query_string();
    assert_eq!(first, second);
    assert_eq!(query.to_json_body(), query.to_json_body());
}

#[test]
fn test_date_range_filter_normalizes() {
    let from = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2017, 12, 31, 23, 59, 59).unwrap();
    let query = Query::new().range_filter(RangeFilter::new(
        "registered",
        Some(SolrValue::from(from)),
        Some(SolrValue::from(to)),
    ));

    let body = query.to_json_body();
    assert_eq!(
        body["filter"][0],
        "registered:[2017-01-01T00:00:00.000Z TO 2017-12-31T23:59:59.000Z]"
    );
}

#[test]
fn test_join_filter_clause() {
    let query = Query::new().join_filter(
        JoinFilter::with_query("owner_id", "id", "kind:dog").from_index("pets"),
    );
    let body = query.to_json_body();
    assert_eq!(
        body["filter"][0],
        "{!join from=owner_id to=id fromIndex=pets}kind:dog"
    );
}

#[test]
fn test_escaped_value_in_filter() {
    let untrusted = "C++ (2011): a/b";
    let query = Query::new().filter(FilterClause::new("title", escape(untrusted)));
    let body = query.to_json_body();
    assert_eq!(
        body["filter"][0],
        "title:C\\+\\+ \\(2011\\)\\: a\\/b"
    );
    assert_eq!(unescape(&escape(untrusted)), untrusted);
}

#[test]
fn test_facet_only_request() {
    let facets = FacetSpec::new()
        .insert("occ", Facet::Terms(TermsFacet::new("occupation").limit(10)))
        .insert(
            "minors",
            Facet::Query(
                QueryFacet::new("age:[* TO 18]")
                    .sub_facet("by_city", Facet::Terms(TermsFacet::new("city"))),
            ),
        );
    let query = Query::new().rows(0).facets(facets);

    let body = query.to_json_body();
    assert_eq!(body["limit"], 0);
    assert_eq!(body["facet"]["occ"]["type"], "terms");
    assert_eq!(body["facet"]["occ"]["field"], "occupation");
    assert_eq!(body["facet"]["occ"]["limit"], 10);
    assert!(body["facet"]["occ"].get("domain").is_none());
    assert_eq!(body["facet"]["minors"]["facet"]["by_city"]["field"], "city");
}

#[test]
fn test_multi_select_faceting_domain() {
    let query = Query::new()
        .param("fq", "{!tag=cat}category:novel")
        .facet(
            "categories",
            Facet::Terms(
                TermsFacet::new("category").domain(FacetDomain::new().exclude_tag("cat")),
            ),
        );
    let body = query.to_json_body();
    assert_eq!(
        body["facet"]["categories"]["domain"]["excludeTags"],
        json!(["cat"])
    );
}

#[test]
fn test_params_bag_omitted_when_empty() {
    let query = Query::new().q("name:Megumin").rows(3);
    let body = query.to_json_body();
    assert!(body.get("params").is_none());

    let with_aux = query.debug();
    assert_eq!(with_aux.to_json_body()["params"]["debugQuery"], "true");
}

#[test]
fn test_multi_value_filter_or_join() {
    let query = Query::new().filter(FilterClause::with_values(
        "name",
        vec![SolrValue::from("Megumin"), SolrValue::from("Kirie")],
    ));
    let body = query.to_json_body();
    assert_eq!(body["filter"][0], "name:Megumin OR name:Kirie");
}

#[test]
fn test_complex_phrase_filter_marker() {
    let query = Query::new().filter(FilterClause::new("name", "Konami Ki*").complex_phrase());
    let body = query.to_json_body();
    assert_eq!(
        body["filter"][0],
        "{!complexphrase inOrder=true}name:\"Konami Ki*\""
    );
}
