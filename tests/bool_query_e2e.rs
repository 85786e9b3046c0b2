use chrono::{TimeZone, Utc};
use elastiq::{
    search_body, to_json, BoolQuery, ClauseKind, ClauseList, MatchQuery, Operator, Query,
    QueryNode, RangeQuery, TermQuery,
};
use serde_json::json;

#[test]
fn end_to_end_must_and_should() {
    let mut query = BoolQuery::new();
    query
        .and_where("age", "=", 5)
        .should(MatchQuery::new("title", "golang"));

    assert_eq!(
        query.output(),
        json!({
            "must": [{"term": {"age": 5}}],
            "should": [{"match": {"title": "golang"}}],
        })
    );
}

#[test]
fn every_bucket_in_call_order() {
    let mut query = BoolQuery::new();
    query
        .filter(TermQuery::new("tenant", "acme"))
        .must_not(TermQuery::new("deleted", true))
        .must(TermQuery::new("a", 1))
        .should(TermQuery::new("b", 2))
        .must(TermQuery::new("c", 3))
        .filter(TermQuery::new("region", "eu"));

    assert_eq!(
        to_json(&query).unwrap(),
        concat!(
            r#"{"bool":{"#,
            r#""filter":[{"term":{"tenant":"acme"}},{"term":{"region":"eu"}}],"#,
            r#""must_not":[{"term":{"deleted":true}}],"#,
            r#""must":[{"term":{"a":1}},{"term":{"c":3}}],"#,
            r#""should":[{"term":{"b":2}}]"#,
            r#"}}"#
        )
    );
}

#[test]
fn empty_builder_contributes_empty_object() {
    let query = BoolQuery::new();
    assert_eq!(query.output(), json!({}));
    assert_eq!(to_json(&query).unwrap(), r#"{"bool":{}}"#);
}

#[test]
fn nested_groups_render_recursively() {
    let mut query = BoolQuery::new();
    query
        .and_where_eq("published", true)
        .and_where_group(|q| {
            q.or_where_eq("category", "books")
                .or_where_group(|inner| {
                    inner
                        .and_where_eq("category", "music")
                        .and_where("price", "<", 20);
                });
        })
        .and_where("status", "<>", "archived");

    assert_eq!(
        query.output(),
        json!({
            "must": [
                {"term": {"published": true}},
                {"bool": {"should": [
                    {"term": {"category": "books"}},
                    {"bool": {"must": [
                        {"term": {"category": "music"}},
                        {"range": {"price": {"lt": 20}}},
                    ]}},
                ]}},
            ],
            "must_not": [{"term": {"status": "archived"}}],
        })
    );
}

#[test]
fn relation_scopes_where_fields() {
    let mut query = BoolQuery::new();
    query
        .set_relation(Some("user"))
        .and_where("name", "=", "a")
        .and_where("user.name", "=", "b")
        .or_where_match("bio", "rust");

    assert_eq!(
        query.output(),
        json!({
            "must": [
                {"term": {"user.name": "a"}},
                {"term": {"user.name": "b"}},
            ],
            "should": [{"match": {"user.bio": "rust"}}],
        })
    );
}

#[test]
fn negation_only_supported_on_and_side() {
    let mut and_query = BoolQuery::new();
    and_query.and_where("state", "!=", "closed");
    assert_eq!(and_query.clauses(ClauseKind::MustNot).len(), 1);

    let mut or_query = BoolQuery::new();
    or_query.or_where("state", "!=", "closed").or_where("state", Operator::NotEq, "x");
    assert!(or_query.is_empty());
}

#[test]
fn seeded_from_containers() {
    let query = BoolQuery::from_containers(vec![
        ("filter", ClauseList::from(QueryNode::from(TermQuery::new("tenant", "acme")))),
        ("nope", ClauseList::from(QueryNode::from(TermQuery::new("x", 1)))),
        (
            "must",
            [
                QueryNode::from(RangeQuery::new("age").gte(18)),
                QueryNode::from(json!({"exists": {"field": "email"}})),
            ]
            .into(),
        ),
    ]);

    assert_eq!(
        query.output(),
        json!({
            "filter": [{"term": {"tenant": "acme"}}],
            "must": [
                {"range": {"age": {"gte": 18}}},
                {"exists": {"field": "email"}},
            ],
        })
    );
}

#[test]
fn date_bounds_render_as_rfc3339() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut query = BoolQuery::new();
    query.and_where("created_at", ">=", since);

    assert_eq!(
        query.output(),
        json!({"must": [{"range": {"created_at": {"gte": "2024-01-01T00:00:00Z"}}}]})
    );
}

#[test]
fn embeds_into_search_body() {
    let mut inner = BoolQuery::new();
    inner.where_like("sku", "KB-*");

    let mut outer = BoolQuery::new();
    outer.filter(inner).minimum_should_match("75%");

    assert_eq!(
        search_body(&outer),
        json!({"query": {"bool": {
            "filter": [{"bool": {"must": [{"wildcard": {"sku": "KB-*"}}]}}],
            "minimum_should_match": "75%",
        }}})
    );
    assert_eq!(outer.query_type(), "bool");
}
