//! End-to-end search runs through `PlacesClient` against a mock provider.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use placeleads_core::{DataTier, LeadStatus, SearchConfiguration};
use placeleads_places::{run_search, PagingPolicy, PlacesClient, SearchError, SearchWarning, Strategy};

const TEXT_SEARCH: &str = "/maps/api/place/textsearch/json";
const DETAILS: &str = "/maps/api/place/details/json";
const SEARCH_TEXT: &str = "/v1/places:searchText";

fn test_client(server: &MockServer) -> PlacesClient {
    PlacesClient::with_base_urls("test-key", 5, "placeleads-test/0.1", &server.uri(), &server.uri())
        .expect("failed to build test PlacesClient")
}

fn no_delay() -> PagingPolicy {
    PagingPolicy::with_page_delay(Duration::ZERO)
}

fn candidate(id: &str, reviews: u32) -> serde_json::Value {
    json!({
        "place_id": id,
        "name": format!("Bakery {id}"),
        "formatted_address": format!("{id} Main St, Austin, TX"),
        "business_status": "OPERATIONAL",
        "user_ratings_total": reviews
    })
}

async fn mount_detail(server: &MockServer, id: &str, reviews: u32, website: Option<&str>) {
    let mut result = candidate(id, reviews);
    result["international_phone_number"] = json!("+1 512-555-0100");
    result["url"] = json!(format!("https://maps.google.com/?cid={id}"));
    if let Some(site) = website {
        result["website"] = json!(site);
    }
    Mock::given(method("GET"))
        .and(path(DETAILS))
        .and(query_param("place_id", id))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "OK", "result": result })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn simple_search_uses_single_shot_endpoint_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEARCH_TEXT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "places": [
                {
                    "id": "m1",
                    "displayName": { "text": "Few Reviews" },
                    "formattedAddress": "1 Oak Ave",
                    "businessStatus": "OPERATIONAL",
                    "userRatingCount": 4
                },
                {
                    "id": "m2",
                    "displayName": { "text": "Many Reviews" },
                    "formattedAddress": "2 Oak Ave",
                    "businessStatus": "OPERATIONAL",
                    "userRatingCount": 400
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let config = SearchConfiguration::new("Austin", "bakery");
    let report = run_search(&test_client(&server), &config, &no_delay())
        .await
        .expect("simple search should succeed");

    assert_eq!(report.plan.strategy, Strategy::Simple);
    let names: Vec<_> = report.leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Many Reviews", "Few Reviews"]);
    assert!(report.leads.iter().all(|l| l.status == LeadStatus::Pending));
}

#[tokio::test]
async fn complex_search_paginates_filters_and_enriches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TEXT_SEARCH))
        .and(query_param("query", "bakery in Austin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [candidate("a", 120), candidate("low", 2), candidate("b", 60)],
            "next_page_token": "CURSOR-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(TEXT_SEARCH))
        .and(query_param("pagetoken", "CURSOR-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [candidate("b", 60), candidate("c", 300), candidate("site", 90)]
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_detail(&server, "a", 120, None).await;
    mount_detail(&server, "b", 60, None).await;
    mount_detail(&server, "c", 300, None).await;
    mount_detail(&server, "site", 90, Some("https://site.example")).await;

    let mut config = SearchConfiguration::new("Austin", "bakery");
    config.min_reviews = 50;
    config.exclude_has_website = true;
    config.target_count = 10;

    let report = run_search(&test_client(&server), &config, &no_delay())
        .await
        .expect("complex search should succeed");

    assert_eq!(report.plan.strategy, Strategy::Complex);
    let ids: Vec<_> = report
        .leads
        .iter()
        .filter_map(|l| l.external_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    assert_eq!(report.excluded, 1);
    assert_eq!(report.candidates_considered, 6);
    assert_eq!(
        report.leads[0].phone.as_deref(),
        Some("+1 512-555-0100")
    );
}

#[tokio::test]
async fn failed_detail_fetch_becomes_a_warning() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TEXT_SEARCH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [candidate("ok", 10), candidate("gone", 20)]
        })))
        .mount(&server)
        .await;
    mount_detail(&server, "ok", 10, None).await;
    Mock::given(method("GET"))
        .and(path(DETAILS))
        .and(query_param("place_id", "gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })))
        .mount(&server)
        .await;

    let mut config = SearchConfiguration::new("Austin", "bakery");
    config.operational_only = false;
    config.data_tier = DataTier::Lean;

    let report = run_search(&test_client(&server), &config, &no_delay())
        .await
        .expect("a failed detail fetch must not fail the search");

    assert_eq!(report.leads.len(), 1);
    assert!(report.leads[0].review_count.is_none());
    assert!(matches!(
        report.warnings.as_slice(),
        [SearchWarning::DetailFetchFailed { place_id, .. }] if place_id == "gone"
    ));
}

#[tokio::test]
async fn rejected_credential_on_first_page_fails_the_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TEXT_SEARCH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&server)
        .await;

    let mut config = SearchConfiguration::new("Austin", "bakery");
    config.min_reviews = 1;

    let err = run_search(&test_client(&server), &config, &no_delay())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Provider(_)));
    assert!(err.to_string().contains("The provided API key is invalid."));
}
