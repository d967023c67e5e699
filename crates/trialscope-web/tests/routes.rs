//! Router tests against a mocked ClinicalTrials.gov endpoint.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;
use trialscope_config::Config;
use trialscope_web::{router::build_router, state::AppState};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_study() -> serde_json::Value {
    json!({
        "protocolSection": {
            "identificationModule": { "nctId": "NCT00000001", "briefTitle": "Test Trial One" },
            "designModule": { "phases": ["PHASE2", "PHASE3"] },
            "statusModule": { "overallStatus": "RECRUITING" },
            "sponsorCollaboratorsModule": { "leadSponsor": { "name": "Test Sponsor Inc" } },
            "conditionsModule": { "conditions": ["Lung Cancer", "NSCLC"] },
            "armsInterventionsModule": {
                "interventions": [{ "name": "Pembrolizumab" }, { "name": "Placebo" }]
            }
        }
    })
}

fn app_for(server: &MockServer, max_results: usize) -> Router {
    let mut config = Config::default();
    config.registry.base_url = format!("{}/api/v2/studies", server.uri());
    config.registry.max_results = max_results;
    build_router(AppState::new(&config).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn mount_single_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v2/studies"))
        .and(query_param("query.term", "AREA[Phase](PHASE2 OR PHASE3)"))
        .and(query_param("filter.overallStatus", "RECRUITING"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "studies": [sample_study()]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_index_renders_form() {
    let server = MockServer::start().await;
    let (status, _, body) = get(app_for(&server, 500), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"action="/search""#));
    assert!(body.contains(r#"value="EARLY_PHASE1""#));
    assert!(body.contains("Enrolling by Invitation"));
}

#[tokio::test]
async fn test_search_without_criteria_does_not_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _, body) = get(app_for(&server, 500), "/search?compound=++&condition=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please enter at least one search criterion."));
}

#[tokio::test]
async fn test_search_renders_results() {
    let server = MockServer::start().await;
    mount_single_page(&server).await;

    let (status, _, body) = get(
        app_for(&server, 500),
        "/search?phases=PHASE2&phases=PHASE3&statuses=RECRUITING",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 1 of 1 trials"));
    assert!(body.contains("https://clinicaltrials.gov/study/NCT00000001"));
    assert!(body.contains("Test Trial One"));
    assert!(body.contains("Lung Cancer; NSCLC"));
    assert!(body.contains("Pembrolizumab; Placebo"));
    assert!(body.contains("/export?phases=PHASE2&amp;phases=PHASE3&amp;statuses=RECRUITING"));
    assert!(!body.contains("Results are limited"));
    assert!(!body.contains("results truncated"));
    // Submitted filters stay checked
    assert!(body.contains(r#"id="phase-PHASE2" checked"#));
    assert!(body.contains(r#"id="status-RECRUITING" checked"#));
}

#[tokio::test]
async fn test_search_truncation_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 40,
            "nextPageToken": "more",
            "studies": [sample_study(), sample_study(), sample_study()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_, _, body) = get(app_for(&server, 2), "/search?condition=Lung+Cancer").await;
    assert!(body.contains("Showing 2 of 40 trials (results truncated)"));
    assert!(body.contains("Results are limited to 2 trials."));
}

#[tokio::test]
async fn test_search_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalCount": 0, "studies": [] })))
        .mount(&server)
        .await;

    let (_, _, body) = get(app_for(&server, 500), "/search?compound=unknowndrug").await;
    assert!(body.contains("No trials found."));
}

#[tokio::test]
async fn test_search_upstream_error_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, _, body) = get(app_for(&server, 500), "/search?compound=pembrolizumab").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error fetching results:"));
    assert!(body.contains("alert-danger"));
    // Form keeps what the user typed
    assert!(body.contains(r#"value="pembrolizumab""#));
}

#[tokio::test]
async fn test_export_csv() {
    let server = MockServer::start().await;
    mount_single_page(&server).await;

    let (status, headers, body) = get(
        app_for(&server, 500),
        "/export?phases=PHASE2&phases=PHASE3&statuses=RECRUITING",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=clinical_trials.csv"
    );
    assert_eq!(
        body,
        "NCT ID,Title,Phase,Status,Sponsor,Conditions,Interventions\r\n\
         NCT00000001,Test Trial One,\"PHASE2, PHASE3\",RECRUITING,Test Sponsor Inc,Lung Cancer; NSCLC,Pembrolizumab; Placebo\r\n"
    );
}

#[tokio::test]
async fn test_export_upstream_error_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (status, _, body) = get(app_for(&server, 500), "/export?compound=x").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.starts_with("Error fetching results:"));
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let (status, _, body) = get(app_for(&server, 500), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
