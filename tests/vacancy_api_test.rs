mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use magang_directory::{
    config::{Capabilities, Config},
    routes, AppState,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

async fn app_with(capabilities: Capabilities) -> (Router, common::UpstreamCalls) {
    let (base, calls) = common::spawn_upstream().await;
    let mut config = Config::with_upstream("127.0.0.1:0", &base);
    config.capabilities = capabilities;
    let state = AppState::new(&config).expect("app state");
    (routes::router(state), calls)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn listing_returns_cards_and_page_window() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies?page=5&per_page=10&keyword=barista").await;
    assert_eq!(status, StatusCode::OK);

    let card = &body["items"][0];
    assert_eq!(card["id"], "v-5");
    assert_eq!(card["title"], "Posisi barista");
    assert_eq!(card["location"], "KOTA SURABAYA, JAWA TIMUR");
    assert_eq!(card["description"], "Mendukung tim &lt;b&gt;operasional&lt;/b&gt;");
    assert_eq!(card["degree_levels"], serde_json::json!([]));
    assert_eq!(card["study_programs"][0], "Manajemen");
    assert_eq!(card["remaining"], 5);
    assert_eq!(card["is_open"], true);
    assert_eq!(card["badge"], "Buka");

    assert_eq!(body["pagination"]["current_page"], 5);
    assert_eq!(body["pagination"]["last_page"], 12);
    assert_eq!(body["total_label"], "1.234");
    let pages: Vec<String> = body["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| match t["kind"].as_str() {
            Some("page") => t["page"].to_string(),
            _ => "...".to_string(),
        })
        .collect();
    assert_eq!(pages, vec!["1", "...", "3", "4", "5", "6", "7", "...", "12"]);
}

#[tokio::test]
async fn upstream_failure_is_a_bad_gateway() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies?province=99").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to load vacancies");
}

#[tokio::test]
async fn invalid_query_is_rejected() {
    let (app, calls) = app_with(Capabilities::default()).await;

    let (status, _) = get(&app, "/api/vacancies?per_page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/vacancies?province=3a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(calls.listing.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn detail_accepts_wrapped_and_flat_records() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies/abc-123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacancy"]["id"], "abc-123");
    assert_eq!(body["vacancy"]["company"]["address"], "Jl. Pemuda 10");
    assert_eq!(body["card"]["title"], "Analis Data");
    assert_eq!(body["timeline"].as_array().unwrap().len(), 4);
    assert_eq!(body["timeline"][0]["state"], "active");
    assert_eq!(body["timeline"][1]["state"], "unknown");
    assert_eq!(body["timeline"][3]["state"], "upcoming");

    let (status, body) = get(&app, "/api/vacancies/flat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacancy"]["id"], "flat");
}

#[tokio::test]
async fn empty_detail_is_not_found() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies/gone").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, body) = get(&app, "/api/vacancies/boom").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to load vacancy detail");
}

#[tokio::test]
async fn non_json_detail_is_a_bad_gateway() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies/garbled").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body["error"],
        "Failed to load vacancy detail: malformed upstream response"
    );
}

#[tokio::test]
async fn card_id_is_returned_unescaped() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/vacancies/a%26b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["card"]["id"], "a&b");
    assert_eq!(body["vacancy"]["id"], "a&b");
}

#[tokio::test]
async fn regencies_are_cached_per_province() {
    let (app, calls) = app_with(Capabilities::default()).await;

    for _ in 0..3 {
        let (status, body) = get(&app, "/api/regions/35/regencies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["province"], "35");
        assert_eq!(body["items"][1]["code"], "3571");
    }
    assert_eq!(calls.regency_calls(), 1);

    let (status, _) = get(&app, "/api/regions/32/regencies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls.regency_calls(), 2);
}

#[tokio::test]
async fn overlong_province_is_rejected_before_upstream() {
    let (app, calls) = app_with(Capabilities::default()).await;

    let uri = format!("/api/regions/{}/regencies", "1".repeat(500));
    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "province must be at most 10 characters");
    assert_eq!(calls.regency_calls(), 0);
}

#[tokio::test]
async fn empty_regency_lists_are_fetched_again() {
    let (app, calls) = app_with(Capabilities::default()).await;

    for _ in 0..2 {
        let (status, body) = get(&app, "/api/regions/00/regencies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"], serde_json::json!([]));
    }
    assert_eq!(calls.regency_calls(), 2);
}

#[tokio::test]
async fn regency_failure_names_the_regency_lookup() {
    let (app, calls) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/regions/98/regencies").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to load regencies");

    get(&app, "/api/regions/98/regencies").await;
    assert_eq!(calls.regency_calls(), 2);
}

#[tokio::test]
async fn disabled_capabilities_are_not_routed() {
    let (app, _) = app_with(Capabilities {
        regency_filter: false,
        detail_view: false,
    })
    .await;

    let (status, _) = get(&app, "/api/vacancies/abc-123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, "/api/regions/35/regencies").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail_view"], false);
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (app, _) = app_with(Capabilities::default()).await;

    let (status, body) = get(&app, "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/vacancies"].is_object());
    assert!(body["paths"]["/api/vacancies/{id}"].is_object());
}
