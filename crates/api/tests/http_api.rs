//! End-to-end tests for the HTTP API over an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use tower::ServiceExt;

use gageboek_api::{AppState, create_router};
use gageboek_core::vat::VatRates;
use gageboek_shared::config::StorageProvider;
use gageboek_store::BlobGageRepository;

const PRINCIPAL_HEADER: &str = "x-ms-client-principal-id";

fn test_app() -> Router {
    let repository = BlobGageRepository::from_provider(&StorageProvider::Memory, VatRates::dutch())
        .expect("memory operator");
    let state = AppState {
        repository: Arc::new(repository),
        principal_header: HeaderName::from_static(PRINCIPAL_HEADER),
    };
    create_router(state)
}

fn get(uri: &str, user: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(PRINCIPAL_HEADER, user)
        .body(Body::empty())
        .expect("valid request")
}

fn post_json(uri: &str, user: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(PRINCIPAL_HEADER, user)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Amounts travel as strings on the wire; compare them numerically so an
/// exact division does not fail the test over trailing zeros.
fn amount(value: &Value) -> Decimal {
    value
        .as_str()
        .expect("amount is a string")
        .parse()
        .expect("amount parses")
}

fn gig(date: &str, amount: &str, rate: &str) -> Value {
    json!({
        "date": date,
        "description": "Jazz trio, Bimhuis",
        "category": "Performance",
        "amountIncludingVAT": amount,
        "vatRate": rate,
    })
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_missing_principal_header_is_unauthorized() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/entries")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Unauthorized: User ID not found");
}

#[tokio::test]
async fn test_create_entry_returns_vat_split() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/entries",
            "alice",
            &gig("2024-01-15", "100", "performance"),
        ))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    let split = &body["data"]["amount"];
    assert_eq!(amount(&split["amountIncludingVAT"]), dec!(100));
    assert_eq!(amount(&split["amountExcludingVAT"]), dec!(91.74));
    assert_eq!(amount(&split["vatAmount"]), dec!(8.26));
    assert_eq!(split["vatRate"], "performance");
    assert_eq!(body["data"]["userId"], "alice");
}

#[tokio::test]
async fn test_create_entry_rejects_non_positive_amount() {
    let app = test_app();
    let response = app
        .oneshot(post_json(
            "/api/entries",
            "alice",
            &gig("2024-01-15", "0", "performance"),
        ))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Amount must be greater than 0");
}

#[tokio::test]
async fn test_create_entry_rejects_malformed_json() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/entries")
                .header(PRINCIPAL_HEADER, "alice")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("valid request"),
        )
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid JSON in request body");
}

#[tokio::test]
async fn test_list_is_scoped_to_caller() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/entries",
            "alice",
            &gig("2024-01-15", "100", "performance"),
        ))
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get("/api/entries", "alice"))
        .await
        .expect("request succeeds");
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let response = app
        .oneshot(get("/api/entries", "bob"))
        .await
        .expect("request succeeds");
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_quarterly_report_groups_by_rate() {
    let app = test_app();

    for entry in [
        gig("2024-01-15", "100", "performance"),
        gig("2024-02-20", "121", "standard"),
        // Outside Q1, must not show up.
        gig("2024-04-01", "500", "performance"),
    ] {
        let response = app
            .clone()
            .oneshot(post_json("/api/entries", "alice", &entry))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get("/api/reports/quarterly?quarter=Q1&year=2024", "alice"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let summary = &body["data"];
    assert_eq!(summary["quarter"], "Q1");
    assert_eq!(summary["year"], 2024);
    let performance = &summary["performanceTotal"];
    assert_eq!(amount(&performance["amountIncludingVAT"]), dec!(100));
    assert_eq!(amount(&performance["amountExcludingVAT"]), dec!(91.74));
    assert_eq!(amount(&performance["vatAmount"]), dec!(8.26));
    let standard = &summary["standardTotal"];
    assert_eq!(amount(&standard["amountIncludingVAT"]), dec!(121));
    assert_eq!(amount(&standard["amountExcludingVAT"]), dec!(100));
    assert_eq!(amount(&standard["vatAmount"]), dec!(21));
    let grand = &summary["grandTotal"];
    assert_eq!(amount(&grand["amountIncludingVAT"]), dec!(221));
    assert_eq!(amount(&grand["amountExcludingVAT"]), dec!(191.74));
    assert_eq!(amount(&grand["totalVAT"]), dec!(29.26));
}

#[tokio::test]
async fn test_quarterly_report_rejects_bad_quarter() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/reports/quarterly?quarter=Q9", "alice"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid quarter. Must be Q1, Q2, Q3, or Q4");
}

#[tokio::test]
async fn test_quarterly_report_rejects_out_of_range_year() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/reports/quarterly?quarter=Q1&year=1999", "alice"))
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid year");
}

#[tokio::test]
async fn test_delete_unknown_entry_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/entries/019391b0-0000-7000-8000-000000000000")
                .header(PRINCIPAL_HEADER, "alice")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request succeeds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_delete_roundtrip() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/entries",
            "alice",
            &gig("2024-01-15", "100", "performance"),
        ))
        .await
        .expect("request succeeds");
    let body = response_json(response).await;
    let id = body["data"]["id"].as_str().expect("id present").to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/entries/{id}"))
                .header(PRINCIPAL_HEADER, "alice")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);

    let response = app
        .oneshot(get("/api/entries", "alice"))
        .await
        .expect("request succeeds");
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}
