//! HTTP integration tests: routing, status codes and response shapes.
//! Backed by the in-memory store, so no database is required.

use analyzer::RangeAnalyzer;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use configuration::Config;
use database::InMemoryStore;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{AppState, router};

fn app() -> Router {
    let state = AppState::new(Arc::new(InMemoryStore::new()), RangeAnalyzer::default());
    router(state, &Config::default()).expect("router")
}

fn valid_payload() -> Value {
    json!({
        "name": "BTN open",
        "hands": {
            "AKs": [ { "action": "OPEN", "weight": 50.0 }, { "action": "FOLD", "weight": 50.0 } ],
            "A5s": [ { "action": "OPEN", "weight": 100.0 } ]
        }
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(&app(), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn stats_endpoint_returns_vpip_and_distribution() {
    let (status, body) = send(&app(), "POST", "/api/ranges/stats", Some(valid_payload())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vpip"], 75.0);
    assert_eq!(body["byAction"]["OPEN"], 75.0);
    assert_eq!(body["byAction"]["FOLD"], 25.0);
    assert_eq!(body["byAction"]["CALL3B"], 0.0);
}

#[tokio::test]
async fn stats_of_empty_range_is_all_zero() {
    let payload = json!({ "name": "empty", "hands": {} });
    let (status, body) = send(&app(), "POST", "/api/ranges/stats", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vpip"], 0.0);
    assert!(body["byAction"].as_object().unwrap().values().all(|v| v == 0.0));
}

#[tokio::test]
async fn validate_endpoint_accepts_and_rejects() {
    let app = app();

    let (status, _) = send(&app, "POST", "/api/ranges/validate", Some(valid_payload())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let bad = json!({ "name": "bad", "hands": { "AKs": [ { "action": "OPEN", "weight": 90 } ] } });
    let (status, body) = send(&app, "POST", "/api/ranges/validate", Some(bad)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "WeightSumMismatch");
    assert!(body["error"].as_str().unwrap().contains("sum to 100"));
}

#[tokio::test]
async fn duplicate_action_is_a_bad_request() {
    let dup = json!({
        "name": "dup",
        "hands": { "AKs": [ { "action": "OPEN", "weight": 50 }, { "action": "OPEN", "weight": 50 } ] }
    });
    let (status, body) = send(&app(), "POST", "/api/ranges/stats", Some(dup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "DuplicateAction");
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = app();

    let unknown_action = json!({ "name": "x", "hands": { "AA": [ { "action": "LIMP", "weight": 100 } ] } });
    let (status, body) = send(&app, "POST", "/api/ranges", Some(unknown_action)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MalformedInput");

    let request = Request::post("/api/ranges/validate")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_payload_is_not_saved() {
    let app = app();
    let blank_name = json!({ "name": " ", "hands": {} });

    let (status, body) = send(&app, "POST", "/api/ranges", Some(blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingRequiredField");

    let (_, list) = send(&app, "GET", "/api/ranges", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    // Create
    let (status, created) = send(&app, "POST", "/api/ranges", Some(valid_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "BTN open");
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert_eq!(created["payload"], valid_payload());

    // Get
    let (status, fetched) = send(&app, "GET", &format!("/api/ranges/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Update
    let mut changed = valid_payload();
    changed["name"] = json!("BTN open v2");
    let (status, updated) = send(&app, "PUT", &format!("/api/ranges/{id}"), Some(changed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "BTN open v2");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    // List
    let (status, list) = send(&app, "GET", "/api/ranges", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "BTN open v2");
    assert!(list[0].get("payload").is_none());

    // Delete (twice: deleting is idempotent)
    let (status, _) = send(&app, "DELETE", &format!("/api/ranges/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/ranges/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/api/ranges/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Range not found");
}

#[tokio::test]
async fn update_of_unknown_range_is_not_found() {
    let uri = format!("/api/ranges/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app(), "PUT", &uri, Some(valid_payload())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_validates_before_looking_up_the_record() {
    let uri = format!("/api/ranges/{}", uuid::Uuid::new_v4());
    let empty_hand = json!({ "name": "x", "hands": { "AA": [] } });
    let (status, body) = send(&app(), "PUT", &uri, Some(empty_hand)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "EmptyHandActions");
}

#[tokio::test]
async fn non_uuid_id_is_a_bad_request() {
    let app = app();
    for method in ["GET", "DELETE"] {
        let (status, body) = send(&app, method, "/api/ranges/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "MalformedInput");
    }

    let (status, body) = send(&app, "PUT", "/api/ranges/not-a-uuid", Some(valid_payload())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MalformedInput");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(&app(), "GET", "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
