//! Hold / confirm / release protocol tests over HTTP.

use http::StatusCode;
use serde_json::json;

use super::helpers::TestApp;

#[tokio::test]
async fn hold_returns_token_and_deadline() {
    let app = TestApp::new();
    let (status, body) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["seat_id"], 1);
    assert_eq!(body["holder"], "alice");
    assert!(body["token"].is_string());
    assert!(body["expires_at"].is_string());
}

#[tokio::test]
async fn hold_without_actor_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/seats/1/hold", json!({ "actor_id": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");

    // Missing field entirely is rejected by body deserialization.
    let (status, _) = app.post_json("/api/seats/1/hold", json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn hold_on_unknown_seat_is_404() {
    let app = TestApp::new();
    let (status, _) = app
        .post_json("/api/seats/999/hold", json!({ "actor_id": "alice" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_hold_conflicts() {
    let app = TestApp::new();
    app.post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    let (status, body) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "bob" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "seat is currently held");
}

#[tokio::test]
async fn confirm_with_wrong_actor_is_forbidden_then_holder_succeeds() {
    let app = TestApp::new();
    let (_, hold) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;
    let token = hold["token"].as_str().expect("token").to_string();

    // Bob steals alice's token.
    let (status, body) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "bob", "token": token }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");

    // Alice confirms with her own token.
    let (status, body) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": token }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seat_id"], 1);
    assert_eq!(body["row"], "A");
    assert_eq!(body["number"], 1);

    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["status"], "booked");
}

#[tokio::test]
async fn confirm_with_forged_token_is_forbidden() {
    let app = TestApp::new();
    app.post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    let (status, _) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": "b5bb9d80-0a5c-4f29-9d25-4a1b6ae0c8a1" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": "garbage" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn confirm_unheld_seat_conflicts() {
    let app = TestApp::new();
    let (status, body) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": "whatever" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "seat is not held");
}

#[tokio::test]
async fn booked_seat_cannot_be_held_again() {
    let app = TestApp::new();
    let (_, hold) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;
    let token = hold["token"].as_str().expect("token").to_string();
    app.post_json(
        "/api/seats/1/confirm",
        json!({ "actor_id": "alice", "token": token }),
    )
    .await;

    let (status, body) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "bob" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "seat is already booked");
}

#[tokio::test]
async fn release_frees_seat_and_rehold_gets_fresh_token() {
    let app = TestApp::new();
    let (_, first) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    let (status, body) = app
        .post_json("/api/seats/1/release", json!({ "actor_id": "alice" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Seat released");

    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["status"], "available");

    let (status, second) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "bob" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(first["token"], second["token"]);
}

#[tokio::test]
async fn release_by_non_holder_is_forbidden() {
    let app = TestApp::new();
    app.post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    let (status, body) = app
        .post_json("/api/seats/1/release", json!({ "actor_id": "bob" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");

    // Alice still holds the seat.
    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["held_by"], "alice");
}

#[tokio::test]
async fn release_of_unheld_seat_is_bad_request() {
    let app = TestApp::new();
    let (status, body) = app
        .post_json("/api/seats/1/release", json!({ "actor_id": "alice" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_STATE");
}
