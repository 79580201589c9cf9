//! Hold expiry behavior over HTTP, using the paused Tokio clock.

use std::time::Duration;

use http::StatusCode;
use serde_json::json;

use super::helpers::TestApp;

#[tokio::test(start_paused = true)]
async fn expired_hold_frees_the_seat() {
    let app = TestApp::with_hold_ttl(60);
    app.post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["status"], "held");

    tokio::time::sleep(Duration::from_secs(61)).await;

    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["status"], "available");
    assert!(seat["held_by"].is_null());
}

#[tokio::test(start_paused = true)]
async fn seat_can_be_reheld_after_expiry() {
    let app = TestApp::with_hold_ttl(1);
    let (_, first) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;

    tokio::time::sleep(Duration::from_secs(2)).await;

    let (status, second) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "bob" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["holder"], "bob");
    assert_ne!(first["token"], second["token"]);
}

#[tokio::test(start_paused = true)]
async fn stale_token_cannot_confirm_a_newer_hold() {
    let app = TestApp::with_hold_ttl(1);
    let (_, first) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;
    let stale_token = first["token"].as_str().expect("token").to_string();

    tokio::time::sleep(Duration::from_secs(2)).await;
    app.post_json("/api/seats/1/hold", json!({ "actor_id": "bob" }))
        .await;

    // Alice's expired credential is useless against bob's hold.
    let (status, _) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": stale_token }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test(start_paused = true)]
async fn confirm_before_deadline_still_works() {
    let app = TestApp::with_hold_ttl(60);
    let (_, hold) = app
        .post_json("/api/seats/1/hold", json!({ "actor_id": "alice" }))
        .await;
    let token = hold["token"].as_str().expect("token").to_string();

    tokio::time::sleep(Duration::from_secs(59)).await;

    let (status, _) = app
        .post_json(
            "/api/seats/1/confirm",
            json!({ "actor_id": "alice", "token": token }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The booking outlives the original deadline.
    tokio::time::sleep(Duration::from_secs(120)).await;
    let (_, seat) = app.get("/api/seats/1").await;
    assert_eq!(seat["status"], "booked");
}
