//! Toast queue as seen over HTTP: listing, dismissal and auto-dismiss timing.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::*;
use oversight::toast::ToastSpec;

async fn list(app: &axum::Router) -> serde_json::Value {
    let response = send(app, get("/toasts", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn list_returns_toasts_in_enqueue_order() {
    let state = test_state();
    let toasts = state.toasts.clone();
    let app = app_with(state);

    toasts.notify(ToastSpec::new("first")).await;
    toasts
        .notify(ToastSpec::new("second").description("details").destructive())
        .await;

    let json = list(&app).await;
    assert_eq!(json[0]["title"], "first");
    assert_eq!(json[0]["variant"], "default");
    assert_eq!(json[0]["duration_ms"], 5000);
    assert_eq!(json[1]["title"], "second");
    assert_eq!(json[1]["description"], "details");
    assert_eq!(json[1]["variant"], "destructive");
}

#[tokio::test(start_paused = true)]
async fn dismiss_endpoint_starts_closing() {
    let state = test_state();
    let toasts = state.toasts.clone();
    let app = app_with(state);
    let id = toasts.notify(ToastSpec::new("closable")).await;

    let response = send(&app, post_form(&format!("/toasts/{}/dismiss", id), None, "")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(list(&app).await[0]["phase"], "closing");

    tokio::time::sleep(Duration::from_millis(201)).await;
    assert_eq!(list(&app).await, serde_json::json!([]));
}

#[tokio::test]
async fn dismiss_unknown_toast_is_harmless() {
    let app = app_with(test_state());
    let response = send(&app, post_form("/toasts/missing/dismiss", None, "")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test(start_paused = true)]
async fn short_toast_closes_then_disappears() {
    let state = test_state();
    let toasts = state.toasts.clone();
    let app = app_with(state);

    toasts
        .notify(ToastSpec::new("quick").duration(Duration::from_millis(100)))
        .await;
    assert_eq!(list(&app).await[0]["phase"], "visible");

    tokio::time::sleep(Duration::from_millis(101)).await;
    assert_eq!(list(&app).await[0]["phase"], "closing");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(list(&app).await, serde_json::json!([]));
}
