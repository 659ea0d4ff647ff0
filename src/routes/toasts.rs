use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::state::AppState;
use crate::toast::{Toast, ToastEvent};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toasts", get(list))
        .route("/toasts/stream", get(stream))
        .route("/toasts/{id}/dismiss", post(dismiss))
}

/// GET /toasts: the active queue, oldest first.
async fn list(State(state): State<AppState>) -> Json<Vec<Toast>> {
    Json(state.toasts.active().await)
}

/// POST /toasts/{id}/dismiss: close button.
async fn dismiss(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.toasts.dismiss(&id).await;
    StatusCode::NO_CONTENT
}

/// GET /toasts/stream: feed for the page's toast renderer.
///
/// Opens with an `added` event for every toast still visible, then relays
/// lifecycle events as they happen. Subscribing first means a toast raised
/// in between can show up twice; the renderer keys on id.
async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let live = BroadcastStream::new(state.toasts.subscribe()).filter_map(|event| match event {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Toast renderer fell behind: {}", e);
            None
        }
    });

    let snapshot: Vec<ToastEvent> = state
        .toasts
        .active()
        .await
        .into_iter()
        .filter(Toast::is_open)
        .map(|toast| ToastEvent::Added { toast })
        .collect();

    let events = tokio_stream::iter(snapshot)
        .chain(live)
        .filter_map(|event| to_sse(&event).map(Ok));

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn to_sse(event: &ToastEvent) -> Option<Event> {
    match Event::default().json_data(event) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::error!("Failed to encode toast event: {}", e);
            None
        }
    }
}
