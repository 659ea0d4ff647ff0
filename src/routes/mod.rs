pub mod admin;
pub mod assets;
pub mod auth;
pub mod dashboard;
pub mod feed;
pub mod home;
pub mod toasts;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The whole application, ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/assets/{*path}", get(assets::serve))
        .merge(auth::router())
        .merge(dashboard::router())
        .merge(feed::router())
        .merge(admin::router())
        .merge(toasts::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
