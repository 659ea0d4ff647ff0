#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use tower::ServiceExt;

use oversight::config::Config;
use oversight::feed::PostSource;
use oversight::routes;
use oversight::session::{Role, SessionMarker};
use oversight::state::AppState;

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.feed.load_delay_ms = 0;
    config
}

pub fn test_state() -> AppState {
    AppState::new(test_config())
}

pub fn app_with(state: AppState) -> Router {
    routes::app(state)
}

pub fn app_with_source(source: Arc<dyn PostSource>) -> Router {
    routes::app(AppState::with_source(test_config(), source))
}

pub fn marker(role: Role) -> SessionMarker {
    SessionMarker {
        name: "Ada Byron".to_string(),
        email: match role {
            Role::User => "ada@lab.org".to_string(),
            Role::Admin => "admin@lab.org".to_string(),
        },
        role,
    }
}

pub fn session_cookie(role: Role) -> String {
    format!("oversight_session={}", marker(role).encode().unwrap())
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
