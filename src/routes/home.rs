use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};

use crate::extractors::MaybeSession;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate;

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Template render error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }
}

/// Public landing page. Signed-in visitors go straight to their home.
pub async fn index(MaybeSession(session): MaybeSession) -> Response {
    match session {
        Some(marker) => Redirect::to(marker.role.home()).into_response(),
        None => Html(HomeTemplate).into_response(),
    }
}
