use askama::Template;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::MaybeSession;
use crate::routes::home::Html;
use crate::session::guard::{clear_marker_cookie, marker_cookie};
use crate::session::{Role, SessionMarker};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/signin.html")]
pub struct SigninTemplate {
    pub error: Option<String>,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct SigninForm {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signin", get(signin_page).post(signin))
        .route("/auth/logout", post(logout))
}

/// GET /auth/signin
async fn signin_page(MaybeSession(session): MaybeSession) -> Response {
    if let Some(marker) = session {
        return Redirect::to(marker.role.home()).into_response();
    }
    Html(SigninTemplate {
        error: None,
        name: String::new(),
        email: String::new(),
    })
    .into_response()
}

/// POST /auth/signin: write the session marker and send the actor home.
///
/// There are no credentials to check; any well-formed name and email signs in.
async fn signin(State(state): State<AppState>, Form(form): Form<SigninForm>) -> AppResult<Response> {
    let name = form.name.trim().to_string();
    let email = form.email.trim().to_string();

    if let Some(error) = validate_signin(&name, &email) {
        let page = Html(SigninTemplate {
            error: Some(error.to_string()),
            name,
            email,
        });
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    let marker = SessionMarker {
        name,
        email,
        role: form.role.unwrap_or(Role::User),
    };
    let cookie = marker_cookie(&state.config.auth.cookie_name, &marker.encode()?);
    tracing::info!("Signed in {} as {:?}", marker.email, marker.role);

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to(marker.role.home()),
    )
        .into_response())
}

/// POST /auth/logout: drop the marker and the viewer's feed state.
async fn logout(State(state): State<AppState>, MaybeSession(session): MaybeSession) -> Response {
    if let Some(marker) = session {
        state.feeds.forget(&marker.email).await;
        tracing::info!("Signed out {}", marker.email);
    }

    (
        AppendHeaders([(
            header::SET_COOKIE,
            clear_marker_cookie(&state.config.auth.cookie_name),
        )]),
        Redirect::to("/"),
    )
        .into_response()
}

fn validate_signin(name: &str, email: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("Name is required");
    }
    if email.is_empty() {
        return Some("Email is required");
    }
    if !email.contains('@') {
        return Some("Enter a valid email address");
    }
    None
}
