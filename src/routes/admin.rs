use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extractors::AdminSession;
use crate::feed::Post;
use crate::routes::feed::viewer_author;
use crate::routes::home::Html;
use crate::state::AppState;
use crate::toast::ToastSpec;

const MAX_TITLE_LEN: usize = 200;
const MAX_BODY_LEN: usize = 2000;

#[derive(Template)]
#[template(path = "pages/admin.html")]
pub struct AdminTemplate {
    pub name: String,
    pub error: Option<String>,
    pub title: String,
    pub body: String,
    pub image: String,
}

#[derive(Deserialize)]
pub struct CreatePostForm {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_page))
        .route("/admin/posts", post(create_post))
}

async fn admin_page(AdminSession(admin): AdminSession) -> Html<AdminTemplate> {
    Html(AdminTemplate {
        name: admin.name,
        error: None,
        title: String::new(),
        body: String::new(),
        image: String::new(),
    })
}

/// POST /admin/posts: publish to the feed backend. Viewers see the post on
/// their next feed load.
async fn create_post(
    State(state): State<AppState>,
    AdminSession(admin): AdminSession,
    Form(form): Form<CreatePostForm>,
) -> AppResult<Response> {
    let title = form.title.trim().to_string();
    let body = form.body.trim().to_string();
    let image = form.image.trim().to_string();

    if let Some(error) = validate_post(&title, &body) {
        state
            .toasts
            .notify(ToastSpec::new("Post not published").description(error).destructive())
            .await;
        let page = Html(AdminTemplate {
            name: admin.name,
            error: Some(error.to_string()),
            title,
            body,
            image,
        });
        return Ok((StatusCode::BAD_REQUEST, page).into_response());
    }

    let post = Post {
        id: format!("post-{}", uuid::Uuid::now_v7()),
        title,
        content: body,
        author: viewer_author(&admin),
        created_at: Utc::now(),
        image: if image.is_empty() { None } else { Some(image) },
        likes: 0,
        is_liked: false,
        comments: Vec::new(),
    };
    let title = post.title.clone();
    state.source.publish(post).await?;

    state
        .toasts
        .notify(ToastSpec::new("Post published").description(title))
        .await;

    Ok(Redirect::to("/admin").into_response())
}

fn validate_post(title: &str, body: &str) -> Option<&'static str> {
    if title.is_empty() {
        return Some("Title cannot be empty");
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Some("Title must be 200 characters or less");
    }
    if body.is_empty() {
        return Some("Post body cannot be empty");
    }
    if body.chars().count() > MAX_BODY_LEN {
        return Some("Post body must be 2000 characters or less");
    }
    None
}
