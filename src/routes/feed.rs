use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::extractors::UserSession;
use crate::feed::fixtures::initials;
use crate::feed::{self, Author, Comment, Post, PostStore, ShareResult};
use crate::routes::home::Html;
use crate::session::SessionMarker;
use crate::state::AppState;
use crate::toast::ToastSpec;

// --- View structs ---

pub struct PostCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorView,
    pub created_at: String,
    pub image: Option<String>,
    pub likes: u32,
    pub is_liked: bool,
    pub comments: Vec<CommentView>,
}

pub struct AuthorView {
    pub name: String,
    pub role: String,
    pub initials: String,
    pub avatar_url: Option<String>,
}

pub struct CommentView {
    pub id: String,
    pub author: AuthorView,
    pub content: String,
    pub created_at: String,
}

impl From<&Author> for AuthorView {
    fn from(author: &Author) -> Self {
        // Placeholder tokens render as initials; anything else is an image URL.
        let avatar_url = if author.avatar.starts_with("placeholder:") {
            None
        } else {
            Some(author.avatar.clone())
        };
        AuthorView {
            name: author.name.clone(),
            role: author.role.clone(),
            initials: initials(&author.name),
            avatar_url,
        }
    }
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        CommentView {
            id: comment.id.clone(),
            author: AuthorView::from(&comment.author),
            content: comment.content.clone(),
            created_at: format_relative_time(&comment.created_at),
        }
    }
}

impl From<&Post> for PostCard {
    fn from(post: &Post) -> Self {
        PostCard {
            id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: AuthorView::from(&post.author),
            created_at: format_relative_time(&post.created_at),
            image: post.image.clone(),
            likes: post.likes,
            is_liked: post.is_liked,
            comments: post.comments.iter().map(CommentView::from).collect(),
        }
    }
}

// --- Templates ---

#[derive(Template)]
#[template(path = "components/feed.html")]
pub struct FeedTemplate {
    pub posts: Vec<PostCard>,
    pub failed: bool,
}

#[derive(Template)]
#[template(path = "components/like_button.html")]
pub struct LikeButtonTemplate {
    pub post: PostCard,
}

#[derive(Template)]
#[template(path = "components/comment_list.html")]
pub struct CommentListTemplate {
    pub post: PostCard,
}

#[derive(Template)]
#[template(path = "pages/post.html")]
pub struct PostPageTemplate {
    pub name: String,
    pub post: PostCard,
}

// --- Forms ---

#[derive(Deserialize)]
pub struct CommentForm {
    pub body: String,
}

// --- Router ---

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feed", get(feed_fragment))
        .route("/feed/posts/{id}", get(post_page))
        .route("/feed/posts/{id}/like", post(toggle_like))
        .route("/feed/posts/{id}/comments", post(add_comment))
        .route("/feed/posts/{id}/share", post(share))
}

// --- Handlers ---

/// The feed fragment the dashboard skeleton swaps itself out for.
async fn feed_fragment(
    State(state): State<AppState>,
    UserSession(viewer): UserSession,
) -> Response {
    let store = state.feeds.for_viewer(&viewer.email).await;

    let template = match feed::load(&store, state.source.as_ref()).await {
        Ok(posts) => FeedTemplate {
            posts: posts.iter().map(|p| PostCard::from(p.as_ref())).collect(),
            failed: false,
        },
        Err(e) => {
            tracing::error!("Feed load failed for {}: {}", viewer.email, e);
            FeedTemplate {
                posts: Vec::new(),
                failed: true,
            }
        }
    };

    Html(template).into_response()
}

/// Permalink target of a shared post.
async fn post_page(
    State(state): State<AppState>,
    UserSession(viewer): UserSession,
    Path(post_id): Path<String>,
) -> AppResult<Response> {
    let store = state.feeds.for_viewer(&viewer.email).await;
    ensure_loaded(&store, &state).await?;

    let post = store
        .lock()
        .await
        .get(&post_id)
        .map(|p| PostCard::from(p.as_ref()))
        .ok_or(AppError::NotFound)?;

    Ok(Html(PostPageTemplate {
        name: viewer.name,
        post,
    })
    .into_response())
}

async fn toggle_like(
    State(state): State<AppState>,
    UserSession(viewer): UserSession,
    Path(post_id): Path<String>,
) -> Response {
    let store = state.feeds.for_viewer(&viewer.email).await;
    let updated = store.lock().await.toggle_like(&post_id);

    match updated {
        Some(post) => Html(LikeButtonTemplate {
            post: PostCard::from(post.as_ref()),
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn add_comment(
    State(state): State<AppState>,
    UserSession(viewer): UserSession,
    Path(post_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    let store = state.feeds.for_viewer(&viewer.email).await;
    let updated = store
        .lock()
        .await
        .add_comment(&post_id, &viewer_author(&viewer), &form.body);

    match updated {
        Some(post) => Html(CommentListTemplate {
            post: PostCard::from(post.as_ref()),
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn share(
    State(state): State<AppState>,
    UserSession(viewer): UserSession,
    Path(post_id): Path<String>,
) -> Json<ShareResult> {
    let store = state.feeds.for_viewer(&viewer.email).await;
    let result = store.lock().await.share(&post_id, &state.config.public_url());

    let toast = match &result {
        ShareResult::Shared { url, .. } => ToastSpec::new("Link ready to share").description(url.clone()),
        ShareResult::NotFound => ToastSpec::new("Post unavailable")
            .description("This post is no longer in your feed. Refresh to see the latest.")
            .destructive(),
    };
    state.toasts.notify(toast).await;

    Json(result)
}

// --- Helpers ---

/// Run a first load for viewers arriving by permalink before the dashboard.
async fn ensure_loaded(store: &Arc<Mutex<PostStore>>, state: &AppState) -> AppResult<()> {
    if store.lock().await.posts().is_empty() {
        feed::load(store, state.source.as_ref()).await?;
    }
    Ok(())
}

pub fn viewer_author(viewer: &SessionMarker) -> Author {
    Author {
        name: viewer.name.clone(),
        avatar: format!("placeholder:{}", initials(&viewer.name)),
        role: viewer.role.label().to_string(),
    }
}

// --- Time formatting ---

pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(*dt);

    let seconds = diff.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = diff.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = diff.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = diff.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }

    dt.format("%b %-d, %Y").to_string()
}

// --- Tests ---
