use askama::Template;
use axum::routing::get;
use axum::Router;

use crate::extractors::UserSession;
use crate::routes::home::Html;
use crate::state::AppState;

/// Dashboard shell. The feed itself arrives separately: the page ships a
/// skeleton shaped like the post cards, which fetches `/feed` once mounted.
#[derive(Template)]
#[template(path = "pages/dashboard.html")]
struct DashboardTemplate {
    name: String,
    skeletons: Vec<usize>,
}

const SKELETON_CARDS: usize = 3;

async fn dashboard(UserSession(viewer): UserSession) -> Html<DashboardTemplate> {
    Html(DashboardTemplate {
        name: viewer.name,
        skeletons: (0..SKELETON_CARDS).collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}
