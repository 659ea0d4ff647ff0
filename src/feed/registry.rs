use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::feed::store::PostStore;

/// Per-viewer feeds, keyed by the viewer's email.
///
/// `is_liked` is viewer state, so each signed-in viewer gets their own store.
#[derive(Clone, Default)]
pub struct Feeds {
    inner: Arc<Mutex<HashMap<String, Arc<Mutex<PostStore>>>>>,
}

impl Feeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// The viewer's store, created empty on first use.
    pub async fn for_viewer(&self, viewer: &str) -> Arc<Mutex<PostStore>> {
        let mut feeds = self.inner.lock().await;
        Arc::clone(
            feeds
                .entry(viewer.to_ascii_lowercase())
                .or_insert_with(|| Arc::new(Mutex::new(PostStore::new()))),
        )
    }

    /// Drop the viewer's store, e.g. at logout.
    pub async fn forget(&self, viewer: &str) {
        self.inner.lock().await.remove(&viewer.to_ascii_lowercase());
    }
}
