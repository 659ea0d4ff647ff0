use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::feed::model::{Author, Comment, Post, ShareResult};
use crate::feed::source::{FeedError, PostSource};

/// Issued when a load starts; only the ticket of the most recent load may
/// apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// One viewer's feed.
///
/// Posts are held as shared snapshots. A mutation swaps in a new `Arc` for the
/// affected post only, so snapshots handed out earlier never change and
/// untouched posts keep their identity.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Arc<Post>>,
    generation: u64,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    pub fn get(&self, post_id: &str) -> Option<&Arc<Post>> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Replace the feed with `posts` unless a newer load has started since
    /// `ticket` was issued. Returns whether the result was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, posts: Vec<Post>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.posts = posts.into_iter().map(Arc::new).collect();
        true
    }

    /// Flip the viewer's like on a post. Unknown ids leave the store as is.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<Arc<Post>> {
        let idx = self.position(post_id)?;
        let next = Arc::new(self.posts[idx].toggled_like());
        self.posts[idx] = Arc::clone(&next);
        Some(next)
    }

    /// Append a comment by `author`. Blank text and unknown ids are ignored.
    pub fn add_comment(&mut self, post_id: &str, author: &Author, text: &str) -> Option<Arc<Post>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let idx = self.position(post_id)?;

        let comment = Comment {
            id: uuid::Uuid::now_v7().to_string(),
            author: author.clone(),
            content: text.to_string(),
            created_at: Utc::now(),
        };
        let next = Arc::new(self.posts[idx].with_comment(comment));
        self.posts[idx] = Arc::clone(&next);
        Some(next)
    }

    pub fn share(&self, post_id: &str, base_url: &str) -> ShareResult {
        match self.get(post_id) {
            Some(post) => ShareResult::Shared {
                post_id: post.id.clone(),
                title: post.title.clone(),
                url: format!("{}/feed/posts/{}", base_url.trim_end_matches('/'), post.id),
            },
            None => ShareResult::NotFound,
        }
    }

    fn position(&self, post_id: &str) -> Option<usize> {
        let idx = self.posts.iter().position(|p| p.id == post_id);
        if idx.is_none() {
            tracing::debug!("Ignoring action on unknown post {}", post_id);
        }
        idx
    }
}

/// Fetch from `source` and apply the result to `store`.
///
/// The lock is not held across the fetch. If another load starts meanwhile,
/// this one's result is dropped and the caller gets whatever the store holds.
pub async fn load(
    store: &Mutex<PostStore>,
    source: &dyn PostSource,
) -> Result<Vec<Arc<Post>>, FeedError> {
    let ticket = store.lock().await.begin_load();
    let fetched = source.fetch().await?;

    let mut store = store.lock().await;
    if !store.finish_load(ticket, fetched) {
        tracing::warn!("Discarding superseded feed load");
    }
    Ok(store.posts().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures::mock_posts;
    use async_trait::async_trait;

    fn loaded() -> PostStore {
        let mut store = PostStore::new();
        let ticket = store.begin_load();
        assert!(store.finish_load(ticket, mock_posts()));
        store
    }

    fn viewer() -> Author {
        Author {
            name: "Test Viewer".into(),
            avatar: "placeholder:TV".into(),
            role: "Researcher".into(),
        }
    }

    #[test]
    fn toggle_like_on_liked_post_decrements() {
        let mut store = loaded();

        let post = store.toggle_like("post-3").unwrap();

        assert!(!post.is_liked);
        assert_eq!(post.likes, 55);
        assert_eq!(store.get("post-3").unwrap().likes, 55);
    }

    #[test]
    fn toggle_like_twice_restores_original() {
        let mut store = loaded();
        for original in mock_posts() {
            store.toggle_like(&original.id);
            let post = store.toggle_like(&original.id).unwrap();
            assert_eq!(post.likes, original.likes);
            assert_eq!(post.is_liked, original.is_liked);
        }
    }

    #[test]
    fn toggle_like_unknown_id_changes_nothing() {
        let mut store = loaded();
        let before = store.posts().to_vec();

        assert!(store.toggle_like("post-404").is_none());

        let after = store.posts();
        assert_eq!(before.len(), after.len());
        assert!(before.iter().zip(after).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn toggle_like_keeps_old_snapshots_and_untouched_identities() {
        let mut store = loaded();
        let before = store.posts().to_vec();

        store.toggle_like("post-1");

        let after = store.posts();
        assert_eq!(before[0].likes, 24);
        assert!(!before[0].is_liked);
        assert!(!Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&before[2], &after[2]));
    }

    #[test]
    fn add_comment_ignores_blank_text() {
        let mut store = loaded();

        assert!(store.add_comment("post-1", &viewer(), "").is_none());
        assert!(store.add_comment("post-1", &viewer(), "   ").is_none());

        assert_eq!(store.get("post-1").unwrap().comments.len(), 1);
    }

    #[test]
    fn add_comment_appends_at_end() {
        let mut store = loaded();

        let post = store.add_comment("post-3", &viewer(), "hello").unwrap();

        assert_eq!(post.comments.len(), 3);
        let last = post.comments.last().unwrap();
        assert_eq!(last.content, "hello");
        assert_eq!(last.author.name, "Test Viewer");
        assert_eq!(post.comments[0].id, "comment-2");
    }

    #[test]
    fn add_comment_trims_text() {
        let mut store = loaded();
        let post = store.add_comment("post-2", &viewer(), "  spaced  ").unwrap();
        assert_eq!(post.comments[0].content, "spaced");
    }

    #[test]
    fn add_comment_generates_distinct_ids() {
        let mut store = loaded();
        store.add_comment("post-2", &viewer(), "one");
        let post = store.add_comment("post-2", &viewer(), "two").unwrap();
        assert_ne!(post.comments[0].id, post.comments[1].id);
    }

    #[test]
    fn add_comment_unknown_id_is_noop() {
        let mut store = loaded();
        let before = store.posts().to_vec();

        assert!(store.add_comment("nope", &viewer(), "hello").is_none());

        assert!(before.iter().zip(store.posts()).all(|(a, b)| Arc::ptr_eq(a, b)));
    }

    #[test]
    fn share_builds_post_url() {
        let store = loaded();
        assert_eq!(
            store.share("post-2", "http://portal.local/"),
            ShareResult::Shared {
                post_id: "post-2".into(),
                title: "Consent form template updated".into(),
                url: "http://portal.local/feed/posts/post-2".into(),
            }
        );
    }

    #[test]
    fn share_unknown_id_is_not_found() {
        let store = loaded();
        assert_eq!(store.share("ghost", "http://x"), ShareResult::NotFound);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut store = PostStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        assert!(store.finish_load(second, mock_posts()));
        assert!(!store.finish_load(first, vec![]));
        assert_eq!(store.posts().len(), 3);
    }

    #[test]
    fn reload_supersedes_mutations() {
        let mut store = loaded();
        store.toggle_like("post-1");

        let ticket = store.begin_load();
        store.finish_load(ticket, mock_posts());

        assert_eq!(store.get("post-1").unwrap().likes, 24);
    }

    struct Failing;

    #[async_trait]
    impl PostSource for Failing {
        async fn fetch(&self) -> Result<Vec<Post>, FeedError> {
            Err(FeedError::Unavailable("down".into()))
        }

        async fn publish(&self, _post: Post) -> Result<(), FeedError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn load_propagates_source_failure() {
        let store = Mutex::new(PostStore::new());
        assert!(load(&store, &Failing).await.is_err());
        assert!(store.lock().await.posts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn load_applies_source_result() {
        let store = Mutex::new(PostStore::new());
        let source = crate::feed::source::MockPostSource::new(std::time::Duration::from_millis(500));

        let posts = load(&store, &source).await.unwrap();

        assert_eq!(posts.len(), 3);
        assert_eq!(store.lock().await.posts().len(), 3);
    }
}
