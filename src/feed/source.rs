use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::feed::fixtures;
use crate::feed::model::Post;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed unavailable: {0}")]
    Unavailable(String),
}

/// Where the feed comes from. The only implementation in this crate is the
/// in-memory mock; the trait is the seam a real backend would plug into.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the full feed, newest first.
    async fn fetch(&self) -> Result<Vec<Post>, FeedError>;

    /// Add a newly authored post so that subsequent fetches include it.
    async fn publish(&self, post: Post) -> Result<(), FeedError>;
}

/// Simulated backend: fixture posts plus anything published since startup,
/// served after a fixed delay.
pub struct MockPostSource {
    delay: Duration,
    published: RwLock<Vec<Post>>,
}

impl MockPostSource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            published: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn fetch(&self) -> Result<Vec<Post>, FeedError> {
        tokio::time::sleep(self.delay).await;

        let published = self.published.read().await;
        let mut posts: Vec<Post> = published.iter().rev().cloned().collect();
        posts.extend(fixtures::mock_posts());
        Ok(posts)
    }

    async fn publish(&self, post: Post) -> Result<(), FeedError> {
        tracing::info!("Publishing post {} ({})", post.id, post.title);
        self.published.write().await.push(post);
        Ok(())
    }
}
