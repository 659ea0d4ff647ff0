use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Avatar URL, or a placeholder token such as `placeholder:initials`.
    pub avatar: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A single feed entry as seen by one viewer.
///
/// `likes` and `is_liked` move together: see [`Post::toggled_like`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
    pub likes: u32,
    pub is_liked: bool,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Returns a copy with the like flag flipped and the count adjusted by one.
    pub fn toggled_like(&self) -> Post {
        let mut next = self.clone();
        if next.is_liked {
            next.likes = next.likes.saturating_sub(1);
        } else {
            next.likes = next.likes.saturating_add(1);
        }
        next.is_liked = !next.is_liked;
        next
    }

    /// Returns a copy with `comment` appended after the existing comments.
    pub fn with_comment(&self, comment: Comment) -> Post {
        let mut next = self.clone();
        next.comments.push(comment);
        next
    }
}

/// What a share action hands back to the caller for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareResult {
    Shared {
        post_id: String,
        title: String,
        url: String,
    },
    NotFound,
}
