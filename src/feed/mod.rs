pub mod fixtures;
pub mod model;
pub mod registry;
pub mod source;
pub mod store;

pub use model::{Author, Comment, Post, ShareResult};
pub use registry::Feeds;
pub use source::{FeedError, MockPostSource, PostSource};
pub use store::{load, PostStore};
