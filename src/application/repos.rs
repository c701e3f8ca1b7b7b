//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{NewPost, PostRecord};
use crate::domain::paging::PageWindow;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// Total number of stored posts.
    async fn count_posts(&self) -> Result<u64, RepoError>;

    /// Posts ordered newest first, sliced by the given window.
    async fn list_posts(&self, window: PageWindow) -> Result<Vec<PostRecord>, RepoError>;

    /// Persist a single post and return it with its assigned identity.
    async fn insert_post(&self, post: NewPost) -> Result<PostRecord, RepoError>;
}
