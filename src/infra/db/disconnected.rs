use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::{NewPost, PostRecord};
use crate::domain::paging::PageWindow;

/// Stand-in store used when no connection could be configured.
///
/// Every call fails, so the HTTP surface keeps answering with its generic
/// failure instead of the process refusing to start.
#[derive(Debug, Clone)]
pub struct DisconnectedRepo {
    reason: String,
}

impl DisconnectedRepo {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> RepoError {
        RepoError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl PostsRepo for DisconnectedRepo {
    async fn count_posts(&self) -> Result<u64, RepoError> {
        Err(self.error())
    }

    async fn list_posts(&self, _window: PageWindow) -> Result<Vec<PostRecord>, RepoError> {
        Err(self.error())
    }

    async fn insert_post(&self, _post: NewPost) -> Result<PostRecord, RepoError> {
        Err(self.error())
    }
}
