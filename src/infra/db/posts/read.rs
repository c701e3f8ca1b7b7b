use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::{NewPost, PostRecord};
use crate::domain::paging::PageWindow;

use super::super::PostgresRepositories;
use super::types::PostRow;
use crate::infra::db::map_sqlx_error;

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn count_posts(&self) -> Result<u64, RepoError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Self::convert_count(count)
    }

    async fn list_posts(&self, window: PageWindow) -> Result<Vec<PostRecord>, RepoError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, user_id
            FROM posts
            ORDER BY id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(window.start())
        .bind(window.limit())
        .fetch_all(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PostRecord::from).collect())
    }

    async fn insert_post(&self, post: NewPost) -> Result<PostRecord, RepoError> {
        self.insert_post_row(post).await
    }
}
