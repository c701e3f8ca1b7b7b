use crate::application::repos::RepoError;
use crate::domain::entities::{NewPost, PostRecord};

use super::super::PostgresRepositories;
use super::types::PostRow;
use crate::infra::db::map_sqlx_error;

impl PostgresRepositories {
    pub(super) async fn insert_post_row(&self, post: NewPost) -> Result<PostRecord, RepoError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, body, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, body, user_id
            "#,
        )
        .bind(post.title)
        .bind(post.body)
        .bind(post.user_id)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }
}
