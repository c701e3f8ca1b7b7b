use axum::Json;
use axum::extract::{Query, State};

use crate::application::pagination::{PageParams, PostPage};
use crate::infra::http::HttpState;

use super::error::ApiError;
use super::models::{ApiEnvelope, POSTS_FETCHED_MESSAGE, PostListQuery};

pub async fn list_posts(
    State(state): State<HttpState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<ApiEnvelope<PostPage>>, ApiError> {
    let query = PostListQuery::from_pairs(pairs);
    let params = PageParams::from_raw(query.page_number.as_deref(), query.limit.as_deref());
    let page = state.posts.list_posts(params).await?;

    Ok(Json(ApiEnvelope::new(POSTS_FETCHED_MESSAGE, page)))
}
