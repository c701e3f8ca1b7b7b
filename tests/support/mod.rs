#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use postboard::application::pagination::PostListService;
use postboard::application::repos::{PostsRepo, RepoError};
use postboard::domain::entities::{NewPost, PostRecord};
use postboard::domain::paging::PageWindow;
use postboard::infra::http::{HttpState, build_router};

/// In-memory store with Postgres-like identity assignment.
#[derive(Default)]
pub struct MemoryPostsRepo {
    posts: Mutex<Vec<PostRecord>>,
}

impl MemoryPostsRepo {
    pub fn with_posts(count: i64) -> Self {
        let repo = Self::default();
        for n in 1..=count {
            repo.push(NewPost {
                title: format!("title {n}"),
                body: format!("body {n}"),
                user_id: 1,
            });
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.posts.lock().expect("lock").len()
    }

    fn push(&self, post: NewPost) -> PostRecord {
        let mut posts = self.posts.lock().expect("lock");
        let record = PostRecord {
            id: posts.last().map_or(1, |last| last.id + 1),
            title: post.title,
            body: post.body,
            user_id: post.user_id,
        };
        posts.push(record.clone());
        record
    }
}

#[async_trait]
impl PostsRepo for MemoryPostsRepo {
    async fn count_posts(&self) -> Result<u64, RepoError> {
        Ok(self.len() as u64)
    }

    async fn list_posts(&self, window: PageWindow) -> Result<Vec<PostRecord>, RepoError> {
        let posts = self.posts.lock().expect("lock");
        Ok(posts
            .iter()
            .rev()
            .skip(window.start() as usize)
            .take(window.limit() as usize)
            .cloned()
            .collect())
    }

    async fn insert_post(&self, post: NewPost) -> Result<PostRecord, RepoError> {
        Ok(self.push(post))
    }
}

pub fn router_for(repo: Arc<dyn PostsRepo>) -> Router {
    build_router(HttpState {
        posts: Arc::new(PostListService::new(repo)),
        db: None,
    })
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    router
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.expect("collect body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    let text = body_to_string(body).await;
    serde_json::from_str(&text).expect("json body")
}
