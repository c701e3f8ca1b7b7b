mod support;

use std::sync::Arc;

use axum::http::{StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};

use postboard::infra::db::DisconnectedRepo;

use support::{MemoryPostsRepo, body_to_json, body_to_string, get, router_for};

fn ids(payload: &Value) -> Vec<i64> {
    payload["data"]["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|post| post["id"].as_i64().expect("post id"))
        .collect()
}

#[tokio::test]
async fn first_page_of_seven_with_limit_five() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(7)));

    let response = get(&router, "/posts?pageNumber=0&limit=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["msg"], "Post Fetched successfully");
    assert_eq!(payload["data"]["totalPosts"], 7);
    assert_eq!(payload["data"]["rowsPerPage"], 5);
    assert_eq!(payload["data"]["next"], json!({ "pageNumber": 1, "limit": 5 }));
    assert!(payload["data"].get("previous").is_none());
    assert_eq!(ids(&payload), vec![7, 6, 5, 4, 3]);
}

#[tokio::test]
async fn second_page_of_seven_with_limit_five() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(7)));

    let response = get(&router, "/posts?pageNumber=1&limit=5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_to_json(response.into_body()).await;
    assert_eq!(ids(&payload), vec![2, 1]);
    assert!(payload["data"].get("next").is_none());
    assert_eq!(
        payload["data"]["previous"],
        json!({ "pageNumber": 0, "limit": 5 })
    );
}

#[tokio::test]
async fn missing_parameters_use_page_zero_and_twelve_rows() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(20)));

    let payload = body_to_json(get(&router, "/posts").await.into_body()).await;
    assert_eq!(payload["data"]["rowsPerPage"], 12);
    assert_eq!(ids(&payload).len(), 12);
    assert_eq!(ids(&payload)[0], 20);
    assert_eq!(payload["data"]["next"], json!({ "pageNumber": 1, "limit": 12 }));
}

#[tokio::test]
async fn unparseable_parameters_fall_back_to_defaults() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(3)));

    let response = get(&router, "/posts?pageNumber=abc&limit=zero").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["data"]["rowsPerPage"], 12);
    assert_eq!(ids(&payload), vec![3, 2, 1]);
}

#[tokio::test]
async fn trailing_garbage_after_digits_is_ignored() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(9)));

    let response = get(&router, "/posts?pageNumber=1x&limit=4.5").await;
    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["data"]["rowsPerPage"], 4);
    assert_eq!(ids(&payload), vec![5, 4, 3, 2]);
}

#[tokio::test]
async fn repeated_keys_use_their_first_value() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(8)));

    let response = get(&router, "/posts?limit=3&limit=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["msg"], "Post Fetched successfully");
    assert_eq!(payload["data"]["rowsPerPage"], 3);
    assert_eq!(ids(&payload), vec![8, 7, 6]);

    let response = get(&router, "/posts?pageNumber=1&pageNumber=0&limit=3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_to_json(response.into_body()).await;
    assert_eq!(ids(&payload), vec![5, 4, 3]);
}

#[tokio::test]
async fn hex_parameters_are_read_as_hexadecimal() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(20)));

    let response = get(&router, "/posts?pageNumber=0x1&limit=0x10").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["data"]["rowsPerPage"], 16);
    assert_eq!(ids(&payload), vec![4, 3, 2, 1]);
}

#[tokio::test]
async fn pages_past_the_end_are_empty() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(4)));

    let response = get(&router, "/posts?pageNumber=5&limit=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload["data"]["data"], json!([]));
    assert_eq!(payload["data"]["totalPosts"], 4);
    assert!(payload["data"].get("next").is_none());
    assert_eq!(
        payload["data"]["previous"],
        json!({ "pageNumber": 4, "limit": 3 })
    );
}

#[tokio::test]
async fn negative_parameters_are_rejected() {
    let router = router_for(Arc::new(MemoryPostsRepo::with_posts(4)));

    for uri in ["/posts?pageNumber=-1", "/posts?limit=-3"] {
        let response = get(&router, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let payload = body_to_json(response.into_body()).await;
        assert_eq!(payload, json!({ "msg": "Invalid pagination parameters" }));
    }
}

#[tokio::test]
async fn unreachable_store_returns_generic_failure() {
    let router = router_for(Arc::new(DisconnectedRepo::new("connection refused")));

    let response = get(&router, "/posts?pageNumber=0&limit=5").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = body_to_json(response.into_body()).await;
    assert_eq!(payload, json!({ "msg": "Sorry, something went wrong" }));
}

#[tokio::test]
async fn index_serves_the_viewer_page() {
    let router = router_for(Arc::new(MemoryPostsRepo::default()));

    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Posts per page:"));
    assert!(html.contains("prevPage()"));
    assert!(html.contains("nextPage()"));
    assert!(html.contains("total posts"));
}

#[tokio::test]
async fn health_without_database_is_unavailable() {
    let router = router_for(Arc::new(MemoryPostsRepo::default()));

    let response = get(&router, "/_health/db").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
