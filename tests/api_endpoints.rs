//! HTTP Endpoint Tests
//!
//! Drives the combined router with tower's oneshot, no live listener.
//! Each test builds a fresh server; the router clones share one state,
//! so sequential requests observe each other's writes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use quill::api::ApiServer;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_router() -> Router {
    ApiServer::new().router()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    // Empty bodies and axum's plain-text extractor rejections both
    // land on Null.
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_blog(title: &str, content: &str, author: &str, category: &str) -> Request<Body> {
    json_request(
        "POST",
        "/blogs",
        json!({
            "title": title,
            "content": content,
            "author": author,
            "category": category,
        }),
    )
}

async fn seed(router: &Router) {
    for (title, content, author, category) in [
        ("rust tips", "borrow checker notes", "alice", "technology"),
        ("morning routine", "coffee first", "bob", "lifestyle"),
        ("quarterly report", "numbers are up", "alice", "business"),
    ] {
        let (status, _) = send(router, post_blog(title, content, author, category)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_blog_returns_created_record() {
    let router = test_router();

    let (status, body) = send(&router, post_blog("A", "hello", "bob", "technology")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["title"], "A");
    assert_eq!(body["data"]["category"], "technology");
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_blog_with_empty_title_is_unprocessable() {
    let router = test_router();

    let (status, body) = send(&router, post_blog("", "hello", "bob", "technology")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 422);
    assert_eq!(body["error"], "required field `title` is empty");
}

#[tokio::test]
async fn test_create_blog_with_unknown_category_is_rejected() {
    let router = test_router();

    let (status, _) = send(&router, post_blog("A", "hello", "bob", "gardening")).await;

    // Unknown categories never reach the store; axum rejects the body
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// List & Filter
// =============================================================================

#[tokio::test]
async fn test_list_blogs_on_empty_store_is_no_content() {
    let router = test_router();

    let (status, body) = send(&router, get("/blogs")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_list_blogs_returns_all_in_insertion_order() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][2]["title"], "quarterly report");
}

#[tokio::test]
async fn test_filter_blogs_is_a_union_of_criteria() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs?author=bob&keyword=numbers")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], 2);
    assert_eq!(body["data"][1]["id"], 3);
}

#[tokio::test]
async fn test_filter_blogs_with_no_match_is_not_found() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs?keyword=zzz")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

// =============================================================================
// Get / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_get_blog_by_id() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["author"], "bob");
}

#[tokio::test]
async fn test_get_unknown_blog_is_not_found() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "blog 99 not found");
}

#[tokio::test]
async fn test_update_blog_replaces_fields_and_keeps_id() {
    let router = test_router();
    seed(&router).await;

    let (_, before) = send(&router, get("/blogs/2")).await;

    let (status, body) = send(
        &router,
        json_request(
            "PUT",
            "/blogs/2",
            json!({
                "title": "evening routine",
                "content": "tea instead",
                "author": "carol",
                "category": "education",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["title"], "evening routine");
    assert_eq!(body["data"]["created_at"], before["data"]["created_at"]);
}

#[tokio::test]
async fn test_update_unknown_blog_is_not_found() {
    let router = test_router();
    seed(&router).await;

    let (status, _) = send(
        &router,
        json_request(
            "PUT",
            "/blogs/42",
            json!({
                "title": "x",
                "content": "y",
                "author": "z",
                "category": "other",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_blog_then_get_fails() {
    let router = test_router();
    seed(&router).await;

    let delete = |uri: &str| {
        Request::builder()
            .method("DELETE")
            .uri(uri.to_string())
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = send(&router, delete("/blogs/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&router, get("/blogs/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting the same id again fails
    let (status, _) = send(&router, delete("/blogs/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Category & Search
// =============================================================================

#[tokio::test]
async fn test_blogs_by_category() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs_category?category=business")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["title"], "quarterly report");

    let (status, _) = send(&router, get("/blogs_category?category=entertainment")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_returns_matching_blogs() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs_search?keyword=coffee")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id"], 2);
}

#[tokio::test]
async fn test_search_miss_is_a_message_not_an_error() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/blogs_search?keyword=zzz")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "no blog matches the search keyword");
}

// =============================================================================
// Summaries
// =============================================================================

#[tokio::test]
async fn test_author_summary() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/summary/authors")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["author"], "alice");
    assert_eq!(body["data"][0]["blog_count"], 2);
    assert_eq!(body["data"][1]["author"], "bob");
    assert_eq!(body["data"][1]["blog_count"], 1);
}

#[tokio::test]
async fn test_category_summary() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/summary/categories")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0]["category"], "technology");
    assert_eq!(body["data"][0]["blog_count"], 1);
}

// =============================================================================
// Health & Metrics
// =============================================================================

#[tokio::test]
async fn test_health_reports_record_count() {
    let router = test_router();
    seed(&router).await;

    let (status, body) = send(&router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["blogs"], 3);
}

#[tokio::test]
async fn test_metrics_counts_operations() {
    let router = test_router();
    seed(&router).await;

    // One served read and one rejected read
    send(&router, get("/blogs")).await;
    send(&router, get("/blogs/99")).await;

    let (status, body) = send(&router, get("/metrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["blogs_created"], 3);
    assert_eq!(body["queries_served"], 1);
    assert_eq!(body["queries_rejected"], 1);
    assert_eq!(body["current_blogs"], 3);
}
