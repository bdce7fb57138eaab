//! Blog HTTP routes.
//!
//! Thin translation of HTTP verbs and paths onto blog store calls.
//! All state mutation happens inside the store; handlers only lock,
//! call, and serialize.

use std::sync::{Arc, RwLock};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::model::{AuthorSummary, Blog, BlogDraft, Category, CategorySummary};
use crate::observability::{self, Event, MetricsRegistry, MetricsSnapshot};
use crate::store::{BlogFilter, BlogStore, SearchOutcome};

use super::errors::{ApiError, ApiResult};
use super::response::{ListResponse, MessageResponse, SingleResponse};

// ==================
// Shared State
// ==================

/// State shared across handlers
pub struct ApiState {
    store: RwLock<BlogStore>,
    metrics: MetricsRegistry,
}

impl ApiState {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BlogStore::new()),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Run a read operation under the read lock, counting and logging
    /// it as a served or rejected query.
    fn query<T>(&self, f: impl FnOnce(&BlogStore) -> ApiResult<T>) -> ApiResult<T> {
        let store = self.store.read().map_err(|_| ApiError::LockPoisoned)?;
        let result = f(&store);

        match &result {
            Ok(_) => {
                self.metrics.increment_queries_served();
                observability::log_event(Event::QueryServed);
            }
            Err(err) => {
                self.metrics.increment_queries_rejected();
                observability::log_event_with_fields(
                    Event::QueryRejected,
                    &[("reason", &err.to_string())],
                );
            }
        }

        result
    }

    /// Run a mutation under the write lock.
    fn mutate<T>(&self, f: impl FnOnce(&mut BlogStore) -> ApiResult<T>) -> ApiResult<T> {
        let mut store = self.store.write().map_err(|_| ApiError::LockPoisoned)?;
        f(&mut store)
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

/// Query parameters for `GET /blogs`
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub category: Option<Category>,
    pub author: Option<String>,
    pub keyword: Option<String>,
}

impl FilterQuery {
    fn is_empty(&self) -> bool {
        self.category.is_none() && self.author.is_none() && self.keyword.is_none()
    }

    fn into_filter(self) -> BlogFilter {
        BlogFilter {
            category: self.category,
            author: self.author,
            keyword: self.keyword,
        }
    }
}

/// Query parameters for `GET /blogs_category`
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Category,
}

/// Query parameters for `GET /blogs_search`
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
}

/// Body of the `/health` endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub blogs: usize,
}

// ==================
// Routes
// ==================

/// Create the blog routes
pub fn blog_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/blogs", post(create_blog_handler))
        .route("/blogs", get(list_blogs_handler))
        .route("/blogs/{id}", get(get_blog_handler))
        .route("/blogs/{id}", put(update_blog_handler))
        .route("/blogs/{id}", delete(delete_blog_handler))
        .route("/blogs_category", get(blogs_by_category_handler))
        .route("/blogs_search", get(search_blogs_handler))
        .route("/summary/authors", get(author_summary_handler))
        .route("/summary/categories", get(category_summary_handler))
        .with_state(state)
}

/// Create the health and metrics routes
pub fn health_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Create a blog post
async fn create_blog_handler(
    State(state): State<Arc<ApiState>>,
    Json(draft): Json<BlogDraft>,
) -> ApiResult<(StatusCode, Json<SingleResponse<Blog>>)> {
    let blog = state.mutate(|store| Ok(store.insert(draft)?))?;

    state.metrics.increment_created();
    observability::log_event_with_fields(
        Event::BlogCreated,
        &[("id", &blog.id.to_string()), ("author", &blog.author)],
    );

    Ok((StatusCode::CREATED, Json(SingleResponse::new(blog))))
}

/// List or filter blog posts
///
/// With no query parameters this is a full listing; with any of
/// `category`, `author`, `keyword` it returns the union of records
/// matching at least one criterion.
async fn list_blogs_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Json<ListResponse<Blog>>> {
    let blogs = if query.is_empty() {
        state.query(|store| Ok(store.list_all()?))?
    } else {
        let filter = query.into_filter();
        state.query(|store| Ok(store.filter(&filter)?))?
    };

    Ok(Json(ListResponse::new(blogs)))
}

/// Get a single blog post by id
async fn get_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<SingleResponse<Blog>>> {
    let blog = state.query(|store| Ok(store.get(id)?))?;
    Ok(Json(SingleResponse::new(blog)))
}

/// Replace a blog post
async fn update_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
    Json(draft): Json<BlogDraft>,
) -> ApiResult<Json<SingleResponse<Blog>>> {
    let blog = state.mutate(|store| Ok(store.update(id, draft)?))?;

    state.metrics.increment_updated();
    observability::log_event_with_fields(Event::BlogUpdated, &[("id", &id.to_string())]);

    Ok(Json(SingleResponse::new(blog)))
}

/// Delete a blog post
async fn delete_blog_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state.mutate(|store| Ok(store.delete(id)?))?;

    state.metrics.increment_deleted();
    observability::log_event_with_fields(Event::BlogDeleted, &[("id", &id.to_string())]);

    Ok(StatusCode::NO_CONTENT)
}

/// List blog posts in one category
async fn blogs_by_category_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Json<ListResponse<Blog>>> {
    let blogs = state.query(|store| Ok(store.list_by_category(query.category)?))?;
    Ok(Json(ListResponse::new(blogs)))
}

/// Search blog posts by keyword
///
/// A miss is a 200 with a message, never an error.
async fn search_blogs_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Response> {
    let outcome = state.query(|store| Ok(store.search(&query.keyword)))?;

    let response = match outcome {
        SearchOutcome::Matches(blogs) => Json(ListResponse::new(blogs)).into_response(),
        SearchOutcome::NoMatch => {
            Json(MessageResponse::new("no blog matches the search keyword")).into_response()
        }
    };

    Ok(response)
}

/// Per-author post counts
async fn author_summary_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<ListResponse<AuthorSummary>>> {
    let summaries = state.query(|store| Ok(store.author_summary()))?;
    Ok(Json(ListResponse::new(summaries)))
}

/// Per-category post counts
async fn category_summary_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<ListResponse<CategorySummary>>> {
    let summaries = state.query(|store| Ok(store.category_summary()))?;
    Ok(Json(ListResponse::new(summaries)))
}

/// Liveness probe with the current record count
async fn health_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<HealthResponse>> {
    let store = state.store.read().map_err(|_| ApiError::LockPoisoned)?;

    Ok(Json(HealthResponse {
        status: "ok",
        blogs: store.len(),
    }))
}

/// Counter snapshot plus the live record count
async fn metrics_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<MetricsSnapshot>> {
    let store = state.store.read().map_err(|_| ApiError::LockPoisoned)?;
    Ok(Json(state.metrics.snapshot(store.len() as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_query_emptiness() {
        assert!(FilterQuery::default().is_empty());

        let query = FilterQuery {
            keyword: Some("rust".to_string()),
            ..Default::default()
        };
        assert!(!query.is_empty());
    }

    #[test]
    fn test_filter_query_conversion() {
        let query = FilterQuery {
            category: Some(Category::Technology),
            author: Some("bob".to_string()),
            keyword: None,
        };

        let filter = query.into_filter();
        assert_eq!(filter.category, Some(Category::Technology));
        assert_eq!(filter.author.as_deref(), Some("bob"));
        assert!(filter.keyword.is_none());
    }

    #[test]
    fn test_routers_build() {
        let state = Arc::new(ApiState::new());
        let _blogs = blog_routes(state.clone());
        let _health = health_routes(state);
    }
}
