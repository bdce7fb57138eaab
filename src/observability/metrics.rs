//! Operation counters.
//!
//! Monotonic counters, reset on process start, thread-safe with
//! relaxed atomics. A snapshot pairs the counters with the live
//! record count supplied by the caller at read time.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operational counters.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    blogs_created: AtomicU64,
    blogs_updated: AtomicU64,
    blogs_deleted: AtomicU64,
    queries_served: AtomicU64,
    queries_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the created-post counter.
    pub fn increment_created(&self) {
        self.blogs_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the updated-post counter.
    pub fn increment_updated(&self) {
        self.blogs_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the deleted-post counter.
    pub fn increment_deleted(&self) {
        self.blogs_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the served-query counter.
    pub fn increment_queries_served(&self) {
        self.queries_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the rejected-query counter.
    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time view of every counter.
    ///
    /// `current_blogs` is a gauge, not a counter: the registry does
    /// not track the collection size itself, so the caller reads it
    /// from the store alongside the counters.
    pub fn snapshot(&self, current_blogs: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            blogs_created: self.blogs_created.load(Ordering::Relaxed),
            blogs_updated: self.blogs_updated.load(Ordering::Relaxed),
            blogs_deleted: self.blogs_deleted.load(Ordering::Relaxed),
            queries_served: self.queries_served.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
            current_blogs,
        }
    }
}

/// Snapshot of all counters plus the record-count gauge, serialized
/// by the `/metrics` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub blogs_created: u64,
    pub blogs_updated: u64,
    pub blogs_deleted: u64,
    pub queries_served: u64,
    pub queries_rejected: u64,
    pub current_blogs: u64,
}
