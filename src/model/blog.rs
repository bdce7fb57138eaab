//! Blog record and draft types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// A stored blog post.
///
/// The id and both timestamps are assigned by the store, never by
/// callers. `created_at` is set once at insert and survives every
/// update; `updated_at` is refreshed on each update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or fully replacing a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: Category,
}

impl BlogDraft {
    /// Build a draft from its four fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            category,
        }
    }
}
