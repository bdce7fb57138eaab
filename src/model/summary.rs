//! Derived per-author and per-category counts.
//!
//! Summaries are recomputed on demand from the live collection and are
//! never stored.

use serde::{Deserialize, Serialize};

use super::Category;

/// Count of posts owned by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub author: String,
    pub blog_count: u64,
}

/// Count of posts in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub blog_count: u64,
}
