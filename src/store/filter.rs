//! Filter criteria for querying the store.

use crate::model::{Blog, Category};

/// Optional criteria combined as a union.
///
/// A record matches when it satisfies ANY supplied criterion: its
/// category equals `category`, its author contains `author`, or its
/// title or content contains `keyword`. Substring matching is
/// case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct BlogFilter {
    /// Exact category match
    pub category: Option<Category>,
    /// Substring of the author field
    pub author: Option<String>,
    /// Substring of the title or content
    pub keyword: Option<String>,
}

impl BlogFilter {
    /// Filter with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Match authors containing the given text.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Match titles or contents containing the given text.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// True when no criterion was supplied.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.author.is_none() && self.keyword.is_none()
    }

    /// Whether a record satisfies at least one supplied criterion.
    pub fn matches(&self, blog: &Blog) -> bool {
        if let Some(category) = self.category {
            if blog.category == category {
                return true;
            }
        }

        if let Some(author) = &self.author {
            if blog.author.contains(author.as_str()) {
                return true;
            }
        }

        if let Some(keyword) = &self.keyword {
            if blog.title.contains(keyword.as_str()) || blog.content.contains(keyword.as_str()) {
                return true;
            }
        }

        false
    }
}
