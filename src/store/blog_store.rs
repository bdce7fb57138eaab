//! The in-memory blog collection.

use chrono::Utc;

use crate::model::{AuthorSummary, Blog, BlogDraft, Category, CategorySummary};

use super::error::{StoreError, StoreResult};
use super::filter::BlogFilter;

/// Outcome of a keyword search.
///
/// A search that finds nothing reports [`SearchOutcome::NoMatch`]
/// instead of an error; the HTTP layer renders it as a message with a
/// 200 status.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Matches(Vec<Blog>),
    NoMatch,
}

/// Sole owner of the blog collection and the id counter.
///
/// Records are kept in insertion order. Ids start at 1, increase
/// strictly, and are never reused within the lifetime of a store, even
/// after deletes. All scans are linear; the expected scale is small
/// enough that no index is kept.
#[derive(Debug)]
pub struct BlogStore {
    blogs: Vec<Blog>,
    next_id: u64,
}

impl BlogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            blogs: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    /// Allocate the next record id.
    ///
    /// Called only after validation has passed, so a rejected draft
    /// never consumes an id.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert a new record from a draft.
    ///
    /// Rejects drafts with an empty title, content, or author without
    /// touching the collection or the counter. On success the new
    /// record carries the next id and `created_at == updated_at`.
    pub fn insert(&mut self, draft: BlogDraft) -> StoreResult<Blog> {
        validate_draft(&draft)?;

        let now = Utc::now();
        let blog = Blog {
            id: self.allocate_id(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            category: draft.category,
            created_at: now,
            updated_at: now,
        };

        self.blogs.push(blog.clone());
        Ok(blog)
    }

    /// Every record in insertion order.
    ///
    /// An empty store is an error, not an empty listing. The HTTP
    /// layer maps it to a bodyless 204.
    pub fn list_all(&self) -> StoreResult<Vec<Blog>> {
        if self.blogs.is_empty() {
            return Err(StoreError::Empty);
        }

        Ok(self.blogs.clone())
    }

    /// Records matching any supplied criterion, in insertion order.
    ///
    /// Each matching record appears once, no matter how many criteria
    /// it satisfies. An empty filter degenerates to a full scan.
    pub fn filter(&self, filter: &BlogFilter) -> StoreResult<Vec<Blog>> {
        let matched: Vec<Blog> = if filter.is_empty() {
            self.blogs.clone()
        } else {
            self.blogs
                .iter()
                .filter(|blog| filter.matches(blog))
                .cloned()
                .collect()
        };

        if matched.is_empty() {
            return Err(StoreError::NoMatch);
        }

        Ok(matched)
    }

    /// Point lookup by id.
    pub fn get(&self, id: u64) -> StoreResult<Blog> {
        self.blogs
            .iter()
            .find(|blog| blog.id == id)
            .cloned()
            .ok_or(StoreError::BlogNotFound(id))
    }

    /// Replace every mutable field of a record.
    ///
    /// The id and `created_at` survive the update; `updated_at` is
    /// refreshed. A miss leaves the collection unchanged.
    pub fn update(&mut self, id: u64, draft: BlogDraft) -> StoreResult<Blog> {
        let blog = self
            .blogs
            .iter_mut()
            .find(|blog| blog.id == id)
            .ok_or(StoreError::BlogNotFound(id))?;

        blog.title = draft.title;
        blog.content = draft.content;
        blog.author = draft.author;
        blog.category = draft.category;
        blog.updated_at = Utc::now();

        Ok(blog.clone())
    }

    /// Remove the record with the given id.
    ///
    /// The collection is scanned in full before deciding: at most one
    /// record is removed, and `BlogNotFound` is raised only when the
    /// id was never present.
    pub fn delete(&mut self, id: u64) -> StoreResult<()> {
        let index = self
            .blogs
            .iter()
            .position(|blog| blog.id == id)
            .ok_or(StoreError::BlogNotFound(id))?;

        self.blogs.remove(index);
        Ok(())
    }

    /// All records in one category, in insertion order.
    pub fn list_by_category(&self, category: Category) -> StoreResult<Vec<Blog>> {
        let matched: Vec<Blog> = self
            .blogs
            .iter()
            .filter(|blog| blog.category == category)
            .cloned()
            .collect();

        if matched.is_empty() {
            return Err(StoreError::NoMatch);
        }

        Ok(matched)
    }

    /// Case-sensitive substring search over title and content.
    pub fn search(&self, keyword: &str) -> SearchOutcome {
        let matched: Vec<Blog> = self
            .blogs
            .iter()
            .filter(|blog| blog.title.contains(keyword) || blog.content.contains(keyword))
            .cloned()
            .collect();

        if matched.is_empty() {
            SearchOutcome::NoMatch
        } else {
            SearchOutcome::Matches(matched)
        }
    }

    /// Per-author record counts, ordered by first occurrence.
    ///
    /// Authors are grouped by exact string; each distinct author
    /// appears exactly once and the counts sum to `len()`.
    pub fn author_summary(&self) -> Vec<AuthorSummary> {
        let mut summaries: Vec<AuthorSummary> = Vec::new();

        for blog in &self.blogs {
            match summaries.iter_mut().find(|s| s.author == blog.author) {
                Some(summary) => summary.blog_count += 1,
                None => summaries.push(AuthorSummary {
                    author: blog.author.clone(),
                    blog_count: 1,
                }),
            }
        }

        summaries
    }

    /// Per-category record counts, ordered by first occurrence.
    pub fn category_summary(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();

        for blog in &self.blogs {
            match summaries.iter_mut().find(|s| s.category == blog.category) {
                Some(summary) => summary.blog_count += 1,
                None => summaries.push(CategorySummary {
                    category: blog.category,
                    blog_count: 1,
                }),
            }
        }

        summaries
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Presence check for the caller-supplied text fields.
///
/// The category is a closed enumeration, so only the text fields can
/// be empty.
fn validate_draft(draft: &BlogDraft) -> StoreResult<()> {
    if draft.title.is_empty() {
        return Err(StoreError::EmptyField("title"));
    }
    if draft.content.is_empty() {
        return Err(StoreError::EmptyField("content"));
    }
    if draft.author.is_empty() {
        return Err(StoreError::EmptyField("author"));
    }

    Ok(())
}
