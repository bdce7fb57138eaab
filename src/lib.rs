//! quill - A self-hostable blog content management API
//!
//! An in-memory blog store behind an axum HTTP layer: CRUD, filtered
//! queries, keyword search, and per-author/per-category summaries.

pub mod api;
pub mod cli;
pub mod model;
pub mod observability;
pub mod store;
