//! Store error types.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the blog store.
///
/// Every error is terminal for the operation that raised it: a failed
/// insert, update, or delete leaves the collection and the id counter
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required text field was empty on creation
    #[error("required field `{0}` is empty")]
    EmptyField(&'static str),

    /// No record with the given id
    #[error("blog {0} not found")]
    BlogNotFound(u64),

    /// A filter or category query matched nothing
    #[error("no blog matches the given criteria")]
    NoMatch,

    /// The store holds no records at all
    #[error("no blogs have been created yet")]
    Empty,
}
