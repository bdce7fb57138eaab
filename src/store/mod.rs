//! # Blog Store
//!
//! The in-memory owner of all blog records and the id counter. All
//! reads and writes pass through [`BlogStore`]; the HTTP layer holds
//! it behind a lock and serializes access per operation.

mod blog_store;
mod error;
mod filter;

pub use blog_store::{BlogStore, SearchOutcome};
pub use error::{StoreError, StoreResult};
pub use filter::BlogFilter;
