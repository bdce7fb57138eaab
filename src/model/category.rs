//! Blog category enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of blog categories.
///
/// Categories are a fixed enumeration, not free-form text. Unknown
/// strings are rejected at the serde boundary before they reach the
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Lifestyle,
    Business,
    Education,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Lifestyle,
        Category::Business,
        Category::Education,
        Category::Entertainment,
        Category::Other,
    ];

    /// Returns the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Lifestyle => "lifestyle",
            Category::Business => "business",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
