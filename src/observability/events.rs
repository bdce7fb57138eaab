//! Lifecycle and operation events.
//!
//! Events are typed, never ad-hoc strings; the logger renders them as
//! the `event` key of each line.

use std::fmt;

/// Observable events emitted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,

    // Record operations
    /// A blog post was created
    BlogCreated,
    /// A blog post was updated
    BlogUpdated,
    /// A blog post was deleted
    BlogDeleted,

    // Query operations
    /// A read query completed
    QueryServed,
    /// A read query failed
    QueryRejected,
}

impl Event {
    /// Wire name of the event, as it appears in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "QUILL_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "QUILL_SERVING",

            Event::BlogCreated => "BLOG_CREATED",
            Event::BlogUpdated => "BLOG_UPDATED",
            Event::BlogDeleted => "BLOG_DELETED",

            Event::QueryServed => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
