//! Observability subsystem.
//!
//! Structured JSON log lines, typed lifecycle events, and exact
//! operation counters. Nothing here mutates request state or spawns
//! background work, and the output is deterministic for a given
//! sequence of calls.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event at INFO with no fields.
pub fn log_event(event: Event) {
    Logger::log(Severity::Info, event.as_str(), &[]);
}

/// Log a lifecycle event at INFO with fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(Severity::Info, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_helpers_do_not_panic() {
        log_event(Event::BootStart);
        log_event(Event::Serving);
        log_event_with_fields(Event::ConfigLoaded, &[("addr", "0.0.0.0:8686")]);
    }
}
