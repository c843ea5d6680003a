//! # ClayDB Observability Module
//!
//! Structured JSON logging with typed events. Logging is synchronous,
//! read-only, and never affects operation outcomes.
//!
//! ```ignore
//! use claydb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemaCreated, &[("schema", "posts")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    match event.severity() {
        Severity::Error => Logger::log_stderr(Severity::Error, event.as_str(), fields),
        severity => Logger::log(severity, event.as_str(), fields),
    }
}
