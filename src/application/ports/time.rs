// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for lifecycle hooks and publish-window scopes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
