//! Observability for codexplain
//!
//! Structured JSON logging. One log line = one event.

mod logger;

pub use logger::{Logger, Severity};
