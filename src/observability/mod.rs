//! Observability for remap
//!
//! Structured logging only. The conversion engine is synchronous and
//! in-process; its sole observable side effect besides the returned
//! result is one structured log line per notable event.
//!
//! # Principles
//!
//! 1. Logging is read-only with respect to conversion state
//! 2. Logs are synchronous, one line per event
//! 3. Deterministic field ordering
//! 4. Errors go to stderr, everything else to stdout

mod logger;

pub use logger::{Logger, Severity};
