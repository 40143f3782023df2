//! Structured logging for mindtrace.
//!
//! Console plus rolling NDJSON file output, and redaction of credentials
//! before anything user-adjacent is logged.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_sensitive_data;
