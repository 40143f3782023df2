//! AI analysis providers for mindtrace.
//!
//! A provider takes an [`mindtrace_core::AnalysisRequest`] and returns raw
//! markdown for the insights parser. The prompt module keeps the outbound
//! request deterministic so providers stay thin transport adapters.

pub mod prompt;
pub mod providers;

pub use providers::ProviderRegistry;
