use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for one behavior-analysis run.
///
/// The flags select which slices of the user's tracked data the provider is
/// asked to reason over; `timeframe_days` bounds the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub include_patterns: bool,
    pub include_journals: bool,
    pub include_medications: bool,
    /// How far back the analysis window reaches, in days.
    pub timeframe_days: u32,
    /// Model identifier understood by the provider (e.g. "openai/gpt-4o-mini").
    pub model: String,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        Self {
            include_patterns: true,
            include_journals: true,
            include_medications: true,
            timeframe_days: 30,
            model: "openai/gpt-4o-mini".to_string(),
        }
    }
}

/// Raw analysis returned by a provider, before any parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Markdown-flavored analysis text.
    pub content: String,
    pub provider: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub tokens_used: u64,
    pub latency_ms: u64,
}

/// Trait for AI analysis providers.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Provider name (e.g., "openrouter", "demo").
    fn name(&self) -> &str;

    /// Run an analysis over the selected data slices and return the raw
    /// markdown response.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}
