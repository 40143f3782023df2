use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use mindtrace_core::{AnalysisRequest, AnalysisResponse, InsightProvider};

/// Canned markdown shown when no API key is configured ("demo mode").
const DEMO_ANALYSIS: &str = "\
## Patterns
- Logging happens most evenings between 8 and 10pm
- Entries cluster around workdays

## Triggers
- Skipped meals precede most low-mood entries
- Late screen time shows up before restless nights

## What's Working
- Morning walks correlate with calmer afternoons

## Suggestions
1. Keep the evening logging habit
2. Try an earlier wind-down on work nights
";

/// A mock analysis provider that returns canned markdown.
///
/// Doubles as the product's demo mode and as a test double for anything
/// downstream of the provider seam.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }
}

#[async_trait]
impl InsightProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        Ok(AnalysisResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| DEMO_ANALYSIS.to_string()),
            provider: self.name.clone(),
            model: request.model.clone(),
            generated_at: Utc::now(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_output_parses_into_cards() {
        let provider = MockProvider::new("demo");
        let response = provider.analyze(&AnalysisRequest::default()).await.unwrap();

        let sections = insights::parse(&response.content);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Patterns", "Triggers", "What's Working", "Suggestions"]
        );
        assert_eq!(sections[3].bullets.len(), 2);
    }

    #[tokio::test]
    async fn fixed_response_overrides_demo_text() {
        let provider = MockProvider::new("demo").with_response("## Mood\n- steady");
        let response = provider.analyze(&AnalysisRequest::default()).await.unwrap();
        assert_eq!(response.content, "## Mood\n- steady");
        assert_eq!(response.provider, "demo");
    }
}
