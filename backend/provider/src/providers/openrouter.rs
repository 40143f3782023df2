use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mindtrace_core::{AnalysisRequest, AnalysisResponse, InsightProvider, MindtraceError};

use crate::prompt;

/// OpenRouter.ai analysis provider.
pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: Option<u64>,
}

#[async_trait]
impl InsightProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let start = Instant::now();

        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: prompt::system_prompt(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: prompt::user_prompt(request),
            },
        ];

        let body = ChatRequest {
            model: request.model.clone(),
            messages,
        };

        debug!(
            model = %request.model,
            timeframe_days = request.timeframe_days,
            "Sending analysis request to OpenRouter"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("OpenRouter HTTP request failed")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(MindtraceError::Provider {
                provider: "openrouter".to_string(),
                message: format!("{status}: {error_body}"),
            }
            .into());
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenRouter response")?;

        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        let tokens_used = chat_response
            .usage
            .and_then(|u| u.total_tokens)
            .unwrap_or(0);

        Ok(AnalysisResponse {
            content,
            provider: "openrouter".to_string(),
            model: request.model.clone(),
            generated_at: Utc::now(),
            tokens_used,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
