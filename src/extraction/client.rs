//! Chat-completion extraction client
//!
//! Sends sanitized markup through the fixed few-shot prompt and turns
//! the completion back into product records. The only runtime contract
//! on the model's answer is JSON-parseability; schema adherence is
//! prompt-enforced, with missing fields normalized to the sentinel.
//!
//! Per-page extraction failure must never abort a multi-page crawl —
//! partial results from earlier pages beat none — so every failure here
//! surfaces as a recoverable [`ExtractionError`] and is never retried.

use crate::error::{ExtractionError, Result};
use crate::extraction::prompt::{few_shot_messages, ChatMessage};
use crate::extraction::records::ProductRecord;
use crate::sanitize::SanitizedMarkup;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Configuration for the extraction service
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Service base URL (default: DeepSeek's OpenAI-compatible endpoint)
    pub base_url: String,
    /// Bearer API key
    pub api_key: String,
    /// Model identifier
    pub model: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com".to_string(),
            api_key: String::new(),
            model: "deepseek-chat".to_string(),
        }
    }
}

/// The language-model boundary, as seen by the crawler.
///
/// Implemented by [`ExtractionClient`] in production; test crawls plug
/// in scripted extractors.
#[async_trait]
pub trait RecordExtractor: Send + Sync {
    /// Extract an ordered sequence of records from one page's markup.
    async fn extract(&self, markup: &SanitizedMarkup) -> Result<Vec<ProductRecord>>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Chat-completion client for record extraction
pub struct ExtractionClient {
    http: reqwest::Client,
    config: ExtractionConfig,
}

impl ExtractionClient {
    /// Create a client with the given configuration
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl RecordExtractor for ExtractionClient {
    #[instrument(skip(self, markup))]
    async fn extract(&self, markup: &SanitizedMarkup) -> Result<Vec<ProductRecord>> {
        let messages = few_shot_messages(markup.as_str());
        let request = ChatRequest {
            model: &self.config.model,
            messages: &messages,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ExtractionError::ServiceFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::HttpStatus(status.as_u16()).into());
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::ServiceFailed(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            debug!("Model returned no content, treating page as empty");
            return Ok(Vec::new());
        }

        let records = parse_records(content)?;
        info!("Extracted {} records from completion", records.len());
        Ok(records)
    }
}

/// Parse a completion text into normalized records.
///
/// The text must be a JSON array; each element becomes a
/// [`ProductRecord`] with missing fields backfilled with the sentinel.
/// No further schema validation is performed.
pub fn parse_records(content: &str) -> Result<Vec<ProductRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| ExtractionError::InvalidJson(e.to_string()))?;

    Ok(values.iter().map(ProductRecord::from_value).collect())
}
