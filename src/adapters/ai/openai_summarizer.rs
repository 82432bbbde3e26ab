//! OpenAI-backed summarizer.
//!
//! Sends the finished interview record to the chat completions API and
//! returns the generated evaluation text. Non-streaming only; the summary
//! is written once at end of session, latency is not interactive.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key).with_model("gpt-4o-mini");
//! let summarizer = OpenAISummarizer::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

use crate::domain::interview::SessionRecord;
use crate::ports::{Summarizer, SummarizerError};

/// Configuration for the OpenAI summarizer.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI chat-completions implementation of the [`Summarizer`] port.
pub struct OpenAISummarizer {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAISummarizer {
    pub fn new(config: OpenAIConfig) -> Result<Self, SummarizerError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizerError::InvalidRequest(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Flattens the record into the user message for the evaluation prompt.
    fn render_transcript(record: &SessionRecord) -> String {
        let c = &record.candidate;
        let mut lines = Vec::new();
        lines.push(format!("Candidate: {}", c.display_name()));
        if let Some(personal) = &c.personal {
            lines.push(format!("Personal: {}", personal));
        }
        if let Some(education) = &c.education {
            lines.push(format!("Education: {}", education));
        }
        if let Some(experience) = &c.experience {
            lines.push(format!("Experience: {}", experience));
        }
        if !c.hr_answers.is_empty() {
            lines.push("HR answers:".to_string());
            for answer in &c.hr_answers {
                lines.push(format!("- {}", answer));
            }
        }
        if !c.tech_answers.is_empty() {
            lines.push("Technical answers:".to_string());
            for answer in &c.tech_answers {
                lines.push(format!("- {}", answer));
            }
        }
        if !c.skipped.is_empty() {
            lines.push(format!("Skipped questions: {}", c.skipped.len()));
        }
        lines.push(format!(
            "Off-topic remarks: {}, manipulation attempts: {}",
            c.off_topic, c.manipulation
        ));
        lines.join("\n")
    }

    fn build_request(&self, record: &SessionRecord) -> ChatRequest {
        let system = format!(
            "You are an HR assistant at {}. Write a concise evaluation of the \
             candidate based on the interview transcript below: strengths, \
             weaknesses, and a hiring recommendation. A few sentences, no headings.",
            record.metadata.company_name
        );
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::render_transcript(record),
                },
            ],
            max_tokens: Some(512),
            temperature: Some(0.3),
        }
    }

    async fn send_request(&self, body: &ChatRequest) -> Result<Response, SummarizerError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SummarizerError::network(format!("Connection failed: {}", e))
                } else {
                    SummarizerError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, SummarizerError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 => Err(SummarizerError::AuthenticationFailed),
            429 => Err(SummarizerError::RateLimited {
                retry_after_secs: 30,
            }),
            400 => Err(SummarizerError::InvalidRequest(error_body)),
            500..=599 => Err(SummarizerError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(SummarizerError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<String, SummarizerError> {
        let response = self.handle_response_status(response).await?;
        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| SummarizerError::parse("No choices in response"))?;
        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    async fn summarize(&self, record: &SessionRecord) -> Result<String, SummarizerError> {
        let body = self.build_request(record);
        let mut retry_count = 0;

        loop {
            let result = match self.send_request(&body).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match result {
                Ok(summary) => return Ok(summary),
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(error = %err, retry = retry_count + 1, "summarizer request failed, retrying");
                    // Exponential backoff: 1s, 2s, 4s, ...
                    sleep(Duration::from_secs(1 << retry_count)).await;
                    retry_count += 1;
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
