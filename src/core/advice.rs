//! Chat-completion client that turns a profile label into a few sentences of
//! advice.
//!
//! - `POST {endpoint}` with `Authorization: Bearer {api_key}`
//! - Body: `{ model, messages: [{ role, content }], max_tokens, temperature }`
//! - Response: `{ id, choices: [{ index, message: { role, content } }] }`
//!
//! One call per invocation. No retries and no caching.

use crate::config::{AdviceSettings, API_KEY_ENV};
use crate::domain::ports::AdviceProvider;
use crate::utils::error::{AdviceError, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a concise, encouraging career coach for students.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "is_zero_f32")]
    pub temperature: f32,
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

fn is_zero_f32(value: &f32) -> bool {
    *value == 0.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: ChatMessage,
}

pub fn advice_prompt(profile: &str) -> String {
    format!(
        "Give concise, positive advice (2–3 sentences) for a high school student whose AI mindset profile is '{}'.",
        profile
    )
}

pub struct ChatAdviceClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
    max_tokens: u32,
    temperature: f32,
    client_timeout: Duration,
}

impl ChatAdviceClient {
    pub fn new(settings: AdviceSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.client_timeout).build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint,
            model: settings.model,
            api_key: settings.api_key,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            client_timeout: settings.client_timeout,
        })
    }

    pub fn build_request(&self, profile: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(advice_prompt(profile)),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> AdviceError {
        if err.is_timeout() {
            AdviceError::Timeout(self.client_timeout)
        } else {
            AdviceError::Transport(err)
        }
    }
}

#[async_trait]
impl AdviceProvider for ChatAdviceClient {
    async fn fetch_advice(&self, profile: &str) -> std::result::Result<String, AdviceError> {
        // 沒有金鑰就不發出請求
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AdviceError::MissingCredential {
                field: API_KEY_ENV.to_string(),
            })?;

        let body = self.build_request(profile);
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .build()
            .map_err(AdviceError::RequestBuild)?;

        tracing::debug!("Requesting advice for '{}' from {}", profile, self.endpoint);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::debug!("Advice API response status: {}", status);
        if !status.is_success() {
            return Err(AdviceError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        let payload: ChatResponse = serde_json::from_slice(&bytes).map_err(AdviceError::Decode)?;

        tracing::debug!(
            "Advice API returned {} choice(s) (id: {})",
            payload.choices.len(),
            payload.id
        );

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AdviceError::EmptyChoices)
    }
}
