//! Completion-service client for the AI responder.
//!
//! Policy: fail fast. Any transport, authentication, quota, or
//! malformed-response error is surfaced to the caller on the first attempt;
//! the failover controller reacts by permanently switching to the
//! rule-based responder. Retrying here would add latency to every
//! subsequent user turn for an outage that is assumed to persist.

use std::time::Duration;

use async_trait::async_trait;
use atende_core::config::LlmConfig;
use atende_core::session::{Role, Turn};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned status {status}")]
    Api { status: u16 },
    #[error("completion response was malformed: {0}")]
    MalformedResponse(String),
}

/// One successful completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub total_tokens: u32,
}

/// Pluggable completion backend. The runtime owns history management; a
/// client only turns (system prompt, history, utterance) into text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[Turn],
        utterance: &str,
    ) -> Result<Completion, LlmError>;
}

// OpenAI-compatible wire types.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatClient {
    /// Returns `None` when no credential is configured; the runtime then
    /// routes everything to the rule-based responder.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }
        let api_key = config.api_key.clone()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Some(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn build_messages(system_prompt: &str, history: &[Turn], utterance: &str) -> Vec<ChatMessage> {
        let mut messages =
            vec![ChatMessage { role: "system", content: system_prompt.to_string() }];

        for turn in history {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            messages.push(ChatMessage { role, content: turn.text.clone() });
        }

        messages.push(ChatMessage { role: "user", content: utterance.to_string() });
        messages
    }
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        history: &[Turn],
        utterance: &str,
    ) -> Result<Completion, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: Self::build_messages(system_prompt, history, utterance),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api { status: status.as_u16() });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|error| LlmError::MalformedResponse(error.to_string()))?;

        let text = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                LlmError::MalformedResponse("response carried no completion text".to_string())
            })?;

        let total_tokens = payload.usage.map(|usage| usage.total_tokens).unwrap_or(0);

        Ok(Completion { text, total_tokens })
    }
}

#[cfg(test)]
mod tests {
    use atende_core::session::Turn;

    use super::OpenAiChatClient;

    #[test]
    fn message_order_is_system_history_then_utterance() {
        let history =
            vec![Turn::user("Olá"), Turn::assistant("Olá! Como posso ajudar?")];

        let messages =
            OpenAiChatClient::build_messages("instruções do sistema", &history, "quais serviços?");

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "quais serviços?");
    }
}
