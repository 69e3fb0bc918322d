use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use diagnostic_core::Clock;
use diagnostic_core::model::{Category, ChatMessage};

use crate::error::AssistantError;

/// Fixed opening question issued when a conversation is created.
pub const GREETING_PROMPT: &str = "Hello. Can you explain my diagnostic result?";

/// Shown as the sole message when the very first assistant call fails.
pub const GREETING_FALLBACK: &str =
    "Hello. I am the NovaMentors assistant. How can I help clarify your diagnostic result today?";

/// Appended when a later assistant call fails; prior history is kept.
pub const APOLOGY_FALLBACK: &str =
    "I apologize, but I encountered a temporary issue. Please try again.";

fn persona_prompt(result: Category) -> String {
    format!(
        "You are an expert executive consultant for NovaMentors, a high-end management \
         consultancy.\n\
         Your tone is concierge-style, professional, elite, calm, and helpful.\n\
         You never give legal or HR advice.\n\
         You never promise guaranteed results.\n\n\
         The user has just completed the \"Manager’s Bottleneck Diagnostic\".\n\
         Their result is: \"{}\".\n\n\
         Your goal is to explain this result to them, provide high-level insights into why \
         this bottleneck usually occurs in medium-to-large companies, and gently encourage \
         them to book a call for a deeper dive.\n\
         Keep your responses concise (under 150 words usually) and conversational.",
        result.label()
    )
}

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl AssistantConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("NOVA_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("NOVA_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("NOVA_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Transport seam for the hosted model, so tests can script replies and
/// failures without a network.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Produce the next model reply for the given system prompt and history.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the backend is unavailable or replies
    /// with nothing usable.
    async fn complete(
        &self,
        system: &str,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError>;
}

/// Production backend: OpenAI-style `chat/completions` over HTTPS.
#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    config: Option<AssistantConfig>,
}

impl HttpChatBackend {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn complete(
        &self,
        system: &str,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        let config = self.config.as_ref().ok_or(AssistantError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let mut messages = vec![WireMessage {
            role: "system",
            content: system.to_string(),
        }];
        messages.extend(history.iter().map(|msg| WireMessage {
            role: if msg.is_user() { "user" } else { "assistant" },
            content: msg.text.clone(),
        }));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(content.trim().to_string())
    }
}

/// Opaque conversation handle returned by `AssistantService::open` and passed
/// to every `send`. Callers never inspect its internals.
#[derive(Debug, Clone)]
pub struct AssistantChat {
    system: String,
    history: Vec<ChatMessage>,
}

impl AssistantChat {
    /// Turns exchanged so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

/// The Explanation Collaborator: a hosted conversational model seeded with a
/// fixed persona prompt parameterized only by the winning category's label.
#[derive(Clone)]
pub struct AssistantService {
    clock: Clock,
    backend: Arc<dyn ChatBackend>,
}

impl AssistantService {
    #[must_use]
    pub fn new(clock: Clock, backend: Arc<dyn ChatBackend>) -> Self {
        Self { clock, backend }
    }

    /// Production wiring: HTTP backend configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Clock::default_clock(), Arc::new(HttpChatBackend::from_env()))
    }

    /// Create a conversation seeded for the given diagnostic result.
    #[must_use]
    pub fn open(&self, result: Category) -> AssistantChat {
        AssistantChat {
            system: persona_prompt(result),
            history: Vec::new(),
        }
    }

    /// Send one user turn and return the model's reply.
    ///
    /// The reply is an opaque display string; it is recorded in the handle's
    /// history but never parsed. On failure the history keeps every prior
    /// turn, including the user turn that just failed; the caller substitutes
    /// a fixed fallback string for display. No retry, no backoff.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError` when the backend call fails.
    pub async fn send(
        &self,
        chat: &mut AssistantChat,
        text: &str,
    ) -> Result<String, AssistantError> {
        chat.history.push(ChatMessage::user(text, self.clock.now()));

        let reply = self.backend.complete(&chat.system, &chat.history).await?;

        chat.history
            .push(ChatMessage::model(reply.clone(), self.clock.now()));
        Ok(reply)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: WireMessageResponse,
}

#[derive(Debug, Deserialize)]
struct WireMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_prompt_carries_the_result_label() {
        let prompt = persona_prompt(Category::Visibility);
        assert!(prompt.contains("Performance Visibility Bottleneck"));
        assert!(prompt.contains("NovaMentors"));
    }

    #[test]
    fn disabled_backend_reports_disabled() {
        let backend = HttpChatBackend::new(None);
        assert!(!backend.enabled());
    }

    #[test]
    fn wire_payload_has_the_expected_shape() {
        let payload = ChatRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: "persona".into(),
                },
                WireMessage {
                    role: "user",
                    content: "hello".into(),
                },
            ],
            temperature: 0.7,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
    }
}
