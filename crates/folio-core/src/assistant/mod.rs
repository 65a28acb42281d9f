//! Assistant gateway: the single owner of the conversation with Gemini.
//!
//! The gateway creates its session lazily on first use and then reuses it for
//! every call. `ask` never fails: every failure path maps to a fixed reply.

pub mod gemini;
pub mod session;
pub mod shared;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

pub use gemini::{GeminiClient, GeminiConfig, Turn, TurnRole};
pub use session::ChatSession;
pub use shared::{ProviderError, ProviderErrorKind};

use crate::config::{Config, ProviderConfig};

/// Reply when no session could be created (missing key, bad URL).
pub const CONNECT_FALLBACK: &str = "I'm having trouble connecting to my AI brain right now. \
                                    Please check your API Key configuration.";

/// Reply when the call succeeded but carried no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

/// Reply for any transport or remote failure.
pub const ERROR_FALLBACK: &str =
    "Sorry, I encountered a scratch in the record. Can you say that again?";

/// Shown when the insight task itself fails.
pub const INSIGHT_FALLBACK: &str =
    "I couldn't fetch a live insight, but check out the results below!";

/// Everything needed to open a session.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub model: String,
    pub temperature: f64,
    pub persona: String,
    pub provider: ProviderConfig,
    /// Environment variable consulted when the config carries no key.
    pub key_env: &'static str,
}

impl GatewaySettings {
    /// Builds settings from config, resolving the persona prompt.
    ///
    /// # Errors
    /// Returns an error if a configured persona file cannot be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            model: config.model.clone(),
            temperature: config.temperature,
            persona: config.effective_persona_prompt()?,
            provider: config.providers.gemini.clone(),
            key_env: gemini::API_KEY_ENV,
        })
    }
}

pub struct AssistantGateway {
    settings: GatewaySettings,
    session: Mutex<Option<Arc<ChatSession>>>,
}

impl AssistantGateway {
    pub fn new(settings: GatewaySettings) -> Self {
        Self {
            settings,
            session: Mutex::new(None),
        }
    }

    /// # Errors
    /// See [`GatewaySettings::from_config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        GatewaySettings::from_config(config).map(Self::new)
    }

    /// Returns the session, creating it on first call.
    ///
    /// A failed creation leaves the slot empty so the next call tries again.
    ///
    /// # Errors
    /// Returns an error if the API key or base URL cannot be resolved.
    pub async fn ensure_session(&self) -> Result<Arc<ChatSession>> {
        let mut slot = self.session.lock().await;
        if let Some(session) = slot.as_ref() {
            return Ok(Arc::clone(session));
        }

        let config = GeminiConfig::from_env(
            self.settings.model.clone(),
            self.settings.temperature,
            self.settings.provider.effective_base_url(),
            self.settings.provider.effective_api_key(),
            self.settings.key_env,
        )?;
        let session = Arc::new(ChatSession::new(
            GeminiClient::new(config),
            self.settings.persona.clone(),
        ));
        tracing::info!(model = %session.model(), "assistant session created");
        *slot = Some(Arc::clone(&session));
        Ok(session)
    }

    /// Forwards one utterance and returns the reply or a fallback string.
    pub async fn ask(&self, utterance: &str) -> String {
        let session = match self.ensure_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "assistant session unavailable");
                return CONNECT_FALLBACK.to_string();
            }
        };

        match session.send(utterance).await {
            Ok(Some(reply)) => reply,
            Ok(None) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "assistant request failed");
                ERROR_FALLBACK.to_string()
            }
        }
    }

    /// Asks for a short blurb relating `query` to the portfolio.
    pub async fn search_insight(&self, query: &str) -> String {
        self.ask(&insight_prompt(query)).await
    }
}

fn insight_prompt(query: &str) -> String {
    format!(
        "User is searching for: \"{query}\" in the portfolio. Provide a brief, enthusiastic \
         summary or answer about Rham's relation to this query (max 2 sentences)."
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn settings(base_url: &str) -> GatewaySettings {
        GatewaySettings {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            persona: "You are Reum.".to_string(),
            provider: ProviderConfig {
                api_key: Some("test-key".to_string()),
                base_url: Some(base_url.to_string()),
            },
            key_env: gemini::API_KEY_ENV,
        }
    }

    fn text_reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
    }

    #[tokio::test]
    async fn ensure_session_is_idempotent() {
        let gateway = AssistantGateway::new(settings("http://127.0.0.1:9"));
        let first = gateway.ensure_session().await.unwrap();
        let second = gateway.ensure_session().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn unresolvable_session_yields_connect_fallback() {
        let gateway = AssistantGateway::new(settings("not a url"));
        assert_eq!(gateway.ask("hi").await, CONNECT_FALLBACK);
        assert!(gateway.ensure_session().await.is_err());
    }

    #[tokio::test]
    async fn failed_creation_is_retried_on_next_call() {
        const KEY_ENV: &str = "FOLIO_TEST_GATEWAY_RETRY_KEY";
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(text_reply("Back online."))
            .mount(&server)
            .await;

        let mut settings = settings(&server.uri());
        settings.provider.api_key = None;
        settings.key_env = KEY_ENV;
        let gateway = AssistantGateway::new(settings);

        assert_eq!(gateway.ask("hi").await, CONNECT_FALLBACK);

        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var(KEY_ENV, "late-key") };
        assert!(gateway.ensure_session().await.is_ok());
        assert_eq!(gateway.ask("hi again").await, "Back online.");
        unsafe { std::env::remove_var(KEY_ENV) };
    }

    #[tokio::test]
    async fn ask_returns_reply_and_records_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(body_partial_json(json!({
                "systemInstruction": { "parts": [{ "text": "You are Reum." }] },
                "generationConfig": { "temperature": 0.7 }
            })))
            .respond_with(text_reply("He builds apps."))
            .mount(&server)
            .await;

        let gateway = AssistantGateway::new(settings(&server.uri()));
        assert_eq!(gateway.ask("What does Rham do?").await, "He builds apps.");

        let session = gateway.ensure_session().await.unwrap();
        assert_eq!(session.turn_count(), 2);
    }

    #[tokio::test]
    async fn remote_failure_yields_error_fallback_and_keeps_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let gateway = AssistantGateway::new(settings(&server.uri()));
        assert_eq!(gateway.ask("hello").await, ERROR_FALLBACK);

        let session = gateway.ensure_session().await.unwrap();
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn empty_reply_yields_empty_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let gateway = AssistantGateway::new(settings(&server.uri()));
        assert_eq!(gateway.ask("hello").await, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn search_insight_wraps_query_in_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": insight_prompt("java") }]
                }]
            })))
            .respond_with(text_reply("Rham wrote a Java chat app!"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = AssistantGateway::new(settings(&server.uri()));
        assert_eq!(
            gateway.search_insight("java").await,
            "Rham wrote a Java chat app!"
        );
    }
}
