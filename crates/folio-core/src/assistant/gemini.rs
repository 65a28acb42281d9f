//! Gemini API key client (Generative Language API, non-streaming).

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use super::shared::{
    ProviderError, USER_AGENT, classify_reqwest_error, resolve_api_key, resolve_base_url,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Speaker of one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }
}

/// One entry of the `contents` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
}

impl GeminiConfig {
    /// Creates a config from explicit values plus the environment.
    ///
    /// Authentication resolution order:
    /// 1. `config_api_key` parameter (from config file)
    /// 2. the `key_env` environment variable (normally [`API_KEY_ENV`])
    ///
    /// Base URL: `GEMINI_BASE_URL`, then `config_base_url`, then the public endpoint.
    ///
    /// # Errors
    /// Returns an error if no key is available or the base URL is invalid.
    pub fn from_env(
        model: String,
        temperature: f64,
        config_base_url: Option<&str>,
        config_api_key: Option<&str>,
        key_env: &str,
    ) -> Result<Self> {
        let api_key = resolve_api_key(config_api_key, key_env, "providers.gemini")?;
        let base_url = resolve_base_url(
            config_base_url,
            "GEMINI_BASE_URL",
            DEFAULT_BASE_URL,
            "Gemini",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model,
            temperature,
        })
    }
}

/// Gemini client.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends one `generateContent` request and returns the concatenated
    /// candidate text, or `None` when the response carried no text.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] for transport and HTTP failures, or a
    /// parse error if the body is not JSON.
    pub async fn generate(&self, system: &str, contents: &[Turn]) -> Result<Option<String>> {
        let request = build_request(system, contents, self.config.temperature);
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(url)
            .headers(build_headers(&self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::http_status(status.as_u16(), &body).into());
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::parse(format!("Invalid Gemini response JSON: {e}")))
            .with_context(|| format!("generateContent returned {status}"))?;
        Ok(extract_text(&value))
    }
}

fn build_request(system: &str, contents: &[Turn], temperature: f64) -> Value {
    let contents: Vec<Value> = contents
        .iter()
        .map(|turn| {
            json!({
                "role": turn.role.as_str(),
                "parts": [{ "text": turn.text }],
            })
        })
        .collect();

    let mut request = json!({
        "contents": contents,
        "generationConfig": { "temperature": temperature },
    });
    if !system.trim().is_empty() {
        request["systemInstruction"] = json!({ "parts": [{ "text": system }] });
    }
    request
}

fn extract_text(value: &Value) -> Option<String> {
    let text: String = value
        .get("candidates")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .take(1)
        .filter_map(|candidate| candidate.get("content")?.get("parts")?.as_array())
        .flatten()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}
