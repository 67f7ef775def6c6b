//! Vertex AI generation backend.
//!
//! [`VertexGenerator`] implements [`TextGenerator`] against the Vertex AI
//! OpenAI-compatible chat completion endpoint. The endpoint URL is derived
//! from the configured project and location (or overridden via
//! [`VertexConfig::base_url`], which tests point at a mock server). The
//! bearer token is resolved from the environment at request time.

use async_trait::async_trait;
use tracing::debug;

use crate::config::VertexConfig;
use crate::error::{GenerateError, Result};
use crate::provider::TextGenerator;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// A [`TextGenerator`] backed by the Vertex AI OpenAI-compatible API.
pub struct VertexGenerator {
    config: VertexConfig,
    http: reqwest::Client,
    access_token: Option<String>,
}

impl VertexGenerator {
    /// Create a generator from configuration.
    ///
    /// The access token will be resolved from the environment variable named
    /// in `config.access_token_env` at request time.
    pub fn new(config: VertexConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            access_token: None,
        }
    }

    /// Create a generator with an explicit access token, bypassing the
    /// environment lookup.
    pub fn with_access_token(config: VertexConfig, access_token: String) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            access_token: Some(access_token),
        }
    }

    /// Create a generator from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotConfigured`] if the project id env vars
    /// are unset (see [`VertexConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(VertexConfig::from_env()?))
    }

    /// Returns the generator configuration.
    pub fn config(&self) -> &VertexConfig {
        &self.config
    }

    /// Returns the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        match &self.config.base_url {
            Some(base) => format!("{}/chat/completions", base.trim_end_matches('/')),
            None => format!(
                "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/endpoints/openapi/chat/completions",
                loc = self.config.location,
                proj = self.config.project_id,
            ),
        }
    }

    /// Resolve the access token: explicit token > environment variable.
    fn resolve_access_token(&self) -> Result<String> {
        if let Some(ref token) = self.access_token {
            return Ok(token.clone());
        }
        std::env::var(&self.config.access_token_env)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                GenerateError::NotConfigured(format!(
                    "set {} env var",
                    self.config.access_token_env
                ))
            })
    }
}

#[async_trait]
impl TextGenerator for VertexGenerator {
    fn name(&self) -> &str {
        "vertex-ai"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let access_token = self.resolve_access_token()?;
        let url = self.completions_url();
        let request = ChatRequest::new(&self.config.model, vec![ChatMessage::user(prompt)]);

        debug!(
            model = %self.config.model,
            location = %self.config.location,
            "sending generation request"
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {access_token}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(GenerateError::AuthFailed(body));
            }

            return Err(GenerateError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::InvalidResponse(format!("failed to parse response: {e}")))?;

        debug!(
            model = %chat.model,
            choices = chat.choices.len(),
            "generation response received"
        );

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerateError::InvalidResponse("response contained no choices".into()))
    }
}

impl std::fmt::Debug for VertexGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexGenerator")
            .field("project_id", &self.config.project_id)
            .field("location", &self.config.location)
            .field("model", &self.config.model)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}
