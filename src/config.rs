//! Generator configuration: project and location identity for Vertex AI.
//!
//! [`VertexConfig`] describes how to reach the Vertex AI OpenAI-compatible
//! chat completion endpoint: the Google Cloud project, the region, the model,
//! and the environment variable holding the access token. The project id is
//! a hard precondition -- without it the generation capability cannot be used
//! at all, so [`VertexConfig::from_env`] reports its absence as
//! [`GenerateError::NotConfigured`] rather than letting the caller degrade
//! silently to the fallback catalog.

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Region used when `GCP_LOCATION` is not set.
pub const DEFAULT_LOCATION: &str = "asia-northeast3";

/// Model used when no explicit model is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable consulted for the bearer token by default.
pub const DEFAULT_TOKEN_ENV: &str = "VERTEX_ACCESS_TOKEN";

/// Configuration for the Vertex AI generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexConfig {
    /// Google Cloud project id. Required.
    pub project_id: String,

    /// Google Cloud region (e.g. "asia-northeast3").
    #[serde(default = "default_location")]
    pub location: String,

    /// Model identifier sent in the chat completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable that holds the bearer access token.
    /// The token itself is never stored in the config.
    #[serde(default = "default_token_env")]
    pub access_token_env: String,

    /// Override for the endpoint base URL. When `None`, the URL is derived
    /// from `project_id` and `location`. Tests point this at a mock server.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.into()
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.into()
}

impl VertexConfig {
    /// Create a config for the given project with default location, model,
    /// and token env var.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            location: default_location(),
            model: default_model(),
            access_token_env: default_token_env(),
            base_url: None,
        }
    }

    /// Load the config from the environment.
    ///
    /// The project id comes from `GCP_PROJECT_ID`, falling back to
    /// `GOOGLE_CLOUD_PROJECT`; the location from `GCP_LOCATION` with a
    /// default of [`DEFAULT_LOCATION`]. Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotConfigured`] if neither project env var
    /// is set.
    pub fn from_env() -> Result<Self> {
        let project_id = env_var("GCP_PROJECT_ID")
            .or_else(|| env_var("GOOGLE_CLOUD_PROJECT"))
            .ok_or_else(|| {
                GenerateError::NotConfigured(
                    "set GCP_PROJECT_ID or GOOGLE_CLOUD_PROJECT env var".into(),
                )
            })?;

        let mut config = Self::new(project_id);
        if let Some(location) = env_var("GCP_LOCATION") {
            config.location = location;
        }
        Ok(config)
    }
}

/// Read an env var, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
