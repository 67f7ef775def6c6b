//! Wire and domain types.
//!
//! The chat completion types mirror the OpenAI format, which the Vertex AI
//! OpenAI-compatible endpoint accepts. Only the fields this crate actually
//! sends or reads are declared. [`Transcript`] is the recognizer-side domain
//! type: the caller obtains it from an external speech recognizer and hands
//! it to the scoring pipeline.

use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreResult, score_attempt};

/// A message in a chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The role of the message author ("system", "user", "assistant").
    pub role: String,

    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

/// A chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The model identifier (e.g. "gemini-2.5-flash").
    pub model: String,

    /// The conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,

    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatRequest {
    /// Create a minimal request with a model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            temperature: None,
        }
    }
}

/// A chat completion response (OpenAI format, fields we read).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The model that generated the response.
    #[serde(default)]
    pub model: String,

    /// The list of completion choices.
    pub choices: Vec<Choice>,
}

/// A single completion choice within a response.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant's response message.
    pub message: ChatMessage,

    /// Why generation stopped (e.g. "stop", "length").
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// A recognized spoken attempt: text plus recognizer confidence.
///
/// `confidence` is assumed to lie in `[0, 1]` as reported by the recognizer;
/// it is deliberately not clamped or validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    /// Text recognized from the spoken audio.
    pub text: String,

    /// Recognizer-reported certainty in `[0, 1]`.
    pub confidence: f64,
}

impl Transcript {
    /// Create a transcript from recognizer output.
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// Score this attempt against the sentence the learner was asked to say.
    pub fn score_against(&self, original: &str) -> ScoreResult {
        score_attempt(original, &self.text, self.confidence)
    }
}
