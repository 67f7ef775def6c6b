//! Sentence generation with graceful degradation.
//!
//! [`SentenceGenerator`] makes one attempt against a [`TextGenerator`] and
//! polishes the output into a single well-formed practice sentence. When the
//! attempt fails for any recoverable reason, the failure is absorbed and a
//! deterministic sentence comes from the [`FallbackCatalog`] instead -- the
//! caller never observes that generation failed. The one exception is
//! missing configuration, which is surfaced so the operator can fix it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::FallbackCatalog;
use crate::error::{GenerateError, Result};
use crate::provider::TextGenerator;

/// Orchestrates the generation attempt and the fallback path.
pub struct SentenceGenerator {
    generator: Arc<dyn TextGenerator>,
    catalog: Arc<FallbackCatalog>,
}

impl SentenceGenerator {
    /// Create a sentence generator over a generation backend and a catalog.
    pub fn new(generator: Arc<dyn TextGenerator>, catalog: Arc<FallbackCatalog>) -> Self {
        Self { generator, catalog }
    }

    /// Produce one practice sentence for the given situation.
    ///
    /// The situation may be empty; that is a valid input, not an error. The
    /// returned sentence always ends in `.`, `!`, or `?` and carries no
    /// enclosing quote characters, whichever path produced it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotConfigured`] when the generation backend
    /// is missing required configuration. Every other backend failure is
    /// absorbed by the fallback catalog.
    pub async fn generate(&self, situation: &str) -> Result<String> {
        let prompt = build_prompt(situation);

        let attempt = self.generator.generate(&prompt).await.and_then(|raw| {
            polish(&raw).ok_or_else(|| {
                GenerateError::InvalidResponse("generator returned empty text".into())
            })
        });

        match attempt {
            Ok(sentence) => {
                debug!(generator = %self.generator.name(), "generated practice sentence");
                Ok(sentence)
            }
            Err(err) if is_recoverable(&err) => {
                warn!(
                    generator = %self.generator.name(),
                    error = %err,
                    "generation failed, using fallback catalog"
                );
                Ok(self.catalog.lookup(situation).to_string())
            }
            Err(err) => Err(err),
        }
    }
}

/// Whether a generation failure may be absorbed by the fallback catalog.
///
/// Missing configuration is the one hard failure: without it the service
/// cannot be used at all, and the caller must be told to configure it.
fn is_recoverable(err: &GenerateError) -> bool {
    !matches!(err, GenerateError::NotConfigured(_))
}

/// Render the fixed instructional prompt for a situation.
fn build_prompt(situation: &str) -> String {
    format!(
        "Generate exactly one simple, practical English sentence that a \
         language learner could practice in the following situation.\n\
         \n\
         Situation: {situation}\n\
         \n\
         Requirements:\n\
         - One sentence only\n\
         - Natural, everyday phrasing\n\
         - Beginner to intermediate difficulty\n\
         - Something actually usable in real life\n\
         \n\
         Output only the sentence (no explanation or translation):"
    )
}

/// Polish raw generator output into a well-formed sentence.
///
/// Trims whitespace, strips a single layer of enclosing single or double
/// quote characters from each end, and appends `.` unless the text already
/// ends in `.`, `!`, or `?`. Returns `None` when nothing usable remains.
fn polish(raw: &str) -> Option<String> {
    let mut text = raw.trim();
    text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text = text.strip_suffix(['"', '\'']).unwrap_or(text);
    let text = text.trim();

    if text.is_empty() {
        return None;
    }

    let mut sentence = text.to_string();
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    Some(sentence)
}

impl std::fmt::Debug for SentenceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceGenerator")
            .field("generator", &self.generator.name())
            .field("catalog_entries", &self.catalog.entries().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedGenerator {
        output: String,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.output.clone())
        }
    }

    struct FailingGenerator {
        error: fn() -> GenerateError,
    }

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err((self.error)())
        }
    }

    fn with_output(output: &str) -> SentenceGenerator {
        SentenceGenerator::new(
            Arc::new(FixedGenerator {
                output: output.into(),
            }),
            Arc::new(FallbackCatalog::builtin()),
        )
    }

    fn with_error(error: fn() -> GenerateError) -> SentenceGenerator {
        SentenceGenerator::new(
            Arc::new(FailingGenerator { error }),
            Arc::new(FallbackCatalog::builtin()),
        )
    }

    #[tokio::test]
    async fn generate_polishes_model_output() {
        let generator = with_output("  \"How much is this scarf\"  ");
        let sentence = generator.generate("shopping").await.unwrap();
        assert_eq!(sentence, "How much is this scarf.");
    }

    #[tokio::test]
    async fn generate_keeps_existing_terminal_punctuation() {
        let generator = with_output("Could you speak more slowly, please?");
        let sentence = generator.generate("conversation").await.unwrap();
        assert_eq!(sentence, "Could you speak more slowly, please?");
    }

    #[tokio::test]
    async fn generate_falls_back_on_request_failure() {
        let generator = with_error(|| GenerateError::RequestFailed("HTTP 503: down".into()));
        let sentence = generator.generate("at the cafe").await.unwrap();
        assert_eq!(sentence, "I'd like a medium iced coffee with oat milk, please.");
    }

    #[tokio::test]
    async fn generate_falls_back_on_auth_failure() {
        let generator = with_error(|| GenerateError::AuthFailed("expired token".into()));
        let sentence = generator.generate("unknown place").await.unwrap();
        assert_eq!(sentence, "How can I help you today?");
    }

    #[tokio::test]
    async fn generate_falls_back_on_empty_output() {
        let generator = with_output("   \"\"   ");
        let sentence = generator.generate("hotel check-in").await.unwrap();
        assert_eq!(sentence, "I have a reservation under the name Kim.");
    }

    #[tokio::test]
    async fn generate_surfaces_missing_configuration() {
        let generator = with_error(|| GenerateError::NotConfigured("set GCP_PROJECT_ID".into()));
        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GenerateError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn generate_accepts_empty_situation() {
        let generator = with_error(|| GenerateError::RequestFailed("down".into()));
        let sentence = generator.generate("").await.unwrap();
        assert_eq!(sentence, "How can I help you today?");
    }

    #[tokio::test]
    async fn output_is_well_formed_on_both_paths() {
        let generated = with_output("'Let me think about it'")
            .generate("shopping")
            .await
            .unwrap();
        let fallback = with_error(|| GenerateError::RequestFailed("down".into()))
            .generate("airport")
            .await
            .unwrap();

        for sentence in [generated, fallback] {
            assert!(sentence.ends_with(['.', '!', '?']), "{sentence}");
            assert!(!sentence.starts_with(['"', '\'']), "{sentence}");
            assert!(!sentence.ends_with(['"', '\'']), "{sentence}");
        }
    }

    #[test]
    fn prompt_embeds_situation() {
        let prompt = build_prompt("returning a parcel");
        assert!(prompt.contains("Situation: returning a parcel"));
        assert!(prompt.contains("One sentence only"));
    }

    #[test]
    fn polish_strips_one_quote_layer() {
        assert_eq!(polish("\"Hello there.\"").as_deref(), Some("Hello there."));
        assert_eq!(polish("'Hello there.'").as_deref(), Some("Hello there."));
        // Only one layer comes off.
        assert_eq!(polish("''Hello.''").as_deref(), Some("'Hello.'."));
    }

    #[test]
    fn polish_appends_period() {
        assert_eq!(polish("Nice to meet you").as_deref(), Some("Nice to meet you."));
        assert_eq!(polish("Really?").as_deref(), Some("Really?"));
        assert_eq!(polish("Watch out!").as_deref(), Some("Watch out!"));
    }

    #[test]
    fn polish_rejects_empty_text() {
        assert_eq!(polish(""), None);
        assert_eq!(polish("   "), None);
        assert_eq!(polish("\"\""), None);
    }

    #[test]
    fn recoverable_classification() {
        assert!(is_recoverable(&GenerateError::RequestFailed("down".into())));
        assert!(is_recoverable(&GenerateError::AuthFailed("bad".into())));
        assert!(is_recoverable(&GenerateError::InvalidResponse("empty".into())));
        assert!(!is_recoverable(&GenerateError::NotConfigured("unset".into())));
    }
}
