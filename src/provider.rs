//! The [`TextGenerator`] trait: the seam to the external generation capability.
//!
//! [`SentenceGenerator`](crate::generator::SentenceGenerator) is written
//! against this trait so the generation backend can be swapped or mocked.
//! The shipped implementation is [`VertexGenerator`](crate::vertex::VertexGenerator).

use async_trait::async_trait;

use crate::error::Result;

/// An external capability that turns a prompt into generated text.
///
/// One attempt per call: implementations do not retry, and any failure is
/// reported to the caller, who decides whether to degrade to the fallback
/// catalog.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the generator name, used in log fields.
    fn name(&self) -> &str;

    /// Generate text for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`](crate::error::GenerateError) on network
    /// failures, authentication problems, missing configuration, or
    /// unusable responses.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
