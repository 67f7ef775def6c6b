//! Speaking-practice core for language learners.
//!
//! Two independent pipelines with no shared mutable state:
//!
//! - **Sentence generation with graceful degradation**: [`SentenceGenerator`]
//!   asks a [`TextGenerator`] (the shipped backend is [`VertexGenerator`])
//!   for one practice sentence and falls back to the deterministic
//!   [`FallbackCatalog`] on any recoverable failure. Only missing
//!   configuration is surfaced to the caller.
//! - **Pronunciation scoring**: [`scoring::score_attempt`] turns an original
//!   sentence, a recognized transcript, and a recognizer confidence into a
//!   score in `[0, 100]` plus a feedback message. Scoring is total and pure.
//!
//! The HTTP layer, audio upload handling, and the speech recognizer itself
//! are the caller's collaborators, not part of this crate.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use speakdrill::{FallbackCatalog, SentenceGenerator, VertexGenerator, scoring};
//!
//! let generator = SentenceGenerator::new(
//!     Arc::new(VertexGenerator::from_env()?),
//!     Arc::new(FallbackCatalog::builtin()),
//! );
//!
//! let sentence = generator.generate("ordering at a cafe").await?;
//! let result = scoring::score_attempt(&sentence, "i'd like a coffee", 0.92);
//! println!("{}: {}", result.score, result.feedback);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod provider;
pub mod scoring;
pub mod types;
pub mod vertex;

pub use catalog::{CatalogEntry, FallbackCatalog};
pub use config::VertexConfig;
pub use error::{GenerateError, Result};
pub use generator::SentenceGenerator;
pub use provider::TextGenerator;
pub use scoring::{ScoreResult, score_attempt, word_match_ratio};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Transcript};
pub use vertex::VertexGenerator;
