//! Pronunciation scoring: word overlap + recognizer confidence.
//!
//! The scorer is total: every well-typed input produces a result, so the
//! learner always gets *some* feedback. Scoring compares lowercase word
//! *sets* -- duplicates collapse and word order is ignored -- and weights
//! lexical overlap at 60% against recognizer confidence at 40%. The feedback
//! tier is chosen by the word-match ratio alone, never by the combined
//! score: what was said matters independently of how sure the recognizer is.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Weight of the word-match ratio in the combined score.
const WORD_MATCH_WEIGHT: f64 = 0.6;

/// Weight of the recognizer confidence in the combined score.
const CONFIDENCE_WEIGHT: f64 = 0.4;

/// The score and feedback for one spoken attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Combined score in `[0, 100]`, rounded to two decimal places.
    pub score: f64,

    /// Human-readable feedback selected from the tier table.
    pub feedback: String,
}

/// Fraction of the original sentence's distinct lowercase words that also
/// appear in the transcript's distinct lowercase words.
///
/// Both strings are split on whitespace with no further punctuation
/// handling. Returns `0.0` when the original tokenizes to an empty set.
pub fn word_match_ratio(original: &str, transcript: &str) -> f64 {
    let original = original.to_lowercase();
    let original_words: HashSet<&str> = original.split_whitespace().collect();
    if original_words.is_empty() {
        return 0.0;
    }

    let transcript = transcript.to_lowercase();
    let transcript_words: HashSet<&str> = transcript.split_whitespace().collect();

    let matching = original_words.intersection(&transcript_words).count();
    matching as f64 / original_words.len() as f64
}

/// Score a spoken attempt against the sentence the learner was asked to say.
///
/// `confidence` is assumed to lie in `[0, 1]` as reported by the external
/// recognizer; it is not clamped or validated. An original sentence that
/// tokenizes to an empty word set short-circuits to a score of `0.0` --
/// confidence contributes nothing in that boundary case.
pub fn score_attempt(original: &str, transcript: &str, confidence: f64) -> ScoreResult {
    if original.split_whitespace().next().is_none() {
        return ScoreResult {
            score: 0.0,
            feedback: feedback_for_ratio(0.0).to_string(),
        };
    }

    let ratio = word_match_ratio(original, transcript);
    let raw = (ratio * WORD_MATCH_WEIGHT + confidence * CONFIDENCE_WEIGHT) * 100.0;

    ScoreResult {
        score: (raw * 100.0).round() / 100.0,
        feedback: feedback_for_ratio(ratio).to_string(),
    }
}

/// Select the feedback message for a word-match ratio.
///
/// Four open-ended bands with strict comparisons, highest first; boundary
/// values fall into the lower band.
fn feedback_for_ratio(ratio: f64) -> &'static str {
    if ratio > 0.9 {
        "Excellent! Your pronunciation is very accurate. Keep it up!"
    } else if ratio > 0.7 {
        "Good job! You pronounced most of the words well. A little more practice and it will be perfect."
    } else if ratio > 0.5 {
        "Not bad. Double-check the words you missed and try saying them slowly and clearly."
    } else {
        "Keep practicing. Read the sentence slowly and pronounce each word carefully."
    }
}
