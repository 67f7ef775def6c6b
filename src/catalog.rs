//! The fallback catalog: deterministic canned sentences per situation keyword.
//!
//! When generation fails for any recoverable reason, the orchestrator asks
//! the catalog for a sentence instead. Lookup never fails: an unmatched
//! situation gets the catalog's default sentence. The catalog is built once
//! at startup and shared immutably; lookup is a pure function of its input.

/// One keyword → sentence pair in the catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// Keyword matched (case-insensitively) as a substring of the situation.
    pub keyword: String,

    /// The canned practice sentence for this keyword.
    pub sentence: String,
}

impl CatalogEntry {
    /// Create a catalog entry.
    pub fn new(keyword: impl Into<String>, sentence: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            sentence: sentence.into(),
        }
    }
}

/// An ordered keyword → sentence table with a default sentence.
///
/// Entry order is significant: when several keywords occur in the situation,
/// the entry defined first wins, regardless of where or how long the match
/// is. The built-in table depends on this ordering, so [`lookup`] iterates
/// entries strictly in definition order.
///
/// [`lookup`]: FallbackCatalog::lookup
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    entries: Vec<CatalogEntry>,
    default_sentence: String,
}

impl FallbackCatalog {
    /// Create a catalog from ordered entries and a default sentence.
    pub fn new(entries: Vec<CatalogEntry>, default_sentence: impl Into<String>) -> Self {
        Self {
            entries,
            default_sentence: default_sentence.into(),
        }
    }

    /// Returns the built-in catalog of everyday practice situations.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                CatalogEntry::new("cafe", "I'd like a medium iced coffee with oat milk, please."),
                CatalogEntry::new("restaurant", "Could I have the menu, please?"),
                CatalogEntry::new("shopping", "Do you have this in a different size?"),
                CatalogEntry::new("airport", "Where is the boarding gate for flight KE123?"),
                CatalogEntry::new("hotel", "I have a reservation under the name Kim."),
                CatalogEntry::new("test", "Hello, nice to meet you!"),
                CatalogEntry::new("greeting", "How are you doing today?"),
            ],
            "How can I help you today?",
        )
    }

    /// Look up the sentence for a situation.
    ///
    /// The situation is lowercased and each entry's lowercased keyword is
    /// tested as a substring, in definition order; the first match wins.
    /// Returns the default sentence when nothing matches. Never fails.
    pub fn lookup(&self, situation: &str) -> &str {
        let situation = situation.to_lowercase();
        self.entries
            .iter()
            .find(|entry| situation.contains(&entry.keyword.to_lowercase()))
            .map(|entry| entry.sentence.as_str())
            .unwrap_or(&self.default_sentence)
    }

    /// Returns the default sentence used when no keyword matches.
    pub fn default_sentence(&self) -> &str {
        &self.default_sentence
    }

    /// Returns the catalog entries in definition order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
