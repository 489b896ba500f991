//! Pattern documentation entity.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::pattern::Pattern;

/// The documentation card accompanying a pattern.
///
/// Replaces the original catalogue's per-pattern Markdown pages: intent,
/// business motivation, and the participating roles. Built-in cards live in
/// `patina-adapters::builtin_docs`; the catalog port stores and serves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDoc {
    pub pattern: Pattern,
    /// One-sentence statement of what the pattern does.
    pub intent: String,
    /// Why a fintech team reaches for it — the business story.
    pub motivation: String,
    /// The roles in the example, `"Role — what it is here"` per entry.
    pub participants: Vec<String>,
}

impl PatternDoc {
    pub fn new(pattern: Pattern, intent: impl Into<String>, motivation: impl Into<String>) -> Self {
        Self {
            pattern,
            intent: intent.into(),
            motivation: motivation.into(),
            participants: Vec::new(),
        }
    }

    pub fn participant(mut self, entry: impl Into<String>) -> Self {
        self.participants.push(entry.into());
        self
    }

    /// A doc is publishable only when both prose sections are present.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.intent.trim().is_empty() {
            return Err(DomainError::EmptyDoc {
                pattern: self.pattern,
                section: "intent",
            });
        }
        if self.motivation.trim().is_empty() {
            return Err(DomainError::EmptyDoc {
                pattern: self.pattern,
                section: "motivation",
            });
        }
        Ok(())
    }
}
