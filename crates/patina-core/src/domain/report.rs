//! Demo narration transcripts.

use serde::Serialize;
use tracing::info;

use crate::domain::pattern::Pattern;

/// The transcript of one pattern demonstration.
///
/// Demos narrate what their objects are doing ("Processing credit-card
/// transaction: $250.00", "Access denied for role: teller"). Each line is
/// recorded here in order and simultaneously emitted as a `tracing` info
/// event, so `-v` runs show the narration interleaved with any diagnostics.
/// The CLI prints the transcript; tests assert on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pattern: Pattern,
    lines: Vec<String>,
}

impl DemoReport {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            lines: Vec::new(),
        }
    }

    /// Record one narration line.
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!(pattern = %self.pattern, "{line}");
        self.lines.push(line);
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
