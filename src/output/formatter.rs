//! Terminal rendering of assertion results.

use crate::output::config::{OutputConfig, OutputMode};
use crate::result::{PredicateResult, PredicateStatus};

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Formatter for predicate results.
pub struct ResultFormatter {
    config: OutputConfig,
}

impl ResultFormatter {
    /// Create a new formatter with the given configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Create a formatter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OutputConfig::new())
    }

    /// Check if the message should be shown given the result.
    pub fn should_show(&self, result: &PredicateResult) -> bool {
        match self.config.messages {
            OutputMode::Always => true,
            OutputMode::OnFailure => !result.is_match(),
            OutputMode::Never => false,
        }
    }

    /// Format a result for display.
    ///
    /// `actual` is the already-rendered subject handed to the message; the
    /// formatter never touches the expression itself. The message line is
    /// included only when [`ResultFormatter::should_show`] allows it.
    pub fn format_result(&self, result: &PredicateResult, actual: Option<&str>) -> String {
        let status_line = self.format_status(result.status);
        if !self.should_show(result) {
            return status_line;
        }

        let message = self.truncate(&result.message.render(actual));
        format!("{status_line}\n  {message}")
    }

    fn format_status(&self, status: PredicateStatus) -> String {
        let (glyph, color) = match status {
            PredicateStatus::Matches => ("✓ match", GREEN),
            PredicateStatus::DoesNotMatch => ("✗ no match", RED),
            PredicateStatus::Inconclusive => ("? inconclusive", YELLOW),
        };
        if self.config.colors_enabled {
            format!("{color}{glyph}{RESET}")
        } else {
            glyph.to_string()
        }
    }

    fn truncate(&self, text: &str) -> String {
        if text.chars().count() <= self.config.truncate_at {
            return text.to_string();
        }
        let kept: String = text.chars().take(self.config.truncate_at).collect();
        format!("{kept}...")
    }
}
