//! Configuration for assertion-result display.

use std::io::IsTerminal;

/// When to display a result's message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Always show the message regardless of the result status.
    Always,
    /// Only show the message when the predicate did not match (default).
    #[default]
    OnFailure,
    /// Never show the message.
    Never,
}

/// Configuration for assertion-result display.
///
/// Use the builder pattern to configure what gets displayed:
///
/// ```rust,ignore
/// use veracity::output::{OutputConfig, OutputMode};
///
/// let config = OutputConfig::new()
///     .messages(OutputMode::Always)
///     .truncate_at(80)
///     .colors(false);
/// ```
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// When to show the rendered message.
    pub messages: OutputMode,
    /// Maximum characters before truncating a rendered message.
    pub truncate_at: usize,
    /// Whether to use ANSI colors in output.
    pub colors_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            messages: OutputMode::OnFailure,
            truncate_at: 120,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration with defaults.
    ///
    /// Default: `OnFailure`, 120 character truncation, colors auto-detected
    /// from TTY.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure when to show the rendered message.
    pub fn messages(mut self, mode: OutputMode) -> Self {
        self.messages = mode;
        self
    }

    /// Set the maximum characters before truncating a rendered message.
    pub fn truncate_at(mut self, chars: usize) -> Self {
        self.truncate_at = chars;
        self
    }

    /// Enable or disable ANSI colors.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }
}
