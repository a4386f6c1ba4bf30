//! Output mode control for colorization.
//!
//! The [`OutputMode`] enum determines whether colorized stencil fields carry
//! ANSI escape codes or are left as plain text.

use console::Term;
use serde::Deserialize;

/// Controls whether colorized output includes ANSI escape codes.
///
/// # Variants
///
/// - `Auto` - Detect terminal capabilities automatically (default behavior)
/// - `Term` - Always include ANSI escape codes
/// - `Text` - Never include ANSI escape codes (plain text)
///
/// # Example
///
/// ```rust
/// use printer_render::{ConsoleColorizer, Colorizer, OutputMode};
///
/// let plain = ConsoleColorizer::new(OutputMode::Text);
/// assert_eq!(plain.colorize("ok", "green").as_deref(), Some("ok"));
///
/// let styled = ConsoleColorizer::new(OutputMode::Term);
/// assert!(styled.colorize("ok", "green").unwrap().contains("\x1b["));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Auto-detect terminal capabilities
    #[default]
    Auto,
    /// Always use ANSI escape codes (terminal output)
    Term,
    /// Never use ANSI escape codes (plain text)
    Text,
}

impl OutputMode {
    /// Resolves the output mode to a concrete decision about whether to use color.
    ///
    /// - `Auto` checks whether stdout supports colors
    /// - `Term` always returns `true`
    /// - `Text` always returns `false`
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}
