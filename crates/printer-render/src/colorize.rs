//! Colorizing text by color name.
//!
//! The stencil engine consumes colors through the [`Colorizer`] trait so
//! that tests (and applications with their own palettes) can substitute
//! their own implementation. [`ConsoleColorizer`] is the default, backed by
//! `console::Style`.
//!
//! # Color Names
//!
//! - Named colors: `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white`
//! - `gray` / `grey` as aliases for `white`
//! - Bright variants: `bright_red`, `bright_green`, etc. (palette indices 8-15)
//! - 256-color palette: `0` through `255`
//!
//! Names are matched case-insensitively after trimming.

use console::{Color, Style};

use crate::output::OutputMode;

/// Maps a text value and a color name to a colorized string.
///
/// Returns `None` when the color name is not recognized. Callers fall back
/// to the original text in that case; an unknown color is never an error.
pub trait Colorizer: Send + Sync {
    fn colorize(&self, text: &str, color: &str) -> Option<String>;
}

/// [`Colorizer`] backed by `console` styles.
///
/// # Example
///
/// ```rust
/// use printer_render::{Colorizer, ConsoleColorizer, OutputMode};
///
/// let colorizer = ConsoleColorizer::new(OutputMode::Term);
/// let red = colorizer.colorize("alert", "red").unwrap();
/// assert!(red.starts_with("\x1b["));
///
/// assert_eq!(colorizer.colorize("alert", "chartreuse"), None);
/// ```
///
/// `OutputMode::Auto` is resolved against the terminal once, on construction.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleColorizer {
    mode: OutputMode,
    styled: bool,
}

impl ConsoleColorizer {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            styled: mode.should_use_color(),
        }
    }

    /// Whether colorized text carries escape codes.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

impl Default for ConsoleColorizer {
    fn default() -> Self {
        Self::new(OutputMode::default())
    }
}

impl Colorizer for ConsoleColorizer {
    fn colorize(&self, text: &str, color: &str) -> Option<String> {
        let color = parse_color(color)?;
        if !self.styled {
            return Some(text.to_string());
        }
        let style = Style::new().fg(color).force_styling(true);
        Some(style.apply_to(text).to_string())
    }
}

/// Parses a color name into a `console::Color`.
///
/// ```rust
/// use console::Color;
/// use printer_render::parse_color;
///
/// assert_eq!(parse_color("Red"), Some(Color::Red));
/// assert_eq!(parse_color("bright_blue"), Some(Color::Color256(12)));
/// assert_eq!(parse_color("208"), Some(Color::Color256(208)));
/// assert_eq!(parse_color("mauve"), None);
/// ```
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();

    if let Some(base) = name.strip_prefix("bright_") {
        return parse_bright(base);
    }

    if let Ok(index) = name.parse::<u8>() {
        return Some(Color::Color256(index));
    }

    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::White,
        _ => return None,
    };
    Some(color)
}

// console has no bright variants of its own; they live at palette 8-15.
fn parse_bright(base: &str) -> Option<Color> {
    let index = match base {
        "black" => 8,
        "red" => 9,
        "green" => 10,
        "yellow" => 11,
        "blue" => 12,
        "magenta" => 13,
        "cyan" => 14,
        "white" => 15,
        _ => return None,
    };
    Some(Color::Color256(index))
}
