//! Plain message formatting.

use std::fmt::Display;

/// Formats `text` as a message line.
///
/// ```rust
/// assert_eq!(printer::format_msg(format_args!("{} files", 3)), "3 files\n");
/// ```
pub fn format_msg(text: impl Display) -> String {
    format!("{}\n", text)
}

/// Formats `text` as an error line, prefixed with `Error: `.
///
/// ```rust
/// assert_eq!(printer::format_error("disk full"), "Error: disk full\n");
/// ```
pub fn format_error(text: impl Display) -> String {
    format!("Error: {}\n", text)
}
