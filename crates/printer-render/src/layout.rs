//! ANSI-aware column layout.
//!
//! All functions in this module measure cells by their *visible* length:
//! escape sequences embedded by a [`Colorizer`](crate::Colorizer) are
//! preserved in the output but never count toward a column's width, so
//! colorized and plain cells line up.
//!
//! ```rust
//! use printer_render::layout::{column_widths, divider_row, pad_row};
//!
//! let rows = vec![
//!     vec!["NAME".to_string(), "STATE".to_string()],
//!     vec!["\x1b[32mweb\x1b[0m".to_string(), "up".to_string()],
//!     vec!["database".to_string(), "down".to_string()],
//! ];
//!
//! let widths = column_widths(&rows);
//! assert_eq!(widths, vec![8, 5]);
//! assert_eq!(divider_row(&widths, '-'), vec!["--------", "-----"]);
//! assert_eq!(pad_row(&rows[0], &widths, ' ', 2), vec!["NAME      ", "STATE"]);
//! ```

use console::measure_text_width;
use serde::Deserialize;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use printer_render::layout::visible_length;
///
/// assert_eq!(visible_length("hello"), 5);
/// assert_eq!(visible_length("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn visible_length(s: &str) -> usize {
    measure_text_width(s)
}

/// Returns the maximum visible length per column index across all rows.
///
/// Rows may be jagged: a short row simply does not contribute to the
/// columns it lacks.
pub fn column_widths<R, S>(rows: &[R]) -> Vec<usize>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (col, cell) in row.as_ref().iter().enumerate() {
            let width = visible_length(cell.as_ref());
            match widths.get_mut(col) {
                Some(current) => *current = (*current).max(width),
                None => widths.push(width),
            }
        }
    }
    widths
}

/// Right-pads every cell but the last to its column width plus `padding`.
///
/// Each padded cell gets `(widths[col] - visible_length(cell)) + padding`
/// copies of `pad_char`. The last cell is returned untouched so lines carry
/// no trailing padding. Embedded color codes are kept as-is.
pub fn pad_row<S: AsRef<str>>(
    row: &[S],
    widths: &[usize],
    pad_char: char,
    padding: usize,
) -> Vec<String> {
    let last = row.len().saturating_sub(1);
    row.iter()
        .enumerate()
        .map(|(col, cell)| {
            let cell = cell.as_ref();
            if col == last {
                return cell.to_string();
            }
            let width = widths.get(col).copied().unwrap_or(0);
            let fill = width.saturating_sub(visible_length(cell)) + padding;
            let mut padded = String::with_capacity(cell.len() + fill);
            padded.push_str(cell);
            padded.extend(std::iter::repeat(pad_char).take(fill));
            padded
        })
        .collect()
}

/// Builds a row of `div_char` runs, one per column, each `widths[col]` long.
pub fn divider_row(widths: &[usize], div_char: char) -> Vec<String> {
    widths
        .iter()
        .map(|&width| std::iter::repeat(div_char).take(width).collect())
        .collect()
}

/// Spacing configuration for tabulated output.
///
/// Defaults match a classic tabwriter setup: no minimum width, four spaces
/// between columns and dashes for divider rows.
///
/// ```rust
/// use printer_render::TableOptions;
///
/// let options = TableOptions::default().padding(2).divider_char('=');
/// assert_eq!(options.padding, 2);
/// assert_eq!(options.pad_char, ' ');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Lower bound for every column width.
    pub min_width: usize,
    /// Extra cells of `pad_char` between columns.
    pub padding: usize,
    pub pad_char: char,
    pub divider_char: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_width: 0,
            padding: 4,
            pad_char: ' ',
            divider_char: '-',
        }
    }
}

impl TableOptions {
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    pub fn divider_char(mut self, divider_char: char) -> Self {
        self.divider_char = divider_char;
        self
    }
}

/// Computes column widths and aligns rows for display.
///
/// The stencil engine only talks to layout through this trait; the provided
/// methods build on the three required ones.
pub trait LayoutCalculator: Send + Sync {
    /// Width per column index across `rows`.
    fn column_widths(&self, rows: &[Vec<String>]) -> Vec<usize>;

    /// Divider cells sized to `widths`.
    fn divider_row(&self, widths: &[usize]) -> Vec<String>;

    /// Pads `row` so that its cells line up with `widths`.
    fn pad_row(&self, row: &[String], widths: &[usize]) -> Vec<String>;

    /// Pads every row against the widths of the whole set and joins each
    /// row into a single line.
    fn align(&self, rows: &[Vec<String>]) -> Vec<String> {
        let widths = self.column_widths(rows);
        rows.iter()
            .map(|row| self.pad_row(row, &widths).concat())
            .collect()
    }

    /// Lays out `rows` as a table, with `headers` and a divider row on top
    /// when `headers` is non-empty.
    fn tabulate(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
        let mut table = Vec::with_capacity(rows.len() + 2);
        if !headers.is_empty() {
            let mut measured = Vec::with_capacity(rows.len() + 1);
            measured.push(headers.to_vec());
            measured.extend_from_slice(rows);
            let widths = self.column_widths(&measured);
            table.push(headers.to_vec());
            table.push(self.divider_row(&widths));
        }
        table.extend_from_slice(rows);
        self.align(&table)
    }
}

/// The default [`LayoutCalculator`], configured by [`TableOptions`].
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    options: TableOptions,
}

impl ColumnLayout {
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }
}

impl LayoutCalculator for ColumnLayout {
    fn column_widths(&self, rows: &[Vec<String>]) -> Vec<usize> {
        column_widths(rows)
            .into_iter()
            .map(|width| width.max(self.options.min_width))
            .collect()
    }

    fn divider_row(&self, widths: &[usize]) -> Vec<String> {
        divider_row(widths, self.options.divider_char)
    }

    fn pad_row(&self, row: &[String], widths: &[usize]) -> Vec<String> {
        pad_row(row, widths, self.options.pad_char, self.options.padding)
    }
}
