//! [`Printer`] writes messages, tables and stencils to an output sink.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use printer_render::{ColorMap, DataRow, Stenciller};

use crate::error::Result;
use crate::format::{format_error, format_msg};

/// Formats messages, tables and stencils and writes them to `W`.
///
/// Every writing method has a string-returning counterpart (`smsg` for
/// `msg`, `render_template_stencil` for `use_template_stencil`...), so the
/// same output can be captured instead of printed.
///
/// # Example
///
/// ```rust
/// use printer::{ColorMap, DataRow, OutputMode, Printer, Stenciller};
///
/// let stenciller = Stenciller::builder().output_mode(OutputMode::Text).build();
/// let mut printer = Printer::with_stenciller(Vec::new(), stenciller);
///
/// printer.add_template_stencil("greet", "Hello, {{ name }}!", ColorMap::new()).unwrap();
/// printer
///     .use_template_stencil("greet", &DataRow::from([("name".into(), "Ada".into())]))
///     .unwrap();
/// printer.error("nothing else to do").unwrap();
///
/// let out = String::from_utf8(printer.into_inner()).unwrap();
/// assert_eq!(out, "Hello, Ada!\nError: nothing else to do\n");
/// ```
pub struct Printer<W: Write = Stdout> {
    out: W,
    stenciller: Stenciller,
}

impl Printer<Stdout> {
    /// Creates a printer writing to stdout with default settings.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self::with_stenciller(out, Stenciller::new())
    }

    pub fn with_stenciller(out: W, stenciller: Stenciller) -> Self {
        Self { out, stenciller }
    }

    pub fn stenciller(&self) -> &Stenciller {
        &self.stenciller
    }

    pub fn stenciller_mut(&mut self) -> &mut Stenciller {
        &mut self.stenciller
    }

    /// Consumes the printer, returning the output.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes `text` followed by a newline.
    pub fn msg(&mut self, text: impl Display) -> Result<()> {
        self.write_str(&format_msg(text))
    }

    pub fn smsg(&self, text: impl Display) -> String {
        format_msg(text)
    }

    /// Writes `text` prefixed with `Error: ` and followed by a newline.
    pub fn error(&mut self, text: impl Display) -> Result<()> {
        self.write_str(&format_error(text))
    }

    pub fn serror(&self, text: impl Display) -> String {
        format_error(text)
    }

    /// Writes an empty line.
    pub fn linefeed(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Writes `rows` as an aligned table, one line per row.
    ///
    /// A non-empty `headers` row is written first, followed by a divider.
    pub fn tabulate(&mut self, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
        let lines = self.stabulate(headers, rows);
        self.write_lines(&lines)
    }

    pub fn stabulate(&self, headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
        self.stenciller.layout().tabulate(headers, rows)
    }

    pub fn add_template_stencil(
        &mut self,
        id: impl Into<String>,
        template: impl Into<String>,
        colors: ColorMap,
    ) -> Result<()> {
        Ok(self.stenciller.add_template_stencil(id, template, colors)?)
    }

    pub fn add_table_stencil<H, C>(
        &mut self,
        id: impl Into<String>,
        headers: H,
        column_order: C,
        colors: ColorMap,
    ) -> Result<()>
    where
        H: IntoIterator,
        H::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Ok(self
            .stenciller
            .add_table_stencil(id, headers, column_order, colors)?)
    }

    /// Applies `data` to the template stencil `id` and writes the result
    /// followed by a newline.
    pub fn use_template_stencil(&mut self, id: &str, data: &DataRow) -> Result<()> {
        let rendered = self.render_template_stencil(id, data)?;
        writeln!(self.out, "{}", rendered)?;
        Ok(())
    }

    pub fn render_template_stencil(&self, id: &str, data: &DataRow) -> Result<String> {
        Ok(self.stenciller.apply_template_stencil(id, data)?)
    }

    /// Applies `rows` to the table stencil `id` and writes the aligned lines.
    pub fn use_table_stencil(&mut self, id: &str, rows: &[DataRow]) -> Result<()> {
        let lines = self.render_table_stencil(id, rows)?;
        self.write_lines(&lines)
    }

    pub fn render_table_stencil(&self, id: &str, rows: &[DataRow]) -> Result<Vec<String>> {
        Ok(self.stenciller.render_table_stencil(id, rows)?)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use printer_render::OutputMode;

    fn text_printer() -> Printer<Vec<u8>> {
        let stenciller = Stenciller::builder().output_mode(OutputMode::Text).build();
        Printer::with_stenciller(Vec::new(), stenciller)
    }

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_msg_and_error_write_lines() {
        let mut printer = text_printer();
        printer.msg("one").unwrap();
        printer.error(format_args!("{} failed", "two")).unwrap();
        assert_eq!(output(printer), "one\nError: two failed\n");
    }

    #[test]
    fn test_string_variants_do_not_write() {
        let printer = text_printer();
        assert_eq!(printer.smsg("x"), "x\n");
        assert_eq!(printer.serror("x"), "Error: x\n");
        assert_eq!(output(printer), "");
    }

    #[test]
    fn test_linefeed_writes_empty_line() {
        let mut printer = text_printer();
        printer.msg("a").unwrap();
        printer.linefeed().unwrap();
        printer.msg("b").unwrap();
        assert_eq!(output(printer), "a\n\nb\n");
    }

    #[test]
    fn test_use_template_stencil_ends_with_newline() {
        let mut printer = text_printer();
        printer
            .add_template_stencil("t", "{{ a }}", ColorMap::new())
            .unwrap();
        let data = DataRow::from([("a".to_string(), "x".to_string())]);
        printer.use_template_stencil("t", &data).unwrap();
        printer.use_template_stencil("t", &data).unwrap();
        assert_eq!(output(printer), "x\nx\n");
    }

    #[test]
    fn test_tabulate_writes_each_line() {
        let mut printer = text_printer();
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["cc".to_string(), "d".to_string()],
        ];
        printer.tabulate(&[], &rows).unwrap();
        assert_eq!(output(printer), "a     b\ncc    d\n");
    }
}
