//! Registers a template and a table stencil and prints them.
//!
//! Run with `RUST_LOG=info` to see the diagnostic for the unknown color.

use printer::{ColorMap, DataRow, Printer, PrinterError};

fn row(pairs: &[(&str, &str)]) -> DataRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn main() -> Result<(), PrinterError> {
    env_logger::init();

    let mut printer = Printer::stdout();

    printer.add_template_stencil(
        "summary",
        "{{ count }} services, {{ down }} down",
        row(&[("count", "cyan"), ("down", "bright_red")]),
    )?;
    printer.add_table_stencil(
        "services",
        ["SERVICE", "STATE", "UPTIME"],
        ["name", "state", "uptime"],
        row(&[("name", "bold-blue"), ("state", "green")]),
    )?;

    printer.use_template_stencil("summary", &row(&[("count", "3"), ("down", "1")]))?;
    printer.linefeed()?;
    printer.use_table_stencil(
        "services",
        &[
            row(&[("name", "web"), ("state", "up"), ("uptime", "12d")]),
            row(&[("name", "database"), ("state", "up"), ("uptime", "40d")]),
            row(&[("name", "queue"), ("state", "down")]),
        ],
    )?;

    if let Err(err) = printer.use_template_stencil("missing", &DataRow::new()) {
        printer.error(err)?;
    }
    Ok(())
}
