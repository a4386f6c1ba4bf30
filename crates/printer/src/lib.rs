//! # Printer - Colorized Messages, Tables and Stencils
//!
//! `printer` couples the stencil engine from [`printer_render`] to an output
//! (anything implementing `std::io::Write`). It adds plain message and error
//! lines, ad-hoc tables and write-through stencil application.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use printer::{ColorMap, DataRow, Printer};
//!
//! let mut printer = Printer::stdout();
//! printer.msg(format_args!("{} services checked", 2))?;
//!
//! let colors = ColorMap::from([("state".to_string(), "green".to_string())]);
//! printer.add_table_stencil("services", ["SERVICE", "STATE"], ["name", "state"], colors)?;
//! printer.use_table_stencil(
//!     "services",
//!     &[
//!         DataRow::from([("name".into(), "web".into()), ("state".into(), "up".into())]),
//!         DataRow::from([("name".into(), "database".into()), ("state".into(), "up".into())]),
//!     ],
//! )?;
//! # Ok::<(), printer::PrinterError>(())
//! ```

mod error;
mod format;
mod sink;

pub use error::{PrinterError, Result};
pub use format::{format_error, format_msg};
pub use sink::Printer;

// Re-export the engine API
pub use printer_render::{
    layout, parse_color, stencil, ColorMap, Colorizer, ColumnLayout, ConsoleColorizer, DataRow,
    LayoutCalculator, OutputMode, StencilError, StencilKind, StencilRegistry, Stenciller,
    StencillerBuilder, TableOptions, TableStencil, TemplateStencil,
};
