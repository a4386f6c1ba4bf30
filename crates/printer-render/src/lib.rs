//! # Printer Render - Stencil Engine for Terminal Output
//!
//! `printer-render` turns string-keyed data into colorized, column-aligned
//! text. Output shapes are registered once as named *stencils* and applied
//! repeatedly:
//!
//! - [`TemplateStencil`]: a Jinja-style template plus a color map
//! - [`TableStencil`]: a column order, optional headers, plus a color map
//!
//! ## Core Concepts
//!
//! - [`Stenciller`]: owns the stencils and applies data to them
//! - [`StencilRegistry`]: append-only storage, one namespace per stencil kind
//! - [`Colorizer`]: maps `(text, color name)` to colored text; [`ConsoleColorizer`] is the default
//! - [`layout`]: ANSI-aware widths, padding and divider rows
//! - [`OutputMode`]: whether colors emit escape codes
//!
//! ## Quick Start
//!
//! ```rust
//! use printer_render::{ColorMap, DataRow, OutputMode, Stenciller};
//!
//! let mut stenciller = Stenciller::builder().output_mode(OutputMode::Text).build();
//!
//! let colors = ColorMap::from([("state".to_string(), "green".to_string())]);
//! stenciller
//!     .add_table_stencil("services", ["SERVICE", "STATE"], ["name", "state"], colors)
//!     .unwrap();
//!
//! let rows = vec![
//!     DataRow::from([("name".into(), "web".into()), ("state".into(), "up".into())]),
//!     DataRow::from([("name".into(), "database".into()), ("state".into(), "up".into())]),
//! ];
//!
//! for line in stenciller.render_table_stencil("services", &rows).unwrap() {
//!     println!("{}", line);
//! }
//! ```

mod colorize;
mod error;
pub mod layout;
mod output;
pub mod stencil;

pub use colorize::{parse_color, Colorizer, ConsoleColorizer};
pub use error::{Result, StencilError, StencilKind};
pub use layout::{ColumnLayout, LayoutCalculator, TableOptions};
pub use output::OutputMode;
pub use stencil::{
    ColorMap, DataRow, StencilRegistry, Stenciller, StencillerBuilder, TableStencil,
    TemplateStencil,
};
