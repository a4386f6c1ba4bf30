//! Named, reusable output stencils.
//!
//! A stencil pairs a [`ColorMap`] with either a template string
//! ([`TemplateStencil`]) or a column layout ([`TableStencil`]). Stencils are
//! registered once and applied many times to per-call data:
//!
//! 1. Fields named in the color map are colorized via the [`Colorizer`](crate::Colorizer)
//! 2. Template stencils interpolate the colored fields into their template
//! 3. Table stencils arrange the colored fields into columns, optionally
//!    topped by a header row and a divider row
//!
//! See [`Stenciller`] for the entry point and [`StencilRegistry`] for the
//! storage rules.

use std::collections::HashMap;

mod registry;
mod stenciller;

pub use registry::StencilRegistry;
pub use stenciller::{color_row, positional_row, Stenciller, StencillerBuilder};

use serde::Serialize;

/// Field key to color name.
pub type ColorMap = HashMap<String, String>;

/// Field key to value, supplied at apply time.
pub type DataRow = HashMap<String, String>;

/// A stencil rendered by interpolating a template.
///
/// Placeholders use Jinja syntax and reference fields by key, e.g.
/// `"Hello, {{ name }}!"`. Keys that are not plain identifiers, or that
/// read as literals such as `none` or `true`, are reached through the
/// `field` function: `"Hello, {{ field(\"first-name\") }}!"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateStencil {
    id: String,
    template: String,
    colors: ColorMap,
}

impl TemplateStencil {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }
}

/// A stencil rendered as table rows.
///
/// `column_order` maps the keys of each data row to output columns;
/// `headers`, when non-empty, is placed above the rows together with a
/// divider row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStencil {
    id: String,
    headers: Vec<String>,
    column_order: Vec<String>,
    colors: ColorMap,
}

impl TableStencil {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_order(&self) -> &[String] {
        &self.column_order
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }
}
