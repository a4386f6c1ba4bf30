//! Applying data to registered stencils.

use minijinja::{Environment, State, UndefinedBehavior, Value};

use super::{ColorMap, DataRow, StencilRegistry, TableStencil, TemplateStencil};
use crate::colorize::{Colorizer, ConsoleColorizer};
use crate::error::Result;
use crate::layout::{ColumnLayout, LayoutCalculator, TableOptions};
use crate::output::OutputMode;

/// Replaces each value whose key appears in `colors` with its colorized form.
///
/// Keys without a color, and keys whose color the colorizer does not know,
/// keep their original value. The input row is not modified.
pub fn color_row(colorizer: &dyn Colorizer, colors: &ColorMap, row: &DataRow) -> DataRow {
    row.iter()
        .map(|(key, value)| {
            let value = match colors.get(key) {
                Some(color) => colorizer.colorize(value, color).unwrap_or_else(|| {
                    log::info!("unknown color '{}' for field '{}', leaving it uncolored", color, key);
                    value.clone()
                }),
                None => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Picks the values of `row` in `column_order`.
///
/// A key missing from `row` yields an empty cell, so later columns never
/// shift. Keys not named in `column_order` are dropped.
pub fn positional_row(column_order: &[String], row: &DataRow) -> Vec<String> {
    column_order
        .iter()
        .map(|key| row.get(key).cloned().unwrap_or_default())
        .collect()
}

/// Template function `field(name)`: looks up a data key by its exact name.
///
/// Reaches keys that are not valid template identifiers (`first-name`) or
/// that collide with literals (`none`, `true`). Missing keys render empty.
fn field(state: &State, name: &str) -> Value {
    state.lookup(name).unwrap_or_default()
}

/// Owns a [`StencilRegistry`] and applies data to its stencils.
///
/// # Example
///
/// ```rust
/// use printer_render::{ColorMap, DataRow, OutputMode, Stenciller};
///
/// let mut stenciller = Stenciller::builder().output_mode(OutputMode::Text).build();
///
/// stenciller
///     .add_template_stencil("greet", "Hello, {{ name }}!", ColorMap::new())
///     .unwrap();
/// let data = DataRow::from([("name".to_string(), "Ada".to_string())]);
/// assert_eq!(stenciller.apply_template_stencil("greet", &data).unwrap(), "Hello, Ada!");
///
/// stenciller
///     .add_table_stencil("langs", ["NAME", "YEAR"], ["name", "year"], ColorMap::new())
///     .unwrap();
/// let rows = vec![
///     DataRow::from([("name".into(), "Rust".into()), ("year".into(), "2015".into())]),
///     DataRow::from([("name".into(), "C".into()), ("year".into(), "1972".into())]),
/// ];
/// let table = stenciller.apply_table_stencil("langs", &rows).unwrap();
/// assert_eq!(table[0], vec!["NAME", "YEAR"]);
/// assert_eq!(table[1], vec!["----", "----"]);
/// assert_eq!(table[2], vec!["Rust", "2015"]);
/// ```
pub struct Stenciller {
    registry: StencilRegistry,
    colorizer: Box<dyn Colorizer>,
    layout: Box<dyn LayoutCalculator>,
    env: Environment<'static>,
}

impl Stenciller {
    /// Creates a stenciller with console colors (auto-detected) and the
    /// default table options.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> StencillerBuilder {
        StencillerBuilder::default()
    }

    pub fn registry(&self) -> &StencilRegistry {
        &self.registry
    }

    pub fn layout(&self) -> &dyn LayoutCalculator {
        self.layout.as_ref()
    }

    /// See [`StencilRegistry::add_template`].
    pub fn add_template_stencil(
        &mut self,
        id: impl Into<String>,
        template: impl Into<String>,
        colors: ColorMap,
    ) -> Result<()> {
        self.registry.add_template(id, template, colors)
    }

    /// See [`StencilRegistry::add_table`].
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
        self.registry.add_table(id, headers, column_order, colors)
    }

    pub fn find_template_stencil(&self, id: &str) -> Result<&TemplateStencil> {
        self.registry.find_template(id)
    }

    pub fn find_table_stencil(&self, id: &str) -> Result<&TableStencil> {
        self.registry.find_table(id)
    }

    /// Colorizes `row` with this stenciller's colorizer.
    pub fn color_row(&self, colors: &ColorMap, row: &DataRow) -> DataRow {
        color_row(self.colorizer.as_ref(), colors, row)
    }

    /// Colorizes `data` and interpolates it into the template stencil `id`.
    ///
    /// Placeholders naming a key absent from `data` render as empty strings.
    ///
    /// # Errors
    ///
    /// [`StencilError::NotFound`](crate::StencilError::NotFound) for an unknown id,
    /// [`StencilError::Template`](crate::StencilError::Template) if the template
    /// cannot be parsed.
    pub fn apply_template_stencil(&self, id: &str, data: &DataRow) -> Result<String> {
        let stencil = self.registry.find_template(id)?;
        if stencil.template().is_empty() {
            log::debug!("template stencil '{}' has an empty template", id);
        }
        let colored = self.color_row(stencil.colors(), data);
        Ok(self.env.render_str(stencil.template(), &colored)?)
    }

    /// Colorizes `rows` and arranges them in the column order of the table
    /// stencil `id`.
    ///
    /// If the stencil has headers, the result starts with the header row and
    /// a divider row sized to the widest visible cell of each column. A header
    /// row shorter than the column order is filled with empty cells, so the
    /// header, divider and data rows share one cell count.
    ///
    /// # Errors
    ///
    /// [`StencilError::NotFound`](crate::StencilError::NotFound) for an unknown id.
    pub fn apply_table_stencil(&self, id: &str, rows: &[DataRow]) -> Result<Vec<Vec<String>>> {
        let stencil = self.registry.find_table(id)?;
        let body = rows.iter().map(|row| {
            let colored = self.color_row(stencil.colors(), row);
            positional_row(stencil.column_order(), &colored)
        });

        if stencil.headers().is_empty() {
            return Ok(body.collect());
        }

        let mut headers = stencil.headers().to_vec();
        if headers.len() < stencil.column_order().len() {
            headers.resize(stencil.column_order().len(), String::new());
        }

        let mut table = Vec::with_capacity(rows.len() + 2);
        table.push(headers);
        table.extend(body);
        let widths = self.layout.column_widths(&table);
        table.insert(1, self.layout.divider_row(&widths));
        log::debug!(
            "table stencil '{}' produced {} rows over {} columns",
            id,
            table.len(),
            widths.len()
        );
        Ok(table)
    }

    /// Applies the table stencil `id` and pads the result into aligned lines.
    ///
    /// # Errors
    ///
    /// Same as [`apply_table_stencil`](Self::apply_table_stencil).
    pub fn render_table_stencil(&self, id: &str, rows: &[DataRow]) -> Result<Vec<String>> {
        let table = self.apply_table_stencil(id, rows)?;
        Ok(self.layout.align(&table))
    }
}

impl Default for Stenciller {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Stenciller`].
///
/// An explicit [`colorizer`](Self::colorizer) takes precedence over
/// [`output_mode`](Self::output_mode); an explicit [`layout`](Self::layout)
/// takes precedence over [`table_options`](Self::table_options).
#[derive(Default)]
pub struct StencillerBuilder {
    colorizer: Option<Box<dyn Colorizer>>,
    layout: Option<Box<dyn LayoutCalculator>>,
    output_mode: OutputMode,
    table_options: TableOptions,
}

impl StencillerBuilder {
    pub fn colorizer(mut self, colorizer: impl Colorizer + 'static) -> Self {
        self.colorizer = Some(Box::new(colorizer));
        self
    }

    pub fn layout(mut self, layout: impl LayoutCalculator + 'static) -> Self {
        self.layout = Some(Box::new(layout));
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn table_options(mut self, options: TableOptions) -> Self {
        self.table_options = options;
        self
    }

    pub fn build(self) -> Stenciller {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_keep_trailing_newline(true);
        env.add_function("field", field);

        let output_mode = self.output_mode;
        let table_options = self.table_options;
        Stenciller {
            registry: StencilRegistry::new(),
            colorizer: self
                .colorizer
                .unwrap_or_else(|| Box::new(ConsoleColorizer::new(output_mode))),
            layout: self
                .layout
                .unwrap_or_else(|| Box::new(ColumnLayout::new(table_options))),
            env,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn header_and_divider_share_cell_count(
            headers in prop::collection::vec("[A-Z]{1,8}", 1..6),
            column_order in prop::collection::vec("[a-z]{1,6}", 0..6),
            value in "[a-z0-9]{0,10}",
        ) {
            let mut stenciller = Stenciller::builder().output_mode(OutputMode::Text).build();
            stenciller
                .add_table_stencil("t", headers.clone(), column_order.clone(), ColorMap::new())
                .unwrap();
            let data: DataRow = column_order
                .iter()
                .map(|key| (key.clone(), value.clone()))
                .collect();

            let table = stenciller.apply_table_stencil("t", &[data]).unwrap();
            prop_assert_eq!(table[1].len(), table[0].len());
            prop_assert_eq!(table[0].len(), headers.len().max(column_order.len()));
            prop_assert_eq!(table[2].len(), column_order.len());
        }
    }
}
