//! Storage for template and table stencils.

use std::collections::HashMap;

use super::{ColorMap, TableStencil, TemplateStencil};
use crate::error::{Result, StencilError, StencilKind};

/// Append-only store of stencils, keyed by id.
///
/// Template and table stencils live in separate namespaces: registering a
/// table stencil named `"users"` does not conflict with a template stencil
/// of the same name. Within a namespace ids are unique and non-empty.
///
/// There is no update or removal. A registry shared between threads should
/// sit behind a `RwLock`: registration needs `&mut self`, lookups only `&self`.
///
/// # Example
///
/// ```rust
/// use printer_render::{ColorMap, StencilError, StencilRegistry};
///
/// let mut registry = StencilRegistry::new();
/// registry.add_template("greet", "Hello, {{ name }}!", ColorMap::new()).unwrap();
///
/// let err = registry.add_template("greet", "Hi", ColorMap::new()).unwrap_err();
/// assert!(matches!(err, StencilError::DuplicateId { .. }));
///
/// assert_eq!(registry.find_template("greet").unwrap().template(), "Hello, {{ name }}!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StencilRegistry {
    templates: HashMap<String, TemplateStencil>,
    tables: HashMap<String, TableStencil>,
}

impl StencilRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template stencil.
    ///
    /// # Errors
    ///
    /// [`StencilError::EmptyId`] if `id` is empty, [`StencilError::DuplicateId`]
    /// if a template stencil with `id` already exists. The registry is left
    /// unchanged on error.
    pub fn add_template(
        &mut self,
        id: impl Into<String>,
        template: impl Into<String>,
        colors: ColorMap,
    ) -> Result<()> {
        let id = id.into();
        check_new_id(StencilKind::Template, &id, self.templates.contains_key(&id))?;
        log::debug!("registered template stencil '{}'", id);
        self.templates.insert(
            id.clone(),
            TemplateStencil {
                id,
                template: template.into(),
                colors,
            },
        );
        Ok(())
    }

    /// Registers a table stencil.
    ///
    /// # Errors
    ///
    /// Same as [`add_template`](Self::add_template), scoped to table stencils.
    pub fn add_table<H, C>(
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
        let id = id.into();
        check_new_id(StencilKind::Table, &id, self.tables.contains_key(&id))?;
        let stencil = TableStencil {
            id: id.clone(),
            headers: headers.into_iter().map(Into::into).collect(),
            column_order: column_order.into_iter().map(Into::into).collect(),
            colors,
        };
        log::debug!(
            "registered table stencil '{}' with {} columns",
            id,
            stencil.column_order.len()
        );
        self.tables.insert(id, stencil);
        Ok(())
    }

    /// Looks up a template stencil.
    ///
    /// # Errors
    ///
    /// [`StencilError::NotFound`] if no template stencil has this id.
    pub fn find_template(&self, id: &str) -> Result<&TemplateStencil> {
        self.templates.get(id).ok_or_else(|| StencilError::NotFound {
            kind: StencilKind::Template,
            id: id.to_string(),
        })
    }

    /// Looks up a table stencil.
    ///
    /// # Errors
    ///
    /// [`StencilError::NotFound`] if no table stencil has this id.
    pub fn find_table(&self, id: &str) -> Result<&TableStencil> {
        self.tables.get(id).ok_or_else(|| StencilError::NotFound {
            kind: StencilKind::Table,
            id: id.to_string(),
        })
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

fn check_new_id(kind: StencilKind, id: &str, exists: bool) -> Result<()> {
    if id.is_empty() {
        return Err(StencilError::EmptyId { kind });
    }
    if exists {
        return Err(StencilError::DuplicateId {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}
