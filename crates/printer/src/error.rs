//! Error type for the printer facade.

use printer_render::StencilError;
use thiserror::Error;

/// Errors returned by [`Printer`](crate::Printer) operations.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// Registering or applying a stencil failed.
    #[error(transparent)]
    Stencil(#[from] StencilError),

    /// Writing to the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations.
pub type Result<T> = std::result::Result<T, PrinterError>;
