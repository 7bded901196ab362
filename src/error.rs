//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// No font metrics exist for this resolution and font index
    #[error("No font metrics for font {font} at {dpi} DPI")]
    MetricsLookup { dpi: u32, font: u8 },

    /// Barcode footprint is only known for the Code 39 family
    #[error("Cannot measure barcode pattern '{pattern}'; supply explicit coordinates instead")]
    UnsupportedBarcodeGeometry { pattern: &'static str },

    /// A measurement or cursor position left the `i32` dot range
    #[error("{what} is out of range")]
    OutOfRange { what: &'static str },

    /// Symbology name or wire code not in the pattern table
    #[error("Unknown barcode symbology: {0}")]
    UnknownSymbology(String),

    /// Invalid construction option or job document
    #[error("Configuration error: {0}")]
    Config(String),

    /// Print spooler could not accept the job
    #[error("Spooler error: {0}")]
    Spooler(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used by fallible builder operations
pub type Result<T> = std::result::Result<T, EtiquetaError>;
