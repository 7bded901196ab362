//! # Etiqueta - EPL2 Label Builder
//!
//! Etiqueta is a Rust library for composing labels for Zebra-style thermal
//! label printers that speak EPL2. It provides:
//!
//! - **Protocol implementation**: EPL2 text, barcode and line commands
//! - **Layout**: Font-metric string measurement, alignment, rotation
//! - **Label builder**: A cursor-driven command stack with job export
//! - **Transport**: Print dispatch through the system spooler
//!
//! ## Quick Start
//!
//! ```no_run
//! use etiqueta::{
//!     label::{BarcodeOptions, Label, TextOptions},
//!     transport::LprSpooler,
//! };
//!
//! // 4" × 4" label at 203 DPI
//! let mut label = Label::new();
//!
//! label
//!     .write_line("ACME WAREHOUSE", &TextOptions::new().center().font(5))?
//!     .write_line("Bin 14-C", &TextOptions::new())?
//!     .write_barcode_line("14C-0093", &BarcodeOptions::new().center().height(80))?;
//!
//! // Two copies through `lpr -P tagprinter -o raw`
//! label.print_to(&LprSpooler::new(), "tagprinter", 2)?;
//!
//! # Ok::<(), etiqueta::error::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | EPL2 command builders, symbologies, font metrics |
//! | [`layout`] | Measurement, alignment, coordinate transform |
//! | [`label`] | Label builder and command stack |
//! | [`printer`] | Page profile and construction options |
//! | [`json_api`] | JSON job documents |
//! | [`transport`] | Print spooler backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Desktop EPL2 printers at 203 DPI (LP/TLP 2824, 2844 and similar). Other
//! resolutions can draw barcodes and lines, but text measurement needs a
//! font metrics table and fails without one.

pub mod error;
pub mod json_api;
pub mod label;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use label::Label;
pub use printer::{LabelOptions, PrinterProfile};
pub use transport::LprSpooler;
