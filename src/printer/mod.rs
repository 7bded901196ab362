//! # Printer Module
//!
//! This module provides printer page geometry and construction options.
//!
//! ## Modules
//!
//! - [`config`]: Printer profile and label options

pub mod config;

pub use config::{LabelOptions, PrinterProfile};
