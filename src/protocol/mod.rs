//! # EPL2 Protocol Implementation
//!
//! This module provides low-level builders for the EPL2 page description
//! language used by Zebra-style desktop thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Text, barcode and line commands, escaping, job framing
//! - [`barcode`]: Symbology pattern codes
//! - [`metrics`]: Resident font cell sizes per resolution
//! - [`rotation`]: Quarter-turn rotation normalization
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::protocol::commands::{self, TextCommand};
//! use etiqueta::protocol::rotation::Rotation;
//!
//! let text = TextCommand {
//!     x: 10,
//!     y: 10,
//!     rotation: Rotation::Portrait,
//!     font: 3,
//!     width_factor: 1,
//!     height_factor: 1,
//!     reverse: false,
//!     data: "SHIP TO",
//! };
//! let rule = commands::line(10, 40, 3, 800, 40);
//!
//! let job = commands::job([text.to_string(), rule], 1);
//! assert!(job.starts_with("\nN\n"));
//! assert!(job.ends_with("P1\n"));
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the Zebra "EPL2 Programming Guide".

pub mod barcode;
pub mod commands;
pub mod metrics;
pub mod rotation;
