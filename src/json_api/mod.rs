//! # JSON API
//!
//! Deserialize JSON job documents and replay them on a [`Label`].
//!
//! A job carries construction options, a copy count and a list of drawing
//! calls. Each call is tagged by `"op"` and takes the same arguments as the
//! [`Label`] method of the same name.
//!
//! ## Example
//!
//! ```
//! use etiqueta::json_api::JsonJob;
//!
//! let json = r#"{
//!     "options": {"width": 4.0, "height": 6.0},
//!     "quantity": 2,
//!     "ops": [
//!         {"op": "write_line", "text": "SHIP TO", "font": 3},
//!         {"op": "write_line", "text": "J. Doe", "align": "center"},
//!         {"op": "write_barcode_line", "data": "PKG0042", "align": "center"},
//!         {"op": "line", "x1": 10, "y1": 400, "x2": 802, "y2": 400}
//!     ]
//! }"#;
//!
//! let job = JsonJob::from_json_str(json).unwrap();
//! let out = job.render().unwrap();
//! assert!(out.ends_with("P2\n"));
//! ```
//!
//! [`Label`]: crate::label::Label

mod convert;
mod schema;

pub use convert::JsonApiError;
pub use schema::{JsonBarcode, JsonJob, JsonLine, JsonOp, JsonText};
