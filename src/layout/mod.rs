//! # Layout Engine
//!
//! Measurement and positioning for label content, in printer dots.
//!
//! ## String Footprint
//!
//! Resident fonts are monospaced. Each character occupies its cell plus a
//! gap on both sides, and one gap is dropped at the end of the run:
//!
//! ```text
//! width  = ((char_width + 2 × space_width) × chars − space_width) × width_factor
//! height = (char_height + space_height) × height_factor
//! ```
//!
//! `chars` counts the text after trimming surrounding whitespace. Height does
//! not look at the text at all.
//!
//! ## Barcode Footprint
//!
//! Only Code 39 can be measured up front. Each symbol is six narrow and
//! three wide elements, and the start/stop characters add two symbols:
//!
//! ```text
//! width = (narrow × 6 + wide × 3) × (chars + 2)
//! ```
//!
//! ## Modules
//!
//! - [`transform`]: Logical cursor to physical coordinates

pub mod transform;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EtiquetaError, Result};
use crate::protocol::barcode::Symbology;
use crate::protocol::metrics::cell_metrics;

pub use transform::physical_xy;

/// Horizontal placement of a text run or barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Keep the cursor where it is. Unknown names deserialize to this.
    #[default]
    #[serde(other)]
    Leave,
}

/// Width of `text` in dots.
///
/// Text that trims to nothing is not special-cased: the formula gives
/// `-space_width × width_factor`.
///
/// ## Example
///
/// ```
/// use etiqueta::layout::string_width;
///
/// assert_eq!(string_width("AB", 1, 4, 203).unwrap(), 31);
/// assert_eq!(string_width("  AB  ", 2, 4, 203).unwrap(), 62);
/// ```
///
/// ## Errors
///
/// [`EtiquetaError::MetricsLookup`] when `(dpi, font)` has no metrics, and
/// [`EtiquetaError::OutOfRange`] when the width does not fit in `i32`.
pub fn string_width(text: &str, width_factor: u32, font: u8, dpi: u32) -> Result<i32> {
    let m = cell_metrics(dpi, font)?;
    let chars = i64::try_from(text.trim().chars().count()).ok();
    let cell = i64::from(m.char_width + 2 * m.space_width);
    let width = chars
        .and_then(|n| cell.checked_mul(n))
        .map(|w| w - i64::from(m.space_width))
        .and_then(|w| w.checked_mul(i64::from(width_factor)));
    to_dots(width, "text width")
}

/// Height of one line of text in dots.
///
/// ```
/// use etiqueta::layout::string_height;
///
/// assert_eq!(string_height("AB", 1, 4, 203).unwrap(), 25);
/// ```
pub fn string_height(_text: &str, height_factor: u32, font: u8, dpi: u32) -> Result<i32> {
    let m = cell_metrics(dpi, font)?;
    let height = i64::from(m.char_height + m.space_height) * i64::from(height_factor);
    to_dots(Some(height), "text height")
}

/// Width of a barcode in dots.
///
/// `data` is counted as given, without trimming.
///
/// ## Errors
///
/// [`EtiquetaError::UnsupportedBarcodeGeometry`] for anything other than
/// Code 39 and Code 39 with check digit. Place those barcodes explicitly.
pub fn barcode_width(data: &str, symbology: Symbology, narrow: u32, wide: u32) -> Result<i32> {
    if !symbology.is_code39_family() {
        return Err(EtiquetaError::UnsupportedBarcodeGeometry {
            pattern: symbology.code(),
        });
    }
    let symbol = i64::from(narrow) * 6 + i64::from(wide) * 3;
    let width = i64::try_from(data.chars().count())
        .ok()
        .and_then(|n| symbol.checked_mul(n + 2));
    to_dots(width, "barcode width")
}

/// Narrow an intermediate measurement to dots.
fn to_dots(value: Option<i64>, what: &'static str) -> Result<i32> {
    value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(EtiquetaError::OutOfRange { what })
}

/// Resolve an alignment into an absolute x.
///
/// | Alignment | x |
/// |-----------|---|
/// | Left | `margin` |
/// | Right | `round(page_width − margin − content_width)` |
/// | Center | `round((page_width − content_width) / 2)` |
/// | Leave | `current_x` |
///
/// Center ignores the margin. Rounding is half away from zero.
pub fn resolve_alignment(
    align: Alignment,
    content_width: i32,
    page_width_dots: f64,
    margin: i32,
    current_x: i32,
) -> i32 {
    let x = match align {
        Alignment::Left => margin,
        Alignment::Right => {
            (page_width_dots - f64::from(margin) - f64::from(content_width)).round() as i32
        }
        Alignment::Center => ((page_width_dots - f64::from(content_width)) / 2.0).round() as i32,
        Alignment::Leave => return current_x,
    };
    debug!(?align, content_width, x, "resolved alignment");
    x
}

/// Whether resolving `align` needs the content width at all.
#[inline]
pub(crate) fn needs_width(align: Alignment) -> bool {
    matches!(align, Alignment::Center | Alignment::Right)
}
