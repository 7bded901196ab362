//! # Printer Configuration
//!
//! This module defines the page geometry a label is composed against, and the
//! loosely-typed construction options it is built from.
//!
//! ## Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | width × height | 4.0 × 4.0 in |
//! | dpi | 203 |
//! | font | 4 |
//! | line_width | 3 dots |
//! | rotation | portrait |
//! | margin_x, margin_y | 10, 10 dots |
//! | barcode_pattern | code39 |
//!
//! Barcode bar widths and height left unset are derived from the profile
//! when the label is built: narrow 3, wide 3 × narrow, height half an inch
//! (see [`PrinterProfile::default_barcode_height`]). The human-readable
//! flag stays unset until a barcode call gives one.
//!
//! ## Usage
//!
//! ```
//! use etiqueta::printer::{LabelOptions, PrinterProfile};
//!
//! let options = LabelOptions::from_json_str(r#"{"width": 2.25, "height": 1.25}"#).unwrap();
//! let profile = PrinterProfile::from_options(&options).unwrap();
//! assert_eq!(profile.width_dots(), 2.25 * 203.0);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EtiquetaError, Result};
use crate::protocol::barcode::Symbology;
use crate::protocol::metrics::MAX_FONT;
use crate::protocol::rotation::Rotation;

// ============================================================================
// CONSTRUCTION OPTIONS
// ============================================================================

/// Construction options for a label, every field optional.
///
/// Deserializes from JSON. `rotation` accepts `1`, `90` or `"landscape"`;
/// `barcode_pattern` accepts a symbology name or wire code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOptions {
    /// Page width in inches
    pub width: Option<f64>,
    /// Page height in inches
    pub height: Option<f64>,
    pub dpi: Option<u32>,
    pub font: Option<u8>,
    pub barcode_pattern: Option<Symbology>,
    pub barcode_narrow_width: Option<u32>,
    pub barcode_wide_width: Option<u32>,
    pub barcode_height: Option<u32>,
    /// Print the encoded data under the bars
    pub barcode_textify: Option<bool>,
    pub line_width: Option<u32>,
    pub rotation: Option<Rotation>,
    pub margin_x: Option<i32>,
    pub margin_y: Option<i32>,
}

impl LabelOptions {
    /// Parse options from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

// ============================================================================
// PRINTER PROFILE
// ============================================================================

/// # Printer Profile
///
/// Immutable page geometry and drawing defaults for one label.
///
/// ## Calculations
///
/// ```text
/// width_dots  = width_in  × dpi
/// height_dots = height_in × dpi
///
/// For the default 4" × 4" label at 203 DPI:
///   width_dots = height_dots = 812
/// ```
///
/// Dot extents stay fractional so alignment can round once, at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrinterProfile {
    /// Page width in inches
    pub width_in: f64,
    /// Page height in inches
    pub height_in: f64,
    /// Resolution in dots per inch
    pub dpi: u32,
    /// Font used when a call does not name one
    pub font: u8,
    /// Line thickness in dots when a call does not give one
    pub line_width: u32,
    /// Rotation the cursor starts with
    pub rotation: Rotation,
    /// Left margin in dots
    pub margin_x: i32,
    /// Top margin in dots
    pub margin_y: i32,
}

impl PrinterProfile {
    /// # 4" × 4" at 203 DPI
    ///
    /// The common shipping-label stock for LP/TLP 2824/2844 class printers.
    pub const DEFAULT: Self = Self {
        width_in: 4.0,
        height_in: 4.0,
        dpi: 203,
        font: 4,
        line_width: 3,
        rotation: Rotation::Portrait,
        margin_x: 10,
        margin_y: 10,
    };

    /// Apply construction options over [`PrinterProfile::DEFAULT`].
    ///
    /// ## Errors
    ///
    /// [`EtiquetaError::Config`] for a non-positive page size or DPI, or a
    /// font outside `1..=5`.
    pub fn from_options(options: &LabelOptions) -> Result<Self> {
        let d = Self::DEFAULT;
        let profile = Self {
            width_in: options.width.unwrap_or(d.width_in),
            height_in: options.height.unwrap_or(d.height_in),
            dpi: options.dpi.unwrap_or(d.dpi),
            font: options.font.unwrap_or(d.font),
            line_width: options.line_width.unwrap_or(d.line_width),
            rotation: options.rotation.unwrap_or(d.rotation),
            margin_x: options.margin_x.unwrap_or(d.margin_x),
            margin_y: options.margin_y.unwrap_or(d.margin_y),
        };
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if !(self.width_in.is_finite() && self.width_in > 0.0) {
            return Err(EtiquetaError::Config(format!(
                "page width must be positive, got {}",
                self.width_in
            )));
        }
        if !(self.height_in.is_finite() && self.height_in > 0.0) {
            return Err(EtiquetaError::Config(format!(
                "page height must be positive, got {}",
                self.height_in
            )));
        }
        if self.dpi == 0 {
            return Err(EtiquetaError::Config("dpi must be positive".to_string()));
        }
        if !(1..=MAX_FONT).contains(&self.font) {
            return Err(EtiquetaError::Config(format!(
                "font must be 1..={}, got {}",
                MAX_FONT, self.font
            )));
        }
        Ok(())
    }

    /// Page width in dots
    #[inline]
    pub fn width_dots(&self) -> f64 {
        self.width_in * f64::from(self.dpi)
    }

    /// Page height in dots
    #[inline]
    pub fn height_dots(&self) -> f64 {
        self.height_in * f64::from(self.dpi)
    }

    /// Narrow bar width when nothing else sets one
    #[inline]
    pub fn default_barcode_narrow(&self) -> u32 {
        3
    }

    /// Barcode height when nothing else sets one: half an inch.
    ///
    /// ```
    /// use etiqueta::printer::PrinterProfile;
    ///
    /// assert_eq!(PrinterProfile::DEFAULT.default_barcode_height(), 102);
    /// ```
    #[inline]
    pub fn default_barcode_height(&self) -> u32 {
        (f64::from(self.dpi) / 2.0).round() as u32
    }
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let p = PrinterProfile::default();
        assert_eq!(p.width_dots(), 812.0);
        assert_eq!(p.height_dots(), 812.0);
        assert_eq!((p.margin_x, p.margin_y), (10, 10));
        assert_eq!(p.font, 4);
        assert_eq!(p.line_width, 3);
        assert_eq!(p.rotation, Rotation::Portrait);
    }

    #[test]
    fn test_empty_options_are_default() {
        let p = PrinterProfile::from_options(&LabelOptions::default()).unwrap();
        assert_eq!(p, PrinterProfile::DEFAULT);
    }

    #[test]
    fn test_options_override() {
        let json = r#"{
            "width": 2.0,
            "height": 1.0,
            "font": 2,
            "rotation": "landscape",
            "margin_x": 0,
            "barcode_pattern": "code128_auto"
        }"#;
        let options = LabelOptions::from_json_str(json).unwrap();
        assert_eq!(options.barcode_pattern, Some(Symbology::Code128Auto));

        let p = PrinterProfile::from_options(&options).unwrap();
        assert_eq!(p.width_dots(), 406.0);
        assert_eq!(p.height_dots(), 203.0);
        assert_eq!(p.font, 2);
        assert_eq!(p.rotation, Rotation::Landscape);
        assert_eq!(p.margin_x, 0);
        assert_eq!(p.margin_y, 10);
    }

    #[test]
    fn test_rotation_degrees_in_options() {
        let options = LabelOptions::from_json_str(r#"{"rotation": 270}"#).unwrap();
        assert_eq!(options.rotation, Some(Rotation::InvertedLandscape));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(LabelOptions::from_json_str(r#"{"colour": "red"}"#).is_err());
    }

    #[test]
    fn test_options_from_path() {
        let path = std::env::temp_dir().join(format!("etiqueta-options-{}.json", std::process::id()));
        fs::write(&path, r#"{"height": 6.0, "barcode_height": 80}"#).unwrap();
        let options = LabelOptions::from_path(&path);
        fs::remove_file(&path).unwrap();

        let options = options.unwrap();
        assert_eq!(options.height, Some(6.0));
        assert_eq!(options.barcode_height, Some(80));
    }

    #[test]
    fn test_options_from_missing_path() {
        let err = LabelOptions::from_path("/nonexistent/etiqueta/options.json").unwrap_err();
        assert!(matches!(err, EtiquetaError::Io(_)));
    }

    #[test]
    fn test_unknown_pattern_rejected() {
        assert!(LabelOptions::from_json_str(r#"{"barcode_pattern": "qr"}"#).is_err());
    }

    #[test]
    fn test_invalid_font() {
        let options = LabelOptions {
            font: Some(9),
            ..Default::default()
        };
        let err = PrinterProfile::from_options(&options).unwrap_err();
        assert!(matches!(err, EtiquetaError::Config(_)));
    }

    #[test]
    fn test_invalid_size() {
        let options = LabelOptions {
            width: Some(0.0),
            ..Default::default()
        };
        assert!(PrinterProfile::from_options(&options).is_err());

        let options = LabelOptions {
            dpi: Some(0),
            ..Default::default()
        };
        assert!(PrinterProfile::from_options(&options).is_err());
    }

    #[test]
    fn test_unsupported_dpi_is_allowed() {
        // Metrics are checked when text is measured, not here.
        let options = LabelOptions {
            dpi: Some(300),
            ..Default::default()
        };
        let p = PrinterProfile::from_options(&options).unwrap();
        assert_eq!(p.default_barcode_height(), 150);
    }
}
