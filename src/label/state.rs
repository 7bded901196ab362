//! # Builder State
//!
//! Cursor position and barcode defaults carried between drawing calls.

use super::options::BarcodeOptions;
use crate::error::{EtiquetaError, Result};
use crate::printer::{LabelOptions, PrinterProfile};
use crate::protocol::barcode::Symbology;
use crate::protocol::rotation::Rotation;

/// Where the next item goes, in logical dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    /// Font for calls that do not name one
    pub font: u8,
}

impl Cursor {
    /// Cursor at the profile's margins.
    pub fn origin(profile: &PrinterProfile) -> Self {
        Self {
            x: profile.margin_x,
            y: profile.margin_y,
            rotation: profile.rotation,
            font: profile.font,
        }
    }
}

/// # Barcode Defaults
///
/// Symbology, bar widths and height are seeded when the label is built,
/// from the label options or else from the profile. They stay fixed for
/// the life of the label.
///
/// The human-readable flag starts unset unless the options give it. While
/// unset it adopts the first value a
/// [`print_barcode`](super::Label::print_barcode) call supplies, and never
/// changes again after that. `Some(false)` counts as set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeConfig {
    pub symbology: Symbology,
    pub narrow: u32,
    pub wide: u32,
    pub height: u32,
    pub human_readable: Option<bool>,
}

/// Fully resolved barcode parameters for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeParams {
    pub symbology: Symbology,
    pub narrow: u32,
    pub wide: u32,
    pub height: u32,
    pub human_readable: bool,
}

impl BarcodeConfig {
    /// Defaults derived from `profile`.
    ///
    /// | Field | Value |
    /// |-------|-------|
    /// | symbology | Code 39 |
    /// | narrow | 3 |
    /// | wide | 3 × narrow |
    /// | height | round(dpi / 2) |
    /// | human_readable | unset |
    pub fn for_profile(profile: &PrinterProfile) -> Self {
        let narrow = profile.default_barcode_narrow();
        Self {
            symbology: Symbology::default(),
            narrow,
            wide: narrow * 3,
            height: profile.default_barcode_height(),
            human_readable: None,
        }
    }

    /// Defaults from label options, falling back to [`for_profile`](Self::for_profile).
    ///
    /// ## Errors
    ///
    /// [`EtiquetaError::Config`] when a narrow bar width has no representable
    /// wide counterpart.
    pub fn from_options(options: &LabelOptions, profile: &PrinterProfile) -> Result<Self> {
        let base = Self::for_profile(profile);
        let narrow = options.barcode_narrow_width.unwrap_or(base.narrow);
        let wide = match options.barcode_wide_width {
            Some(wide) => wide,
            None => narrow.checked_mul(3).ok_or_else(|| {
                EtiquetaError::Config(format!("barcode_narrow_width {} is too large", narrow))
            })?,
        };
        Ok(Self {
            symbology: options.barcode_pattern.unwrap_or(base.symbology),
            narrow,
            wide,
            height: options.barcode_height.unwrap_or(base.height),
            human_readable: options.barcode_textify,
        })
    }

    /// Take the human-readable flag from `opts` if it is still unset.
    pub fn adopt(&mut self, opts: &BarcodeOptions) {
        self.human_readable = self.human_readable.or(opts.human_readable);
    }

    /// Parameters for one barcode: per-call value, else this config.
    /// An unset human-readable flag means no text line.
    pub fn resolve(&self, opts: &BarcodeOptions) -> BarcodeParams {
        BarcodeParams {
            symbology: opts.symbology.unwrap_or(self.symbology),
            narrow: opts.narrow.unwrap_or(self.narrow),
            wide: opts.wide.unwrap_or(self.wide),
            height: opts.height.unwrap_or(self.height),
            human_readable: opts.human_readable.or(self.human_readable).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> BarcodeConfig {
        BarcodeConfig::for_profile(&PrinterProfile::DEFAULT)
    }

    #[test]
    fn test_cursor_origin() {
        let c = Cursor::origin(&PrinterProfile::DEFAULT);
        assert_eq!((c.x, c.y), (10, 10));
        assert_eq!(c.rotation, Rotation::Portrait);
        assert_eq!(c.font, 4);
    }

    #[test]
    fn test_profile_defaults() {
        let p = defaults().resolve(&BarcodeOptions::new());
        assert_eq!(
            p,
            BarcodeParams {
                symbology: Symbology::Code39,
                narrow: 3,
                wide: 9,
                height: 102,
                human_readable: false,
            }
        );
    }

    #[test]
    fn test_height_follows_dpi() {
        let profile = PrinterProfile {
            dpi: 300,
            ..PrinterProfile::DEFAULT
        };
        assert_eq!(BarcodeConfig::for_profile(&profile).height, 150);
    }

    #[test]
    fn test_wide_follows_option_narrow() {
        let options = LabelOptions {
            barcode_narrow_width: Some(2),
            ..Default::default()
        };
        let cfg = BarcodeConfig::from_options(&options, &PrinterProfile::DEFAULT).unwrap();
        assert_eq!((cfg.narrow, cfg.wide), (2, 6));
    }

    #[test]
    fn test_call_narrow_keeps_config_wide() {
        let p = defaults().resolve(&BarcodeOptions::new().bars(2, 5).height(40));
        assert_eq!((p.narrow, p.wide, p.height), (2, 5, 40));

        let mut opts = BarcodeOptions::new();
        opts.narrow = Some(1);
        let p = defaults().resolve(&opts);
        assert_eq!((p.narrow, p.wide), (1, 9));
    }

    #[test]
    fn test_call_overrides_config() {
        let cfg = BarcodeConfig {
            narrow: 2,
            height: 40,
            ..defaults()
        };
        let opts = BarcodeOptions::new().height(90).symbology(Symbology::Ean13);
        let p = cfg.resolve(&opts);
        assert_eq!(p.height, 90);
        assert_eq!(p.narrow, 2);
        assert_eq!(p.symbology, Symbology::Ean13);
    }

    #[test]
    fn test_adopt_leaves_seeded_fields() {
        let mut cfg = defaults();
        cfg.adopt(&BarcodeOptions::new().bars(2, 5).height(60));
        assert_eq!(cfg, defaults());
    }

    #[test]
    fn test_adopt_explicit_false_is_set() {
        let mut cfg = defaults();
        cfg.adopt(&BarcodeOptions::new().human_readable(false));
        cfg.adopt(&BarcodeOptions::new().human_readable(true));
        assert_eq!(cfg.human_readable, Some(false));
    }

    #[test]
    fn test_from_options() {
        let options = LabelOptions {
            barcode_pattern: Some(Symbology::Code93),
            barcode_textify: Some(true),
            barcode_height: Some(80),
            ..Default::default()
        };
        let cfg = BarcodeConfig::from_options(&options, &PrinterProfile::DEFAULT).unwrap();
        assert_eq!(cfg.symbology, Symbology::Code93);
        assert_eq!(cfg.human_readable, Some(true));
        assert_eq!((cfg.narrow, cfg.wide, cfg.height), (3, 9, 80));
    }

    #[test]
    fn test_from_options_huge_narrow() {
        let options = LabelOptions {
            barcode_narrow_width: Some(2_000_000_000),
            ..Default::default()
        };
        let err = BarcodeConfig::from_options(&options, &PrinterProfile::DEFAULT).unwrap_err();
        assert!(matches!(err, EtiquetaError::Config(_)));
    }
}
