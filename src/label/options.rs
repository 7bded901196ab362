//! # Per-Call Options
//!
//! Optional arguments for text and barcode calls. Anything left `None` falls
//! back to the label's current state.
//!
//! ```
//! use etiqueta::label::{BarcodeOptions, TextOptions};
//! use etiqueta::protocol::barcode::Symbology;
//!
//! let title = TextOptions::new().center().font(5).scale(2, 2);
//! let sku = BarcodeOptions::new()
//!     .symbology(Symbology::Code39)
//!     .height(80)
//!     .human_readable(true);
//! ```

use crate::layout::Alignment;
use crate::protocol::barcode::Symbology;
use crate::protocol::rotation::Rotation;

/// Options for a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// `None` keeps the cursor for print calls and means left for line calls
    pub align: Option<Alignment>,
    /// White on black
    pub reverse: bool,
    pub width_factor: u32,
    pub height_factor: u32,
    pub font: Option<u8>,
    pub rotation: Option<Rotation>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            align: None,
            reverse: false,
            width_factor: 1,
            height_factor: 1,
            font: None,
            rotation: None,
        }
    }
}

impl TextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn left(self) -> Self {
        self.align(Alignment::Left)
    }

    pub fn center(self) -> Self {
        self.align(Alignment::Center)
    }

    pub fn right(self) -> Self {
        self.align(Alignment::Right)
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Horizontal and vertical multipliers
    pub fn scale(mut self, width_factor: u32, height_factor: u32) -> Self {
        self.width_factor = width_factor;
        self.height_factor = height_factor;
        self
    }

    pub fn font(mut self, font: u8) -> Self {
        self.font = Some(font);
        self
    }

    pub fn rotation(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }
}

/// Options for a barcode.
///
/// Unset fields come from the label's barcode defaults. The human-readable
/// flag also seeds those defaults the first time it is given (see
/// [`BarcodeConfig::adopt`](super::BarcodeConfig::adopt)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeOptions {
    /// `None` keeps the cursor for print calls and means left for line calls
    pub align: Option<Alignment>,
    pub rotation: Option<Rotation>,
    pub symbology: Option<Symbology>,
    pub narrow: Option<u32>,
    pub wide: Option<u32>,
    pub height: Option<u32>,
    pub human_readable: Option<bool>,
}

impl BarcodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn center(self) -> Self {
        self.align(Alignment::Center)
    }

    pub fn right(self) -> Self {
        self.align(Alignment::Right)
    }

    pub fn rotation(mut self, rotation: impl Into<Rotation>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }

    pub fn symbology(mut self, symbology: Symbology) -> Self {
        self.symbology = Some(symbology);
        self
    }

    /// Narrow and wide bar widths in dots
    pub fn bars(mut self, narrow: u32, wide: u32) -> Self {
        self.narrow = Some(narrow);
        self.wide = Some(wide);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn human_readable(mut self, enabled: bool) -> Self {
        self.human_readable = Some(enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let opts = TextOptions::default();
        assert_eq!(opts.align, None);
        assert_eq!((opts.width_factor, opts.height_factor), (1, 1));
        assert!(!opts.reverse);
    }

    #[test]
    fn test_text_builder() {
        let opts = TextOptions::new().right().reverse().font(2).rotation(90);
        assert_eq!(opts.align, Some(Alignment::Right));
        assert!(opts.reverse);
        assert_eq!(opts.font, Some(2));
        assert_eq!(opts.rotation, Some(Rotation::Landscape));
    }

    #[test]
    fn test_barcode_builder() {
        let opts = BarcodeOptions::new().bars(2, 5).human_readable(false);
        assert_eq!(opts.narrow, Some(2));
        assert_eq!(opts.wide, Some(5));
        assert_eq!(opts.human_readable, Some(false));
        assert_eq!(opts.height, None);
    }
}
