//! # Resident Font Metrics
//!
//! Character cell sizes of the five resident EPL2 fonts, in printer dots.
//!
//! ## 203 DPI Table
//!
//! | Font | Cell (w×h) | Gap (w×h) |
//! |------|------------|-----------|
//! | 1 | 8×12 | 1×1 |
//! | 2 | 10×16 | 1×1 |
//! | 3 | 12×20 | 1×1 |
//! | 4 | 14×24 | 1×1 |
//! | 5 | 32×48 | 2×1 |
//!
//! Font 5 only contains upper-case glyphs; see [`MAX_FONT`].
//!
//! Other resolutions have no table. Looking them up is an error rather than
//! a silent fallback, since every position on the label derives from these
//! numbers.

use crate::error::{EtiquetaError, Result};

/// Largest resident font index. The firmware only ships capitals for it.
pub const MAX_FONT: u8 = 5;

/// Size of one character cell and its inter-character gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub char_width: u32,
    pub char_height: u32,
    pub space_width: u32,
    pub space_height: u32,
}

impl CellMetrics {
    const fn new(char_width: u32, char_height: u32, space_width: u32, space_height: u32) -> Self {
        Self {
            char_width,
            char_height,
            space_width,
            space_height,
        }
    }
}

/// Fonts 1..=5 at 203 DPI, indexed by `font - 1`.
const METRICS_203: [CellMetrics; 5] = [
    CellMetrics::new(8, 12, 1, 1),
    CellMetrics::new(10, 16, 1, 1),
    CellMetrics::new(12, 20, 1, 1),
    CellMetrics::new(14, 24, 1, 1),
    CellMetrics::new(32, 48, 2, 1),
];

fn table(dpi: u32) -> Option<&'static [CellMetrics]> {
    match dpi {
        203 => Some(&METRICS_203),
        _ => None,
    }
}

/// Look up the cell metrics for a font at a resolution.
///
/// ## Errors
///
/// [`EtiquetaError::MetricsLookup`] when either the resolution has no table
/// or the font index is outside it.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::metrics::cell_metrics;
///
/// let m = cell_metrics(203, 4).unwrap();
/// assert_eq!((m.char_width, m.char_height), (14, 24));
/// assert!(cell_metrics(300, 4).is_err());
/// ```
pub fn cell_metrics(dpi: u32, font: u8) -> Result<CellMetrics> {
    let index = usize::from(font).checked_sub(1);
    table(dpi)
        .zip(index)
        .and_then(|(fonts, i)| fonts.get(i).copied())
        .ok_or(EtiquetaError::MetricsLookup { dpi, font })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_4_at_203() {
        let m = cell_metrics(203, 4).unwrap();
        assert_eq!(m, CellMetrics::new(14, 24, 1, 1));
    }

    #[test]
    fn test_font_5_has_wider_gap() {
        let m = cell_metrics(203, MAX_FONT).unwrap();
        assert_eq!(m.char_width, 32);
        assert_eq!(m.space_width, 2);
    }

    #[test]
    fn test_all_resident_fonts_present() {
        for font in 1..=MAX_FONT {
            assert!(cell_metrics(203, font).is_ok(), "font {}", font);
        }
    }

    #[test]
    fn test_unknown_dpi_fails() {
        let err = cell_metrics(300, 1).unwrap_err();
        assert!(matches!(err, EtiquetaError::MetricsLookup { dpi: 300, font: 1 }));
    }

    #[test]
    fn test_out_of_range_font_fails() {
        assert!(cell_metrics(203, 0).is_err());
        assert!(cell_metrics(203, 6).is_err());
    }
}
