//! # Coordinate Transform
//!
//! The cursor moves in logical label space: x grows along the reading
//! direction, y grows down the lines. EPL2 wants physical dots measured from
//! the top-left of the print head's image. Rotating content therefore moves
//! the anchor as well as turning the glyphs.
//!
//! | Rotation | Physical x | Physical y |
//! |----------|------------|------------|
//! | 0 | x | y |
//! | 1 (90°) | height − y | x |
//! | 2 (180°) | width − x | height − y |
//! | 3 (270°) | y | width − x |
//!
//! `width` and `height` are the page extents in dots. Results are truncated
//! toward zero.

use crate::printer::PrinterProfile;
use crate::protocol::rotation::Rotation;

/// Map a logical cursor position to physical dots for `rotation`.
///
/// ```
/// use etiqueta::layout::physical_xy;
/// use etiqueta::printer::PrinterProfile;
/// use etiqueta::protocol::rotation::Rotation;
///
/// let page = PrinterProfile::DEFAULT; // 812 × 812 dots
/// assert_eq!(physical_xy(&page, 10, 20, Rotation::Portrait), (10, 20));
/// assert_eq!(physical_xy(&page, 10, 20, Rotation::Landscape), (792, 10));
/// ```
pub fn physical_xy(page: &PrinterProfile, x: i32, y: i32, rotation: Rotation) -> (i32, i32) {
    let width = page.width_dots();
    let height = page.height_dots();
    match rotation {
        Rotation::Portrait => (x, y),
        Rotation::Landscape => ((height - f64::from(y)) as i32, x),
        Rotation::Inverted => (
            (width - f64::from(x)) as i32,
            (height - f64::from(y)) as i32,
        ),
        Rotation::InvertedLandscape => (y, (width - f64::from(x)) as i32),
    }
}
