//! # EPL2 Commands
//!
//! This module renders individual EPL2 commands as ASCII lines. EPL2 is a
//! line-oriented page description language: each command is one line,
//! fields are comma separated, and string data is double quoted.
//!
//! ## Commands Used
//!
//! | Command | Purpose | Form |
//! |---------|---------|------|
//! | `N` | Clear image buffer | `N` |
//! | `A` | ASCII text | `Ax,y,rot,font,hmul,vmul,N/R,"data"` |
//! | `B` | 1D barcode | `Bx,y,rot,pattern,narrow,wide,height,B/N,"data"` |
//! | `LS` | Line draw diagonal | `LSx1,y1,thickness,x2,y2` |
//! | `P` | Print | `Pquantity` |
//!
//! ## Quoted Data
//!
//! Inside quotes the firmware treats `\"` as a literal quote and `\\` as a
//! literal backslash. [`escape`] produces that form.
//!
//! ## Reference
//!
//! Based on the Zebra "EPL2 Programming Guide".

use std::fmt;

use super::barcode::Symbology;
use super::rotation::Rotation;

/// Clear image buffer. Starts every label.
pub const CLEAR_IMAGE: &str = "N";

// ============================================================================
// STRING DATA
// ============================================================================

/// # Escape Quoted Data
///
/// Trims surrounding whitespace, then escapes every `"` as `\"` and every
/// `\` as `\\`. Each character of the trimmed input is considered once, so
/// backslashes introduced for quotes are never escaped again.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::commands::escape;
///
/// assert_eq!(escape(r#"  He said "hi"\now "#), r#"He said \"hi\"\\now"#);
/// ```
pub fn escape(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

// ============================================================================
// TEXT (A)
// ============================================================================

/// # ASCII Text (A)
///
/// ## Fields
///
/// | Field | Meaning |
/// |-------|---------|
/// | p1, p2 | Physical x, y in dots |
/// | p3 | Rotation, 0..3 |
/// | p4 | Font, 1..5 |
/// | p5, p6 | Horizontal and vertical multipliers |
/// | p7 | `R` reverse image, `N` normal |
/// | data | Escaped, quoted text |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::commands::TextCommand;
/// use etiqueta::protocol::rotation::Rotation;
///
/// let cmd = TextCommand {
///     x: 10,
///     y: 20,
///     rotation: Rotation::Portrait,
///     font: 4,
///     width_factor: 1,
///     height_factor: 2,
///     reverse: false,
///     data: "Hi",
/// };
/// assert_eq!(cmd.to_string(), "A10,20,0,4,1,2,N,\"Hi\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCommand<'a> {
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub font: u8,
    pub width_factor: u32,
    pub height_factor: u32,
    pub reverse: bool,
    pub data: &'a str,
}

impl fmt::Display for TextCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A{},{},{},{},{},{},{},\"{}\"",
            self.x,
            self.y,
            self.rotation,
            self.font,
            self.width_factor,
            self.height_factor,
            if self.reverse { 'R' } else { 'N' },
            escape(self.data)
        )
    }
}

// ============================================================================
// BARCODE (B)
// ============================================================================

/// # 1D Barcode (B)
///
/// ## Fields
///
/// | Field | Meaning |
/// |-------|---------|
/// | p1, p2 | Physical x, y in dots |
/// | p3 | Rotation, 0..3 |
/// | p4 | Pattern code, see [`Symbology`] |
/// | p5 | Narrow bar width in dots |
/// | p6 | Wide bar width in dots |
/// | p7 | Bar height in dots |
/// | p8 | `B` prints human readable text, `N` does not |
/// | data | Escaped, quoted data |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::barcode::Symbology;
/// use etiqueta::protocol::commands::BarcodeCommand;
/// use etiqueta::protocol::rotation::Rotation;
///
/// let cmd = BarcodeCommand {
///     x: 10,
///     y: 10,
///     rotation: Rotation::Portrait,
///     symbology: Symbology::Code128Auto,
///     narrow: 2,
///     wide: 6,
///     height: 100,
///     human_readable: true,
///     data: "ABC",
/// };
/// assert_eq!(cmd.to_string(), "B10,10,0,1,2,6,100,B,\"ABC\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeCommand<'a> {
    pub x: i32,
    pub y: i32,
    pub rotation: Rotation,
    pub symbology: Symbology,
    pub narrow: u32,
    pub wide: u32,
    pub height: u32,
    pub human_readable: bool,
    pub data: &'a str,
}

impl fmt::Display for BarcodeCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{},{},{},{},{},{},{},{},\"{}\"",
            self.x,
            self.y,
            self.rotation,
            self.symbology.code(),
            self.narrow,
            self.wide,
            self.height,
            if self.human_readable { 'B' } else { 'N' },
            escape(self.data)
        )
    }
}

// ============================================================================
// LINES (LS)
// ============================================================================

/// # Line Draw Diagonal (LS)
///
/// Draws a line of `width` dots thickness from (x1, y1) to (x2, y2).
/// Coordinates are physical; no rotation is applied.
///
/// ```
/// use etiqueta::protocol::commands::line;
///
/// assert_eq!(line(0, 0, 3, 100, 50), "LS0,0,3,100,50");
/// ```
pub fn line(x1: i32, y1: i32, width: u32, x2: i32, y2: i32) -> String {
    format!("LS{},{},{},{},{}", x1, y1, width, x2, y2)
}

// ============================================================================
// JOB FRAMING
// ============================================================================

/// # Print (P)
///
/// Prints `quantity` copies of the image buffer.
#[inline]
pub fn print(quantity: u32) -> String {
    format!("P{}", quantity)
}

/// # Complete Print Job
///
/// Frames label commands as the firmware expects:
///
/// ```text
/// <blank line>
/// N
/// ...commands...
/// P<quantity>
/// ```
///
/// Every line, including the last, ends with `\n`. An empty stack
/// contributes no lines at all, so `N` is followed directly by the trailer
/// (`"\nN\nP1\n"`); there is no empty line standing in for the commands.
///
/// ```
/// use etiqueta::protocol::commands::job;
///
/// let out = job(["A10,10,0,4,1,1,N,\"X\""], 2);
/// assert_eq!(out, "\nN\nA10,10,0,4,1,1,N,\"X\"\nP2\n");
/// ```
pub fn job<I, S>(commands: I, quantity: u32) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("\n");
    out.push_str(CLEAR_IMAGE);
    out.push('\n');
    for cmd in commands {
        out.push_str(cmd.as_ref());
        out.push('\n');
    }
    out.push_str(&print(quantity));
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================
