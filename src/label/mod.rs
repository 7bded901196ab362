//! # Label Builder
//!
//! [`Label`] turns drawing calls into EPL2 command lines. It owns a cursor,
//! barcode defaults and the [`CommandStack`]; every call reads and updates
//! that state in place.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────┐     ┌──────────────┐     ┌──────────┐
//! │ drawing call │ ──► │  layout  │ ──► │ CommandStack │ ──► │  export  │
//! │ (text, bar…) │     │ (x, y)   │     │  (Vec<str>)  │     │ (N … P)  │
//! └──────────────┘     └──────────┘     └──────────────┘     └──────────┘
//! ```
//!
//! Each command captures the physical position at the moment it is
//! appended; moving the cursor later does not touch earlier commands.
//!
//! ## Threading
//!
//! A `Label` is plain mutable state. Use one per label composition and do
//! not share it between threads.
//!
//! ## Example
//!
//! ```
//! use etiqueta::label::{BarcodeOptions, Label, TextOptions};
//!
//! let mut label = Label::new();
//! label
//!     .write_line("ACME WIDGETS", &TextOptions::new().center())?
//!     .write_barcode_line("W-1001", &BarcodeOptions::new().center())?
//!     .draw_line(10, 300, 802, 300, None);
//!
//! let job = label.export(1);
//! assert!(job.starts_with("\nN\nA"));
//! assert!(job.ends_with("P1\n"));
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```

mod options;
mod stack;
mod state;

pub use options::{BarcodeOptions, TextOptions};
pub use stack::CommandStack;
pub use state::{BarcodeConfig, BarcodeParams, Cursor};

use tracing::debug;

use crate::error::{EtiquetaError, Result};
use crate::layout::{self, Alignment, physical_xy};
use crate::printer::{LabelOptions, PrinterProfile};
use crate::protocol::commands::{self, BarcodeCommand, TextCommand};
use crate::protocol::metrics::MAX_FONT;
use crate::protocol::rotation::Rotation;
use crate::transport::Spooler;

/// One label under composition.
#[derive(Debug, Clone)]
pub struct Label {
    profile: PrinterProfile,
    cursor: Cursor,
    barcode: BarcodeConfig,
    stack: CommandStack,
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Label {
    /// Label on the default 4" × 4", 203 DPI profile.
    pub fn new() -> Self {
        Self::with_profile(PrinterProfile::DEFAULT)
    }

    /// Label on `profile`, cursor at the margins.
    pub fn with_profile(profile: PrinterProfile) -> Self {
        Self {
            profile,
            cursor: Cursor::origin(&profile),
            barcode: BarcodeConfig::for_profile(&profile),
            stack: CommandStack::new(),
        }
    }

    /// Label from construction options, including barcode defaults.
    pub fn from_options(options: &LabelOptions) -> Result<Self> {
        let profile = PrinterProfile::from_options(options)?;
        let mut label = Self::with_profile(profile);
        label.barcode = BarcodeConfig::from_options(options, &profile)?;
        Ok(label)
    }

    pub fn profile(&self) -> &PrinterProfile {
        &self.profile
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn barcode_config(&self) -> &BarcodeConfig {
        &self.barcode
    }

    pub fn commands(&self) -> &CommandStack {
        &self.stack
    }

    /// Change the font used by calls that do not name one.
    pub fn set_font(&mut self, font: u8) -> &mut Self {
        self.cursor.font = font;
        self
    }

    /// Change the rotation used by calls that do not give one.
    pub fn set_rotation(&mut self, rotation: impl Into<Rotation>) -> &mut Self {
        self.cursor.rotation = rotation.into();
        self
    }

    // ========================================================================
    // CURSOR MOVEMENT
    // ========================================================================

    /// Return the cursor to the margins.
    pub fn move_to_origin(&mut self) -> &mut Self {
        self.cursor.x = self.profile.margin_x;
        self.cursor.y = self.profile.margin_y;
        self
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.cursor.x = x;
        self.cursor.y = y;
        self
    }

    pub fn move_right(&mut self, dots: i32) -> &mut Self {
        self.cursor.x = self.cursor.x.saturating_add(dots);
        self
    }

    pub fn move_left(&mut self, dots: i32) -> &mut Self {
        self.cursor.x = self.cursor.x.saturating_sub(dots);
        self
    }

    pub fn move_down(&mut self, dots: i32) -> &mut Self {
        self.cursor.y = self.cursor.y.saturating_add(dots);
        self
    }

    pub fn move_up(&mut self, dots: i32) -> &mut Self {
        self.cursor.y = self.cursor.y.saturating_sub(dots);
        self
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    /// # Print Text
    ///
    /// Appends an `A` command at the cursor and advances the cursor's x by
    /// the text width.
    ///
    /// - `opts.rotation` becomes the cursor's rotation.
    /// - Left, center and right alignment reposition x first; no alignment
    ///   keeps x.
    /// - Font 5 has no lower case, so its text is upper-cased.
    /// - The advance is always along logical x, whatever the rotation.
    ///
    /// ## Errors
    ///
    /// [`MetricsLookup`](crate::EtiquetaError::MetricsLookup) when the
    /// font has no metrics at this DPI, and
    /// [`OutOfRange`](crate::EtiquetaError::OutOfRange) when the text width
    /// or the advanced cursor leaves the dot range. Nothing is changed in
    /// either case.
    pub fn print_text(&mut self, text: &str, opts: &TextOptions) -> Result<&mut Self> {
        self.emit_text(text, opts, Alignment::Leave)?;
        Ok(self)
    }

    /// Move to `(x, y)`, then [`print_text`](Label::print_text).
    pub fn print_text_at(&mut self, x: i32, y: i32, text: &str, opts: &TextOptions) -> Result<&mut Self> {
        let saved = self.cursor;
        self.move_to(x, y);
        if let Err(e) = self.emit_text(text, opts, Alignment::Leave) {
            self.cursor = saved;
            return Err(e);
        }
        Ok(self)
    }

    /// # Write Line
    ///
    /// [`print_text`](Label::print_text) with left alignment unless `opts`
    /// says otherwise, then a line feed: x returns to the margin and y moves
    /// down by the line height.
    pub fn write_line(&mut self, text: &str, opts: &TextOptions) -> Result<&mut Self> {
        let font = opts.font.unwrap_or(self.cursor.font);
        let line_height = layout::string_height(text, opts.height_factor, font, self.profile.dpi)?;
        let next_y = offset(self.cursor.y, line_height, "cursor y")?;
        self.emit_text(text, opts, Alignment::Left)?;
        self.cursor.x = self.profile.margin_x;
        self.cursor.y = next_y;
        Ok(self)
    }

    fn emit_text(&mut self, text: &str, opts: &TextOptions, default_align: Alignment) -> Result<()> {
        let font = opts.font.unwrap_or(self.cursor.font);
        let rotation = opts.rotation.unwrap_or(self.cursor.rotation);
        let align = opts.align.unwrap_or(default_align);
        let dpi = self.profile.dpi;

        let data = if font == MAX_FONT {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        let advance = layout::string_width(&data, opts.width_factor, font, dpi)?;
        let content_width = if layout::needs_width(align) { advance } else { 0 };
        let x = layout::resolve_alignment(
            align,
            content_width,
            self.profile.width_dots(),
            self.profile.margin_x,
            self.cursor.x,
        );
        let next_x = offset(x, advance, "cursor x")?;

        self.cursor.rotation = rotation;
        self.cursor.x = x;
        let (px, py) = physical_xy(&self.profile, x, self.cursor.y, rotation);
        let command = TextCommand {
            x: px,
            y: py,
            rotation,
            font,
            width_factor: opts.width_factor,
            height_factor: opts.height_factor,
            reverse: opts.reverse,
            data: &data,
        };
        self.stack.push(command.to_string());
        self.cursor.x = next_x;
        Ok(())
    }

    // ========================================================================
    // BARCODES
    // ========================================================================

    /// # Draw Barcode
    ///
    /// Appends a `B` command at the cursor. The cursor does not move, and
    /// barcode defaults are not updated. Missing options come from the
    /// label's [`BarcodeConfig`]; `opts.align` is ignored.
    pub fn draw_barcode(&mut self, data: &str, opts: &BarcodeOptions) -> &mut Self {
        let params = self.barcode.resolve(opts);
        let rotation = opts.rotation.unwrap_or(self.cursor.rotation);
        self.emit_barcode(data, rotation, &params);
        self
    }

    /// Move to `(x, y)`, then [`draw_barcode`](Label::draw_barcode).
    pub fn draw_barcode_at(&mut self, x: i32, y: i32, data: &str, opts: &BarcodeOptions) -> &mut Self {
        self.move_to(x, y);
        self.draw_barcode(data, opts)
    }

    /// # Print Barcode
    ///
    /// Like [`draw_barcode`](Label::draw_barcode), but first:
    ///
    /// 1. An unset human-readable default adopts the flag in `opts`
    ///    ([`BarcodeConfig::adopt`]).
    /// 2. Center or right alignment moves x using the barcode width.
    ///
    /// ## Errors
    ///
    /// [`UnsupportedBarcodeGeometry`](crate::EtiquetaError::UnsupportedBarcodeGeometry)
    /// when center or right alignment is asked of a symbology other than
    /// Code 39. Nothing is changed in that case.
    pub fn print_barcode(&mut self, data: &str, opts: &BarcodeOptions) -> Result<&mut Self> {
        self.place_barcode(data, opts, Alignment::Leave, false)?;
        Ok(self)
    }

    /// # Write Barcode Line
    ///
    /// [`print_barcode`](Label::print_barcode) with left alignment unless
    /// `opts` says otherwise, then x returns to the margin and y moves down
    /// by the barcode height. A height that would push y out of the dot
    /// range is an [`OutOfRange`](crate::EtiquetaError::OutOfRange) error
    /// and nothing is appended.
    pub fn write_barcode_line(&mut self, data: &str, opts: &BarcodeOptions) -> Result<&mut Self> {
        self.place_barcode(data, opts, Alignment::Left, true)?;
        Ok(self)
    }

    fn place_barcode(
        &mut self,
        data: &str,
        opts: &BarcodeOptions,
        default_align: Alignment,
        line_feed: bool,
    ) -> Result<()> {
        let rotation = opts.rotation.unwrap_or(self.cursor.rotation);
        let mut config = self.barcode;
        config.adopt(opts);
        let params = config.resolve(opts);

        let align = opts.align.unwrap_or(default_align);
        let content_width = if layout::needs_width(align) {
            layout::barcode_width(data, params.symbology, params.narrow, params.wide)?
        } else {
            0
        };
        let x = layout::resolve_alignment(
            align,
            content_width,
            self.profile.width_dots(),
            self.profile.margin_x,
            self.cursor.x,
        );
        let next_y = if line_feed {
            let height = i32::try_from(params.height)
                .map_err(|_| EtiquetaError::OutOfRange { what: "barcode height" })?;
            Some(offset(self.cursor.y, height, "cursor y")?)
        } else {
            None
        };

        if config != self.barcode {
            debug!(?config, "barcode defaults adopted");
        }
        self.barcode = config;
        self.cursor.x = x;
        self.emit_barcode(data, rotation, &params);
        if let Some(y) = next_y {
            self.cursor.x = self.profile.margin_x;
            self.cursor.y = y;
        }
        Ok(())
    }

    fn emit_barcode(&mut self, data: &str, rotation: Rotation, params: &BarcodeParams) {
        self.cursor.rotation = rotation;
        let (px, py) = physical_xy(&self.profile, self.cursor.x, self.cursor.y, rotation);
        let command = BarcodeCommand {
            x: px,
            y: py,
            rotation,
            symbology: params.symbology,
            narrow: params.narrow,
            wide: params.wide,
            height: params.height,
            human_readable: params.human_readable,
            data,
        };
        self.stack.push(command.to_string());
    }

    // ========================================================================
    // LINES, RAW COMMANDS, STACK CONTROL
    // ========================================================================

    /// Append an `LS` line from (x1, y1) to (x2, y2).
    ///
    /// Coordinates are physical and used as given. `width` defaults to the
    /// profile's line width.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: Option<u32>) -> &mut Self {
        let width = width.unwrap_or(self.profile.line_width);
        self.stack.push(commands::line(x1, y1, width, x2, y2));
        self
    }

    /// Append a command line verbatim, without any checks.
    pub fn inject_raw(&mut self, command: impl Into<String>) -> &mut Self {
        self.stack.push(command);
        self
    }

    /// Drop every command. The cursor stays where it is.
    pub fn clear(&mut self) -> &mut Self {
        self.stack.clear();
        self
    }

    // ========================================================================
    // EXPORT
    // ========================================================================

    /// # Export
    ///
    /// The complete print job for `quantity` copies; see
    /// [`commands::job`].
    pub fn export(&self, quantity: u32) -> String {
        commands::job(self.stack.iter(), quantity)
    }

    /// Export and hand the job to a spooler queue named `destination`.
    pub fn print_to(&self, spooler: &dyn Spooler, destination: &str, quantity: u32) -> Result<()> {
        spooler.submit(destination, self.export(quantity).as_bytes())
    }
}

/// `base + by`, or [`EtiquetaError::OutOfRange`] naming `what`.
fn offset(base: i32, by: i32, what: &'static str) -> Result<i32> {
    base.checked_add(by).ok_or(EtiquetaError::OutOfRange { what })
}

// ============================================================================
// TESTS
// ============================================================================
