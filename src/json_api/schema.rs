//! JSON schema types for label jobs.

use serde::Deserialize;

use crate::layout::Alignment;
use crate::printer::LabelOptions;
use crate::protocol::barcode::Symbology;
use crate::protocol::rotation::Rotation;

fn default_quantity() -> u32 {
    1
}

/// Top-level JSON job.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonJob {
    /// Construction options for the label.
    #[serde(default)]
    pub options: LabelOptions,
    /// Copies to print (default: 1).
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Drawing calls, replayed in order.
    #[serde(default)]
    pub ops: Vec<JsonOp>,
}

/// A single drawing call.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JsonOp {
    MoveToOrigin,
    MoveTo { x: i32, y: i32 },
    MoveRight { dots: i32 },
    MoveLeft { dots: i32 },
    MoveUp { dots: i32 },
    MoveDown { dots: i32 },
    SetFont { font: u8 },
    SetRotation { rotation: Rotation },
    PrintText(JsonText),
    WriteLine(JsonText),
    DrawBarcode(JsonBarcode),
    PrintBarcode(JsonBarcode),
    WriteBarcodeLine(JsonBarcode),
    Line(JsonLine),
    Raw { command: String },
    Clear,
}

/// Text run. `x` and `y` together move the cursor first.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonText {
    pub text: String,
    /// "left", "center", "right" or "leave".
    #[serde(default)]
    pub align: Option<Alignment>,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub width_factor: Option<u32>,
    #[serde(default)]
    pub height_factor: Option<u32>,
    #[serde(default)]
    pub font: Option<u8>,
    /// `1`, `90`, `"landscape"`, ...
    #[serde(default)]
    pub rotation: Option<Rotation>,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

/// Barcode. `x` and `y` together move the cursor first.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonBarcode {
    pub data: String,
    #[serde(default)]
    pub align: Option<Alignment>,
    #[serde(default)]
    pub rotation: Option<Rotation>,
    /// Symbology name ("code128_auto") or wire code ("1").
    #[serde(default)]
    pub pattern: Option<Symbology>,
    #[serde(default)]
    pub narrow: Option<u32>,
    #[serde(default)]
    pub wide: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub human_readable: Option<bool>,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

/// Straight line in physical coordinates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    #[serde(default)]
    pub width: Option<u32>,
}
