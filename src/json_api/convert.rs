//! Replay of JSON ops on a [`Label`].

use thiserror::Error;

use crate::error::EtiquetaError;
use crate::label::{BarcodeOptions, Label, TextOptions};

use super::schema::*;

/// Errors from JSON → Label conversion.
#[derive(Debug, Error)]
pub enum JsonApiError {
    /// A field value is invalid.
    #[error("op {index} ({op}): invalid {field}: {message}")]
    InvalidField {
        index: usize,
        op: &'static str,
        field: &'static str,
        message: String,
    },
    /// A field needs a partner that is missing.
    #[error("op {index} ({op}): missing required field '{field}'")]
    MissingField {
        index: usize,
        op: &'static str,
        field: &'static str,
    },
    /// The label rejected the call.
    #[error("op {index} ({op}): {source}")]
    Label {
        index: usize,
        op: &'static str,
        #[source]
        source: EtiquetaError,
    },
    /// The options block is invalid.
    #[error("options: {0}")]
    Options(#[source] EtiquetaError),
}

impl From<JsonApiError> for EtiquetaError {
    fn from(err: JsonApiError) -> Self {
        match err {
            JsonApiError::Label { source, .. } | JsonApiError::Options(source) => source,
            other => EtiquetaError::Config(other.to_string()),
        }
    }
}

impl JsonJob {
    /// Parse a job document.
    pub fn from_json_str(json: &str) -> Result<Self, EtiquetaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the label described by this job.
    pub fn to_label(&self) -> Result<Label, JsonApiError> {
        let mut label = Label::from_options(&self.options).map_err(JsonApiError::Options)?;
        for (index, op) in self.ops.iter().enumerate() {
            op.apply(index, &mut label)?;
        }
        Ok(label)
    }

    /// Build the label and export it for `self.quantity` copies.
    pub fn render(&self) -> Result<String, JsonApiError> {
        Ok(self.to_label()?.export(self.quantity))
    }
}

impl JsonOp {
    fn name(&self) -> &'static str {
        match self {
            JsonOp::MoveToOrigin => "move_to_origin",
            JsonOp::MoveTo { .. } => "move_to",
            JsonOp::MoveRight { .. } => "move_right",
            JsonOp::MoveLeft { .. } => "move_left",
            JsonOp::MoveUp { .. } => "move_up",
            JsonOp::MoveDown { .. } => "move_down",
            JsonOp::SetFont { .. } => "set_font",
            JsonOp::SetRotation { .. } => "set_rotation",
            JsonOp::PrintText(_) => "print_text",
            JsonOp::WriteLine(_) => "write_line",
            JsonOp::DrawBarcode(_) => "draw_barcode",
            JsonOp::PrintBarcode(_) => "print_barcode",
            JsonOp::WriteBarcodeLine(_) => "write_barcode_line",
            JsonOp::Line(_) => "line",
            JsonOp::Raw { .. } => "raw",
            JsonOp::Clear => "clear",
        }
    }

    fn apply(&self, index: usize, label: &mut Label) -> Result<(), JsonApiError> {
        let op = self.name();
        let wrap = |source: EtiquetaError| JsonApiError::Label { index, op, source };

        match self {
            JsonOp::MoveToOrigin => {
                label.move_to_origin();
            }
            JsonOp::MoveTo { x, y } => {
                label.move_to(*x, *y);
            }
            JsonOp::MoveRight { dots } => {
                label.move_right(*dots);
            }
            JsonOp::MoveLeft { dots } => {
                label.move_left(*dots);
            }
            JsonOp::MoveUp { dots } => {
                label.move_up(*dots);
            }
            JsonOp::MoveDown { dots } => {
                label.move_down(*dots);
            }
            JsonOp::SetFont { font } => {
                label.set_font(*font);
            }
            JsonOp::SetRotation { rotation } => {
                label.set_rotation(*rotation);
            }
            JsonOp::PrintText(t) => {
                let opts = t.to_options(index, op)?;
                let printed = match position(index, op, t.x, t.y)? {
                    Some((x, y)) => label.print_text_at(x, y, &t.text, &opts),
                    None => label.print_text(&t.text, &opts),
                };
                printed.map_err(wrap)?;
            }
            JsonOp::WriteLine(t) => {
                let opts = t.to_options(index, op)?;
                if let Some((x, y)) = position(index, op, t.x, t.y)? {
                    label.move_to(x, y);
                }
                label.write_line(&t.text, &opts).map_err(wrap)?;
            }
            JsonOp::DrawBarcode(b) => {
                let opts = b.to_options();
                match position(index, op, b.x, b.y)? {
                    Some((x, y)) => label.draw_barcode_at(x, y, &b.data, &opts),
                    None => label.draw_barcode(&b.data, &opts),
                };
            }
            JsonOp::PrintBarcode(b) => {
                if let Some((x, y)) = position(index, op, b.x, b.y)? {
                    label.move_to(x, y);
                }
                label.print_barcode(&b.data, &b.to_options()).map_err(wrap)?;
            }
            JsonOp::WriteBarcodeLine(b) => {
                if let Some((x, y)) = position(index, op, b.x, b.y)? {
                    label.move_to(x, y);
                }
                label
                    .write_barcode_line(&b.data, &b.to_options())
                    .map_err(wrap)?;
            }
            JsonOp::Line(l) => {
                label.draw_line(l.x1, l.y1, l.x2, l.y2, l.width);
            }
            JsonOp::Raw { command } => {
                label.inject_raw(command.as_str());
            }
            JsonOp::Clear => {
                label.clear();
            }
        }
        Ok(())
    }
}

/// `x` and `y` must come together.
fn position(
    index: usize,
    op: &'static str,
    x: Option<i32>,
    y: Option<i32>,
) -> Result<Option<(i32, i32)>, JsonApiError> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some((x, y))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(JsonApiError::MissingField { index, op, field: "y" }),
        (None, Some(_)) => Err(JsonApiError::MissingField { index, op, field: "x" }),
    }
}

// ============ Option Conversions ============

impl JsonText {
    fn to_options(&self, index: usize, op: &'static str) -> Result<TextOptions, JsonApiError> {
        let factor = |field: &'static str, value: Option<u32>| match value {
            Some(0) => Err(JsonApiError::InvalidField {
                index,
                op,
                field,
                message: "must be at least 1".to_string(),
            }),
            other => Ok(other.unwrap_or(1)),
        };
        Ok(TextOptions {
            align: self.align,
            reverse: self.reverse,
            width_factor: factor("width_factor", self.width_factor)?,
            height_factor: factor("height_factor", self.height_factor)?,
            font: self.font,
            rotation: self.rotation,
        })
    }
}

impl JsonBarcode {
    fn to_options(&self) -> BarcodeOptions {
        BarcodeOptions {
            align: self.align,
            rotation: self.rotation,
            symbology: self.pattern,
            narrow: self.narrow,
            wide: self.wide,
            height: self.height,
            human_readable: self.human_readable,
        }
    }
}
