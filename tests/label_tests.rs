//! # Label Tests
//!
//! End-to-end checks of complete print jobs: drawing calls in, EPL2 bytes
//! out. Unit tests next to each module cover the individual formulas; these
//! pin down whole jobs as a printer would receive them.

use etiqueta::json_api::JsonJob;
use etiqueta::label::{BarcodeOptions, Label, TextOptions};
use etiqueta::protocol::barcode::Symbology;
use etiqueta::protocol::rotation::Rotation;
use etiqueta::transport::{DEFAULT_DESTINATION, MemorySpooler};
use etiqueta::{EtiquetaError, LabelOptions};
use pretty_assertions::assert_eq;

// ============================================================================
// BUILDER JOBS
// ============================================================================

#[test]
fn test_centered_hello() {
    let mut label = Label::new();
    label.print_text("HELLO", &TextOptions::new().center()).unwrap();

    assert_eq!(label.export(1), "\nN\nA367,10,0,4,1,1,N,\"HELLO\"\nP1\n");
}

#[test]
fn test_cleared_label_exports_empty_job() {
    let mut label = Label::new();
    label
        .write_line("gone", &TextOptions::new())
        .unwrap()
        .draw_line(0, 0, 100, 0, None)
        .clear();

    assert_eq!(label.export(1), "\nN\nP1\n");
}

#[test]
fn test_shipping_label() {
    let mut label = Label::new();
    label
        .write_line("SHIP TO", &TextOptions::new().font(3))
        .unwrap()
        .write_line("J. Doe", &TextOptions::new())
        .unwrap()
        .write_barcode_line("12345", &BarcodeOptions::new())
        .unwrap()
        .draw_line(10, 200, 802, 200, None);

    let expected = concat!(
        "\n",
        "N\n",
        "A10,10,0,3,1,1,N,\"SHIP TO\"\n",
        "A10,31,0,4,1,1,N,\"J. Doe\"\n",
        "B10,56,0,3,3,9,102,N,\"12345\"\n",
        "LS10,200,3,802,200\n",
        "P2\n",
    );
    assert_eq!(label.export(2), expected);
    assert_eq!(label.cursor().y, 158);
}

#[test]
fn test_quotes_escaped_and_trimmed() {
    let mut label = Label::new();
    label
        .print_text("  say \"hi\"  ", &TextOptions::new())
        .unwrap();

    assert_eq!(
        label.commands().last(),
        Some("A10,10,0,4,1,1,N,\"say \\\"hi\\\"\"")
    );
}

#[test]
fn test_landscape_tall_label() {
    let options = LabelOptions {
        height: Some(6.0),
        rotation: Some(Rotation::Landscape),
        ..Default::default()
    };
    let mut label = Label::from_options(&options).unwrap();
    label.print_text("x", &TextOptions::new()).unwrap();

    assert_eq!(label.commands().last(), Some("A1208,10,1,4,1,1,N,\"x\""));
}

#[test]
fn test_barcode_call_options_do_not_replace_defaults() {
    let mut label = Label::new();
    label
        .print_barcode("1", &BarcodeOptions::new().height(40))
        .unwrap()
        .draw_barcode("2", &BarcodeOptions::new());

    assert_eq!(
        label.export(1),
        "\nN\nB10,10,0,3,3,9,40,N,\"1\"\nB10,10,0,3,3,9,102,N,\"2\"\nP1\n"
    );
}

#[test]
fn test_oversized_json_values_are_rejected() {
    let json = r#"{"ops": [
        {"op": "write_barcode_line", "data": "1", "height": 3000000000},
        {"op": "print_text", "text": "x"}
    ]}"#;
    let job = JsonJob::from_json_str(json).unwrap();
    let err: EtiquetaError = job.render().unwrap_err().into();
    assert!(matches!(err, EtiquetaError::OutOfRange { .. }));
}

#[test]
fn test_commands_keep_position_at_append_time() {
    let mut label = Label::new();
    label.print_text("A", &TextOptions::new()).unwrap();
    label.move_to(400, 400);

    assert_eq!(label.commands().last(), Some("A10,10,0,4,1,1,N,\"A\""));
}

#[test]
fn test_unmeasurable_text_leaves_label_untouched() {
    let options = LabelOptions {
        dpi: Some(300),
        ..Default::default()
    };
    let mut label = Label::from_options(&options).unwrap();
    let err = label
        .write_line("HELLO", &TextOptions::new().center())
        .unwrap_err();

    assert!(matches!(err, EtiquetaError::MetricsLookup { dpi: 300, font: 4 }));
    assert!(label.commands().is_empty());
    assert_eq!((label.cursor().x, label.cursor().y), (10, 10));

    // Barcodes and lines need no font metrics.
    label
        .draw_barcode("ABC", &BarcodeOptions::new().symbology(Symbology::Code128Auto))
        .draw_line(0, 0, 10, 0, Some(1));
    assert_eq!(label.commands().len(), 2);
}

// ============================================================================
// JSON JOBS
// ============================================================================

#[test]
fn test_json_job_matches_builder() {
    let json = r#"{
        "quantity": 2,
        "ops": [
            {"op": "write_line", "text": "SHIP TO", "font": 3},
            {"op": "write_line", "text": "J. Doe"},
            {"op": "write_barcode_line", "data": "12345"},
            {"op": "line", "x1": 10, "y1": 200, "x2": 802, "y2": 200}
        ]
    }"#;
    let job = JsonJob::from_json_str(json).unwrap();

    let mut label = Label::new();
    label
        .write_line("SHIP TO", &TextOptions::new().font(3))
        .unwrap()
        .write_line("J. Doe", &TextOptions::new())
        .unwrap()
        .write_barcode_line("12345", &BarcodeOptions::new())
        .unwrap()
        .draw_line(10, 200, 802, 200, None);

    assert_eq!(job.render().unwrap(), label.export(2));
}

#[test]
fn test_json_job_rejects_unknown_fields() {
    let err = JsonJob::from_json_str(r#"{"options": {"colour": "red"}}"#).unwrap_err();
    assert!(matches!(err, EtiquetaError::Json(_)));
}

// ============================================================================
// SPOOLING
// ============================================================================

#[test]
fn test_print_to_memory_spooler() {
    let mut label = Label::new();
    label.print_text("HELLO", &TextOptions::new().center()).unwrap();

    let spooler = MemorySpooler::new();
    label.print_to(&spooler, DEFAULT_DESTINATION, 3).unwrap();

    let jobs = spooler.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].destination, "tagprinter");
    assert_eq!(jobs[0].data, label.export(3).into_bytes());
}
