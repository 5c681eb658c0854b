// tests/csv_text.rs
//
// Cell formatting, CSV quoting, and the delimited-text renderer.

use pagereport::report::cell::{coerce_for_csv, format_cell};
use pagereport::report::csv::escape_for_csv;
use pagereport::report::text::{render_csv, render_csv_with, render_text};
use pagereport::report::{Record, Report, Schema, Value};

struct Cell {
    x: Value,
}

impl Record for Cell {
    fn field(&self, name: &str) -> Value {
        match name {
            "x" => self.x.clone(),
            _ => Value::Absent,
        }
    }
}

fn one_cell_report(title: Option<&str>, x: Value) -> Report {
    let schema = Schema::new().path("X", "x");
    Report::build(title, &schema, &[Cell { x }]).unwrap()
}

#[test]
fn quote_doubling_and_field_quoting() {
    assert_eq!(escape_for_csv("a\"b,c"), "\"a\"\"b,c\"");
    assert_eq!(escape_for_csv("line\nbreak"), "\"line\nbreak\"");
    assert_eq!(escape_for_csv("comma,here"), "\"comma,here\"");
}

#[test]
fn escape_is_idempotent_on_safe_text() {
    for t in ["", "plain", "No. 1", "semi;colons", "tab\there"] {
        assert_eq!(escape_for_csv(t), t);
        assert_eq!(escape_for_csv(&escape_for_csv(t)), escape_for_csv(t));
    }
}

#[test]
fn pairs_format_inline_for_the_table_sink() {
    let pairs = Value::Pairs(vec![
        ("id".to_string(), "7".to_string()),
        ("class".to_string(), "x".to_string()),
    ]);
    assert_eq!(format_cell(&pairs), "id: 7; class: x");
    assert_eq!(format_cell(&Value::Pairs(Vec::new())), "");
}

#[test]
fn pairs_coerce_to_line_dumps_for_the_csv_sink() {
    let pairs = Value::Pairs(vec![
        ("id".to_string(), "7".to_string()),
        ("class".to_string(), "x".to_string()),
    ]);
    assert_eq!(coerce_for_csv(&pairs), "id: 7;\n\rclass: x;\n\r");
    // and the full CSV cell comes out quoted because of the newlines
    assert_eq!(
        escape_for_csv(&coerce_for_csv(&pairs)),
        "\"id: 7;\n\rclass: x;\n\r\""
    );
}

#[test]
fn scalar_formatting() {
    assert_eq!(format_cell(&Value::Absent), "");
    assert_eq!(format_cell(&Value::str("  padded  ")), "padded");
    assert_eq!(format_cell(&Value::int(42)), "42");
    assert_eq!(format_cell(&Value::Num(1.5)), "1.5");
    assert_eq!(format_cell(&Value::Bool(true)), "true");
}

#[test]
fn csv_render_produces_crlf_rows_with_quoting() {
    let report = one_cell_report(None, Value::str("a,b"));
    assert_eq!(render_csv(&report), "No.,X\r\n1,\"a,b\"\r\n");
    // same content through the explicit-delimiter face
    assert_eq!(render_csv_with(&report, ",", "\r\n"), render_csv(&report));
}

#[test]
fn text_render_uses_plain_cells_and_its_own_delimiters() {
    let report = one_cell_report(Some("Title"), Value::str("a,b"));
    assert_eq!(render_text(&report, "\t", "\n"), "Title\nNo.\tX\n1\ta,b\n");
}

#[test]
fn title_line_comes_first_in_csv_too() {
    let report = one_cell_report(Some("Links"), Value::str("v"));
    let out = render_csv(&report);
    assert!(out.starts_with("Links\r\nNo.,X\r\n"));
}

#[test]
fn csv_title_with_special_characters_stays_one_record() {
    let report = one_cell_report(Some("Links, \"quoted\""), Value::str("v"));
    let out = render_csv(&report);
    assert!(out.starts_with("\"Links, \"\"quoted\"\"\"\r\nNo.,X\r\n"));

    // plain-text mode leaves the title alone
    let text = render_text(&report, "\t", "\n");
    assert!(text.starts_with("Links, \"quoted\"\n"));
}
