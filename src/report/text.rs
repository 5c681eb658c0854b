// src/report/text.rs

use super::cell::{coerce_for_csv, format_cell};
use super::csv::escape_for_csv;
use super::schema::Report;
use super::value::Value;

pub const CSV_COL_DELIM: &str = ",";
pub const CSV_ROW_DELIM: &str = "\r\n";

/// Delimiter-agnostic assembly: optional title line, header, then rows.
/// Cell and header encoding are supplied by the caller — CSV quoting is the
/// CSV caller's business, not this renderer's. The title line goes through
/// the header encoder; it is a record in the output like any other.
pub fn render_delimited<C, H>(
    report: &Report,
    col_delim: &str,
    row_delim: &str,
    cell: C,
    head: H,
) -> String
where
    C: Fn(&Value) -> String,
    H: Fn(&str) -> String,
{
    let mut out = s!();
    if let Some(title) = &report.title {
        out.push_str(&head(title));
        out.push_str(row_delim);
    }
    let header: Vec<String> = report.header.iter().map(|h| head(h)).collect();
    out.push_str(&header.join(col_delim));
    out.push_str(row_delim);
    for row in &report.rows {
        let cells: Vec<String> = row.iter().map(&cell).collect();
        out.push_str(&cells.join(col_delim));
        out.push_str(row_delim);
    }
    out
}

/// Plain-text display mode: formatted cells, no escaping.
pub fn render_text(report: &Report, col_delim: &str, row_delim: &str) -> String {
    render_delimited(report, col_delim, row_delim, |v| format_cell(v), |h| s!(h))
}

/// CSV export mode: sink-specific coercion, then CSV quoting — cells and
/// headers alike.
pub fn render_csv_with(report: &Report, col_delim: &str, row_delim: &str) -> String {
    render_delimited(
        report,
        col_delim,
        row_delim,
        |v| escape_for_csv(&coerce_for_csv(v)),
        |h| escape_for_csv(h),
    )
}

pub fn render_csv(report: &Report) -> String {
    render_csv_with(report, CSV_COL_DELIM, CSV_ROW_DELIM)
}
