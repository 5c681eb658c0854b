// src/report/table.rs

use crate::core::sanitize::{escape_markup, percent_encode};

use super::cell::format_cell;
use super::schema::Report;
use super::text::render_csv;
use super::Artifact;

const STYLE: &str = "table { border-collapse: collapse; } \
th, td { border: 1px solid #999; padding: 2px 6px; } \
th { background: #eee; }";

pub struct TableOutput {
    pub markup: String,
    pub csv: Artifact,
}

/// Markup table plus its CSV sibling. The sibling is regenerated from the
/// same report that feeds the table, so the download can never diverge from
/// what is displayed.
pub fn render_table(report: &Report, csv_filename: &str) -> TableOutput {
    let csv_text = render_csv(report);

    let mut out = s!();
    if let Some(title) = &report.title {
        out.push_str("<h1>");
        out.push_str(&escape_markup(title));
        out.push_str("</h1>\n");
    }
    out.push_str("<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n<table>\n<tr>");
    for h in &report.header {
        out.push_str("<th>");
        out.push_str(&escape_markup(h));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n");
    for row in &report.rows {
        out.push_str("<tr>");
        for v in row {
            out.push_str("<td>");
            out.push_str(&escape_markup(&format_cell(v)));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out.push_str(&download_link(csv_filename, &csv_text));
    out.push('\n');

    TableOutput {
        markup: out,
        csv: Artifact {
            mime: "text/csv",
            filename: s!(csv_filename),
            payload: csv_text,
        },
    }
}

fn download_link(filename: &str, csv_text: &str) -> String {
    join!(
        "<p><a download=\"",
        &escape_markup(filename),
        "\" href=\"data:text/csv;charset=utf-8,",
        &percent_encode(csv_text),
        "\">Download CSV</a></p>"
    )
}
