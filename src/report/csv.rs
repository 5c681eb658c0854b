// src/report/csv.rs

/// Quote-wrap and double embedded quotes iff the text needs it; otherwise
/// return unchanged. Runs on final display text, after any coercion —
/// never before.
pub fn escape_for_csv(cell: &str) -> String {
    if needs_quotes(cell) {
        let escaped = cell.replace('"', "\"\"");
        join!("\"", &escaped, "\"")
    } else {
        s!(cell)
    }
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains('"') || cell.contains(',') || cell.contains('\n') || cell.contains('\r')
}
