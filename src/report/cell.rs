// src/report/cell.rs

use super::value::Value;

/// Shared value→text rule for the table and plain-text sinks.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Absent => s!(),
        Value::Str(s) => s.trim().to_string(),
        Value::Num(n) => format_num(*n),
        Value::Bool(b) => s!(if *b { "true" } else { "false" }),
        Value::Pairs(pairs) => pairs
            .iter()
            .map(|(n, v)| format!("{}: {}", n, v))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_cell(v)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::List(items) => items
            .iter()
            .map(format_cell)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// CSV sink coercion for object-shaped cells: attribute dumps render as
/// repeated "name: value;" lines so consumers can split the quoted cell on
/// embedded newlines. Scalars defer to format_cell. This path is kept
/// distinct from the table sink's inline "; " join.
pub fn coerce_for_csv(value: &Value) -> String {
    match value {
        Value::Pairs(pairs) => {
            let mut out = s!();
            for (n, v) in pairs {
                out.push_str(n);
                out.push_str(": ");
                out.push_str(v);
                out.push_str(";\n\r");
            }
            out
        }
        Value::Map(entries) => {
            let mut out = s!();
            for (k, v) in entries {
                out.push_str(k);
                out.push_str(": ");
                out.push_str(&format_cell(v));
                out.push_str(";\n\r");
            }
            out
        }
        other => format_cell(other),
    }
}

fn format_num(n: f64) -> String {
    // Integral values (ordinals included) render without a fractional part.
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
