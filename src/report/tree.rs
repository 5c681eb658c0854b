// src/report/tree.rs
//
// Recursive visualizer for arbitrary nested values — the lighter-weight
// sibling of the tabular pipeline. Produces nested-list markup and a
// canonical JSON form of the same root.

use crate::core::sanitize::escape_markup;

use super::cell::format_cell;
use super::value::Value;
use super::Artifact;

/// Owned Values cannot form true cycles, but hostile JSON can still nest
/// absurdly deep; recursion stops here with a truncation marker.
pub const MAX_DEPTH: usize = 32;

const NULL_MARKER: &str = "null";
const DEPTH_MARKER: &str = "(truncated)";

pub fn render_tree(value: &Value) -> String {
    let mut out = s!();
    node(value, 0, &mut out);
    out
}

fn node(value: &Value, depth: usize, out: &mut String) {
    if depth >= MAX_DEPTH {
        out.push_str(DEPTH_MARKER);
        return;
    }
    match value {
        Value::Absent => out.push_str(NULL_MARKER),
        Value::Str(_) | Value::Num(_) | Value::Bool(_) => {
            out.push_str(&escape_markup(&format_cell(value)))
        }
        Value::Pairs(pairs) => {
            out.push_str("<ul>");
            for (n, v) in pairs {
                out.push_str("<li>");
                out.push_str(&escape_markup(n));
                out.push_str(": ");
                out.push_str(&escape_markup(v));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Value::Map(entries) => {
            out.push_str("<ul>");
            for (k, v) in entries {
                out.push_str("<li>");
                out.push_str(&escape_markup(k));
                out.push_str(": ");
                node(v, depth + 1, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Value::List(items) => {
            out.push_str("<ol>");
            for v in items {
                out.push_str("<li>");
                node(v, depth + 1, out);
                out.push_str("</li>");
            }
            out.push_str("</ol>");
        }
    }
}

/// Canonical JSON form of the same root. Map/Pairs keep insertion order.
pub fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::{Map, Number, Value as Json};
    match value {
        Value::Absent => Json::Null,
        Value::Str(s) => Json::String(s.clone()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Num(n) => {
            if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                Json::Number(Number::from(*n as i64))
            } else {
                Number::from_f64(*n).map(Json::Number).unwrap_or(Json::Null)
            }
        }
        Value::Pairs(pairs) => {
            let mut m = Map::new();
            for (n, v) in pairs {
                m.insert(n.clone(), Json::String(v.clone()));
            }
            Json::Object(m)
        }
        Value::Map(entries) => {
            let mut m = Map::new();
            for (k, v) in entries {
                m.insert(k.clone(), to_json(v));
            }
            Json::Object(m)
        }
        Value::List(items) => Json::Array(items.iter().map(to_json).collect()),
    }
}

pub fn tree_json(value: &Value) -> String {
    serde_json::to_string_pretty(&to_json(value)).unwrap_or_else(|_| s!("null"))
}

pub fn json_artifact(value: &Value, filename: &str) -> Artifact {
    Artifact {
        mime: "application/json",
        filename: s!(filename),
        payload: tree_json(value),
    }
}
