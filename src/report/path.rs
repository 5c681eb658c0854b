// src/report/path.rs

use super::value::{Record, Value};

/// Walk a dot-delimited attribute path against an item. A missing
/// intermediate short-circuits to Absent — resolution never reads through
/// a missing value and never treats the path as executable code.
pub fn resolve(item: &dyn Record, path: &str) -> Value {
    let mut segments = path.split('.');
    let first = match segments.next() {
        Some(seg) if !seg.is_empty() => seg,
        _ => return Value::Absent,
    };

    let mut current = item.field(first);
    for seg in segments {
        if seg.is_empty() || current.is_absent() {
            return Value::Absent;
        }
        current = current.key(seg);
    }
    current
}
