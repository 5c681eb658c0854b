// src/report/value.rs

/// A resolved cell value. `Absent` is the well-defined "no value" result of
/// a failed lookup — distinct from an error, it formats to the empty string.
/// `Map`/`List` carry nested data for the path resolver and the tree view.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Absent,
    Str(String),
    Num(f64),
    Bool(bool),
    Pairs(Vec<(String, String)>),
    Map(Vec<(String, Value)>),
    List(Vec<Value>),
}

impl Value {
    pub fn str<S: AsRef<str>>(s: S) -> Self {
        Value::Str(s.as_ref().to_string())
    }

    /// None → Absent.
    pub fn opt(o: Option<&str>) -> Self {
        match o {
            Some(s) => Value::str(s),
            None => Value::Absent,
        }
    }

    pub fn int(n: i64) -> Self {
        Value::Num(n as f64)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Keyed lookup for one path segment. Only maps and name/value-pair
    /// collections are traversable; everything else yields Absent.
    pub fn key(&self, name: &str) -> Value {
        match self {
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Absent),
            Value::Pairs(pairs) => pairs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| Value::Str(v.clone()))
                .unwrap_or(Value::Absent),
            _ => Value::Absent,
        }
    }

    /// Parsed JSON → Value, for ad-hoc inspection input. JSON null maps to
    /// Absent (renders as the literal null marker, serializes back to null).
    pub fn from_json(v: &serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Num(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }
}

/// Keyed access by field name. Collected item types implement this; unknown
/// names return `Value::Absent`, never panic. Implementations may read live
/// external state (the document text they were cut from is already a
/// snapshot, but nothing forbids a live-backed Record).
pub trait Record {
    fn field(&self, name: &str) -> Value;
}
