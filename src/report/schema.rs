// src/report/schema.rs

use std::fmt;

use super::path::resolve;
use super::value::{Record, Value};

/// The implicit ordinal column label. Always prepended; not user-suppliable.
pub const ORDINAL_LABEL: &str = "No.";

/// Path-or-function extractor for one column.
pub enum Resolver {
    Path(String),
    Fn(fn(&dyn Record) -> Value),
}

pub struct Column {
    pub label: String,
    pub resolver: Resolver,
}

/// Ordered label→resolver mapping. Order defines column order.
#[derive(Default)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    pub fn path(mut self, label: &str, path: &str) -> Self {
        self.columns.push(Column {
            label: s!(label),
            resolver: Resolver::Path(s!(path)),
        });
        self
    }

    pub fn func(mut self, label: &str, f: fn(&dyn Record) -> Value) -> Self {
        self.columns.push(Column {
            label: s!(label),
            resolver: Resolver::Fn(f),
        });
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header row: ordinal label first, then declared labels in order.
    pub fn headers(&self) -> Vec<String> {
        let mut h = Vec::with_capacity(self.columns.len() + 1);
        h.push(s!(ORDINAL_LABEL));
        h.extend(self.columns.iter().map(|c| c.label.clone()));
        h
    }

    /// One-shot configuration check. A malformed schema is reported here,
    /// before any row is built — it never silently produces garbage rows.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (i, col) in self.columns.iter().enumerate() {
            if col.label.trim().is_empty() {
                return Err(SchemaError::EmptyLabel(i));
            }
            if col.label == ORDINAL_LABEL {
                return Err(SchemaError::ReservedLabel);
            }
            if let Resolver::Path(p) = &col.resolver {
                if p.trim().is_empty() {
                    return Err(SchemaError::EmptyPath(col.label.clone()));
                }
            }
            if self.columns[..i].iter().any(|c| c.label == col.label) {
                return Err(SchemaError::DuplicateLabel(col.label.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    EmptyLabel(usize),
    ReservedLabel,
    DuplicateLabel(String),
    EmptyPath(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyLabel(i) => write!(f, "schema column {} has an empty label", i),
            SchemaError::ReservedLabel => {
                write!(f, "\"{}\" is the implicit ordinal column and cannot be declared", ORDINAL_LABEL)
            }
            SchemaError::DuplicateLabel(l) => write!(f, "duplicate schema label: {}", l),
            SchemaError::EmptyPath(l) => write!(f, "schema column \"{}\" has an empty path", l),
        }
    }
}

impl std::error::Error for SchemaError {}

/// One row per item, no filtering: `[i+1, resolved…]` in schema order.
/// Items are read-only here; resolvers may read live state but never get
/// a mutable handle.
pub fn build_rows<T: Record>(schema: &Schema, items: &[T]) -> Vec<Vec<Value>> {
    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let mut row = Vec::with_capacity(schema.len() + 1);
        row.push(Value::int(i as i64 + 1));
        for col in schema.columns() {
            row.push(match &col.resolver {
                Resolver::Path(p) => resolve(item, p),
                Resolver::Fn(f) => f(item),
            });
        }
        rows.push(row);
    }
    rows
}

/// (title, header, body rows) — create, render, discard.
pub struct Report {
    pub title: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Report {
    pub fn build<T: Record>(
        title: Option<&str>,
        schema: &Schema,
        items: &[T],
    ) -> Result<Report, SchemaError> {
        schema.validate()?;
        Ok(Report {
            title: title.map(|t| s!(t)),
            header: schema.headers(),
            rows: build_rows(schema, items),
        })
    }
}
