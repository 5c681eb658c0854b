// src/collect/scripts.rs

use crate::core::html::{attr, inner_after_open_tag, next_tag_block_ci, tag_attrs};
use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "Scripts";

pub struct Script {
    pub src: Option<String>,
    pub kind: Option<String>, // the `type` attribute
    pub body: String,         // inline source text, untouched
}

impl Record for Script {
    fn field(&self, name: &str) -> Value {
        match name {
            "src" => Value::opt(self.src.as_deref()),
            "type" => Value::opt(self.kind.as_deref()),
            "text" => Value::str(&self.body),
            _ => Value::Absent,
        }
    }
}

/// All `<script>` blocks in document order. Inline bodies are kept verbatim
/// (no tag stripping — script text is not markup).
pub fn collect(doc: &str) -> Vec<Script> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<script", "</script>", pos) {
        let block = &doc[s..e];
        let open_end = block.find('>').map(|i| i + 1).unwrap_or(block.len());
        let attrs = tag_attrs(&block[..open_end]);
        out.push(Script {
            src: attr(&attrs, "src").map(|v| v.to_string()),
            kind: attr(&attrs, "type").map(|v| v.to_string()),
            body: inner_after_open_tag(block),
        });
        pos = e;
    }
    out
}

fn inline_len(item: &dyn Record) -> Value {
    match item.field("text") {
        Value::Str(s) => Value::int(s.len() as i64),
        _ => Value::int(0),
    }
}

pub fn schema() -> Schema {
    Schema::new()
        .path("Src", "src")
        .path("Type", "type")
        .func("Inline bytes", inline_len)
}
