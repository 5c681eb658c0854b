// src/collect/headings.rs

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::sanitize::normalize_entities;
use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "Headings";

pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Record for Heading {
    fn field(&self, name: &str) -> Value {
        match name {
            "level" => Value::int(self.level as i64),
            "tag" => Value::Str(format!("h{}", self.level)),
            "text" => Value::str(&self.text),
            _ => Value::Absent,
        }
    }
}

/// `<h1>`–`<h6>` in document order. Scanned per level, then merged back
/// into position order.
pub fn collect(doc: &str) -> Vec<Heading> {
    let mut found: Vec<(usize, Heading)> = Vec::new();
    for level in 1..=6u8 {
        let open = format!("<h{}", level);
        let close = format!("</h{}>", level);
        let mut pos = 0usize;
        while let Some((s, e)) = next_tag_block_ci(doc, &open, &close, pos) {
            let text = strip_tags(normalize_entities(&inner_after_open_tag(&doc[s..e])));
            found.push((s, Heading { level, text }));
            pos = e;
        }
    }
    found.sort_by_key(|(s, _)| *s);
    found.into_iter().map(|(_, h)| h).collect()
}

pub fn schema() -> Schema {
    Schema::new()
        .path("Tag", "tag")
        .path("Level", "level")
        .path("Text", "text")
}
