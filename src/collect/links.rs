// src/collect/links.rs

use crate::core::html::{attr, inner_after_open_tag, next_tag_block_ci, strip_tags, tag_attrs};
use crate::core::sanitize::normalize_entities;
use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "Links";

pub struct Link {
    pub href: Option<String>,
    pub text: String,
    pub title: Option<String>,
    pub target: Option<String>,
    pub attrs: Vec<(String, String)>,
}

impl Record for Link {
    fn field(&self, name: &str) -> Value {
        match name {
            "href" => Value::opt(self.href.as_deref()),
            "text" => Value::str(&self.text),
            "title" => Value::opt(self.title.as_deref()),
            "target" => Value::opt(self.target.as_deref()),
            "attrs" => Value::Pairs(self.attrs.clone()),
            _ => Value::Absent,
        }
    }
}

/// All `<a>` elements in document order. Anchors without an href are kept;
/// they resolve to absent cells downstream.
pub fn collect(doc: &str) -> Vec<Link> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<a", "</a>", pos) {
        let block = &doc[s..e];
        let open_end = block.find('>').map(|i| i + 1).unwrap_or(block.len());
        let attrs = tag_attrs(&block[..open_end]);
        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        out.push(Link {
            href: attr(&attrs, "href").map(|v| v.to_string()),
            title: attr(&attrs, "title").map(|v| v.to_string()),
            target: attr(&attrs, "target").map(|v| v.to_string()),
            text,
            attrs,
        });
        pos = e;
    }
    out
}

pub fn schema() -> Schema {
    Schema::new()
        .path("Href", "href")
        .path("Text", "text")
        .path("Title", "title")
        .path("Target", "target")
        .path("Attributes", "attrs")
}
