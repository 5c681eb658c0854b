// src/collect/images.rs

use crate::core::html::{attr, next_open_tag_ci, tag_attrs};
use crate::report::{Record, Schema, Value};

pub const TITLE: &str = "Images";

pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub attrs: Vec<(String, String)>,
}

impl Record for Image {
    fn field(&self, name: &str) -> Value {
        match name {
            "src" => Value::opt(self.src.as_deref()),
            "alt" => Value::opt(self.alt.as_deref()),
            "width" => Value::opt(self.width.as_deref()),
            "height" => Value::opt(self.height.as_deref()),
            "attrs" => Value::Pairs(self.attrs.clone()),
            _ => Value::Absent,
        }
    }
}

/// All `<img>` tags in document order (void element; open tags only).
pub fn collect(doc: &str) -> Vec<Image> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_open_tag_ci(doc, "img", pos) {
        let attrs = tag_attrs(&doc[s..e]);
        out.push(Image {
            src: attr(&attrs, "src").map(|v| v.to_string()),
            alt: attr(&attrs, "alt").map(|v| v.to_string()),
            width: attr(&attrs, "width").map(|v| v.to_string()),
            height: attr(&attrs, "height").map(|v| v.to_string()),
            attrs,
        });
        pos = e;
    }
    out
}

pub fn schema() -> Schema {
    Schema::new()
        .path("Src", "src")
        .path("Alt", "alt")
        .path("Width", "width")
        .path("Height", "height")
        .path("Attributes", "attrs")
}
