// src/collect/mod.rs
//! Per-source extraction modules. Each one knows how to locate ONE raw
//! collection (anchor tags, images, a cookie string, captured timing
//! entries, …), exposes the item type with its `Record` impl, and declares
//! the tool's column `Schema` plus a default report title.
//!
//! What does **not** live here: rendering, escaping, export formatting —
//! the report core consumes whatever these modules produce. Collectors only
//! extract; they never filter items (an `<a>` without an href still becomes
//! a row with absent cells).

pub mod cookies;
pub mod headings;
pub mod images;
pub mod links;
pub mod scripts;
pub mod timings;
