// src/report/mod.rs
//! # Report core
//!
//! The schema-driven collection→report pipeline. Everything here is a pure,
//! synchronous computation chain: collection → rows → formatted cells →
//! rendered output string. No component blocks, spawns work, or holds state
//! across invocations; each render owns its own buffers.
//!
//! ## What lives here
//! - **Value model** (`value`) — the resolved-value enum and the `Record`
//!   trait ("gettable by string key") that collected items implement.
//! - **Path resolution** (`path`) — dot-delimited attribute walks with
//!   absent short-circuiting. Never evaluates the path as code; a schema-
//!   or user-supplied path cannot become an injection vector.
//! - **Schema & rows** (`schema`) — ordered label→resolver columns, one-shot
//!   validation, and the row builder that prepends the 1-based `No.` ordinal.
//! - **Cell formatting** (`cell`) — value→text for the table/text sink, and
//!   the CSV-specific object coercion. Two deliberate formatting paths:
//!   attribute lists join inline with `"; "` for tables, and as repeated
//!   `name: value;` lines inside one quoted cell for CSV.
//! - **Sinks** (`csv`, `text`, `table`) — CSV quoting, the delimiter-agnostic
//!   text renderer, and the HTML table renderer with its CSV sibling.
//! - **Tree view** (`tree`) — the independent recursive visualizer with JSON
//!   export, for ad-hoc nested data rather than tabular collections.
//!
//! ## What does **not** live here
//! - Locating raw source collections (that's `collect/`).
//! - Writing artifacts to disk or choosing output paths (that's `file.rs`).
//! - Tool/format dispatch (that's `runner.rs`).
//!
//! ## Conventions & invariants
//! - Row count always equals collection length; no silent filtering.
//! - Absent values format to the empty string, never error.
//! - CSV escaping runs on final display text, never before coercion.
//! - The table's CSV sibling is regenerated from the same report it displays.

pub mod cell;
pub mod csv;
pub mod path;
pub mod schema;
pub mod table;
pub mod text;
pub mod tree;
pub mod value;

pub use schema::{build_rows, Report, Resolver, Schema, SchemaError, ORDINAL_LABEL};
pub use value::{Record, Value};

/// Export payload handed to the external save/download collaborator.
/// The core only produces the bytes and a suggested name; the actual
/// file-save belongs to the caller.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub mime: &'static str,
    pub filename: String,
    pub payload: String,
}
