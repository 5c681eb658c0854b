// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    Links,
    Images,
    Scripts,
    Headings,
    Cookies,
    Timings,
    Tree,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Links => "links",
            ToolKind::Images => "images",
            ToolKind::Scripts => "scripts",
            ToolKind::Headings => "headings",
            ToolKind::Cookies => "cookies",
            ToolKind::Timings => "timings",
            ToolKind::Tree => "tree",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Text,
    Json,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Table => "html",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
    pub fn mime(&self) -> &'static str {
        match self {
            OutputFormat::Table => "text/html",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Where the document (or captured JSON) comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

#[derive(Clone, Debug)]
pub struct ReportOptions {
    pub tool: ToolKind,
    pub source: Option<Source>,      // document for links/images/…, JSON for timings/tree
    pub cookies: Option<String>,     // raw "name=value; …" string for the cookies tool
    pub title: Option<String>,       // report title override
    pub format: OutputFormat,
    pub out: Option<PathBuf>,        // output path (file, or directory hint)
}

impl ReportOptions {
    pub fn new() -> Self {
        Self {
            tool: ToolKind::Links,
            source: None,
            cookies: None,
            title: None,
            format: OutputFormat::Table,
            out: None,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::new()
    }
}
