// src/runner.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::collect::{cookies, headings, images, links, scripts, timings};
use crate::config::consts::{TEXT_COL_DELIM, TEXT_ROW_DELIM};
use crate::config::options::{OutputFormat, ReportOptions, Source, ToolKind};
use crate::core::{net, sanitize};
use crate::file::write_artifact;
use crate::report::{table, text, tree, Artifact, Report, Value};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: build the artifact for the selected tool/format and
/// hand it to the file layer.
pub fn run(opts: &ReportOptions) -> Result<RunSummary, Box<dyn Error>> {
    let artifact = build_artifact(opts)?;
    let path = write_artifact(&artifact, opts.out.as_deref())?;
    logf!("{} -> {} ({} bytes)", opts.tool.name(), path.display(), artifact.payload.len());
    Ok(RunSummary { files_written: vec![path] })
}

/// Everything up to (but not including) the disk write — the string payload
/// plus MIME kind and suggested filename.
pub fn build_artifact(opts: &ReportOptions) -> Result<Artifact, Box<dyn Error>> {
    if opts.tool == ToolKind::Tree {
        return build_tree_artifact(opts);
    }

    let report = build_report(opts)?;
    let payload = match opts.format {
        OutputFormat::Table => {
            let out = table::render_table(&report, &filename(opts, OutputFormat::Csv.ext()));
            out.markup
        }
        OutputFormat::Csv => text::render_csv(&report),
        OutputFormat::Text => text::render_text(&report, TEXT_COL_DELIM, TEXT_ROW_DELIM),
        OutputFormat::Json => return Err("json output is only valid with --tool tree".into()),
    };
    Ok(Artifact {
        mime: opts.format.mime(),
        filename: filename(opts, opts.format.ext()),
        payload,
    })
}

/* ---------------- Tabular tools ---------------- */

fn build_report(opts: &ReportOptions) -> Result<Report, Box<dyn Error>> {
    match opts.tool {
        ToolKind::Links => {
            let doc = load_source(opts)?;
            Ok(Report::build(title(opts, links::TITLE), &links::schema(), &links::collect(&doc))?)
        }
        ToolKind::Images => {
            let doc = load_source(opts)?;
            Ok(Report::build(title(opts, images::TITLE), &images::schema(), &images::collect(&doc))?)
        }
        ToolKind::Scripts => {
            let doc = load_source(opts)?;
            Ok(Report::build(title(opts, scripts::TITLE), &scripts::schema(), &scripts::collect(&doc))?)
        }
        ToolKind::Headings => {
            let doc = load_source(opts)?;
            Ok(Report::build(title(opts, headings::TITLE), &headings::schema(), &headings::collect(&doc))?)
        }
        ToolKind::Cookies => {
            let raw = opts
                .cookies
                .as_deref()
                .ok_or("The cookies tool needs --cookies \"name=value; …\"")?;
            let jar = cookies::CookieJar::parse(raw);
            Ok(Report::build(title(opts, cookies::TITLE), &cookies::schema(), jar.cookies())?)
        }
        ToolKind::Timings => {
            let raw = load_source(opts)?;
            let entries = timings::parse(&raw)?;
            Ok(Report::build(title(opts, timings::TITLE), &timings::schema(), &entries)?)
        }
        ToolKind::Tree => Err("tree has no tabular report".into()),
    }
}

/* ---------------- Tree tool ---------------- */

fn build_tree_artifact(opts: &ReportOptions) -> Result<Artifact, Box<dyn Error>> {
    let raw = load_source(opts)?;
    let parsed: serde_json::Value = serde_json::from_str(&raw)?;
    let value = Value::from_json(&parsed);

    match opts.format {
        OutputFormat::Json => Ok(tree::json_artifact(&value, &filename(opts, "json"))),
        _ => Ok(Artifact {
            mime: "text/html",
            filename: filename(opts, "html"),
            payload: tree_page(opts.title.as_deref(), &value),
        }),
    }
}

fn tree_page(title: Option<&str>, value: &Value) -> String {
    let mut out = s!();
    if let Some(t) = title {
        out.push_str("<h1>");
        out.push_str(&sanitize::escape_markup(t));
        out.push_str("</h1>\n");
    }
    out.push_str(&tree::render_tree(value));
    out.push('\n');
    out
}

/* ---------------- Helpers ---------------- */

fn title<'a>(opts: &'a ReportOptions, default: &'a str) -> Option<&'a str> {
    Some(opts.title.as_deref().unwrap_or(default))
}

fn load_source(opts: &ReportOptions) -> Result<String, Box<dyn Error>> {
    match &opts.source {
        Some(Source::File(p)) => Ok(fs::read_to_string(p)?),
        Some(Source::Url(u)) => net::http_get(u),
        None => Err("No input: use --in <file> or --url <url>".into()),
    }
}

/// Suggested filename: source-derived stem + tool name + extension, run
/// through the sanitizer (URL-derived stems are not filesystem-safe).
fn filename(opts: &ReportOptions, ext: &str) -> String {
    let stem = match &opts.source {
        Some(Source::Url(u)) => {
            let base = sanitize::sanitize_filename(u, "page");
            format!("{}_{}", base, opts.tool.name())
        }
        Some(Source::File(p)) => {
            let base = p
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| s!("page"));
            format!("{}_{}", sanitize::sanitize_filename(&base, "page"), opts.tool.name())
        }
        None => s!(opts.tool.name()),
    };
    format!("{}.{}", stem, ext)
}
