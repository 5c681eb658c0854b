// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{OutputFormat, ReportOptions, Source, ToolKind};
use crate::file::normalize_separators;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli()?;
    let summary = runner::run(&opts)?;
    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

fn parse_cli() -> Result<ReportOptions, Box<dyn std::error::Error>> {
    let mut opts = ReportOptions::new();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--tool" => {
                let v = args.next().ok_or("Missing value for --tool")?;
                opts.tool = match v.to_ascii_lowercase().as_str() {
                    "links" => ToolKind::Links,
                    "images" => ToolKind::Images,
                    "scripts" => ToolKind::Scripts,
                    "headings" => ToolKind::Headings,
                    "cookies" => ToolKind::Cookies,
                    "timings" => ToolKind::Timings,
                    "tree" => ToolKind::Tree,
                    other => return Err(format!("Unknown tool: {}", other).into()),
                };
            }
            "-i" | "--in" => {
                let v = args.next().ok_or("Missing input path")?;
                opts.source = Some(Source::File(PathBuf::from(normalize_separators(&v))));
            }
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                opts.source = Some(Source::Url(v));
            }
            "--cookies" => opts.cookies = Some(args.next().ok_or("Missing value for --cookies")?),
            "--title" => opts.title = Some(args.next().ok_or("Missing value for --title")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "table" | "html" => OutputFormat::Table,
                    "csv" => OutputFormat::Csv,
                    "txt" | "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                opts.out = Some(PathBuf::from(normalize_separators(&v)));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if opts.format == OutputFormat::Json && opts.tool != ToolKind::Tree {
        return Err("--format json is only valid with --tool tree".into());
    }

    Ok(opts)
}
