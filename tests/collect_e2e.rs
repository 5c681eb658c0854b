// tests/collect_e2e.rs
//
// Collectors over fixture HTML, plus a runner round trip without UI.

use std::fs;
use std::path::PathBuf;

use pagereport::collect::{cookies, headings, images, links, scripts, timings};
use pagereport::config::options::{OutputFormat, ReportOptions, Source, ToolKind};
use pagereport::report::Value;
use pagereport::runner;

const DOC: &str = r#"<html><head>
<script type="text/javascript">var n = 1;</script>
<script src="/app.js"></script>
</head><body>
<h2>Second</h2>
<h1>First &amp; Only</h1>
<p>An <abbr title="x">abbr</abbr> should not be a link.</p>
<A HREF="/one" TARGET="_blank" title='Go'>One <b>bold</b></A>
<a name="anchor-only">no href here</a>
<img src="/pic.png" alt="A pic" width=32 height="16">
<img src='/other.gif'>
</body></html>"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pagereport_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn links_keep_document_order_and_tolerate_missing_href() {
    let found = links::collect(DOC);
    assert_eq!(found.len(), 2);

    assert_eq!(found[0].href.as_deref(), Some("/one"));
    assert_eq!(found[0].target.as_deref(), Some("_blank"));
    assert_eq!(found[0].title.as_deref(), Some("Go"));
    assert_eq!(found[0].text, "One bold");

    assert_eq!(found[1].href, None);
    assert_eq!(found[1].text, "no href here");
}

#[test]
fn images_parse_quoted_and_bare_attributes() {
    let found = images::collect(DOC);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].src.as_deref(), Some("/pic.png"));
    assert_eq!(found[0].alt.as_deref(), Some("A pic"));
    assert_eq!(found[0].width.as_deref(), Some("32"));
    assert_eq!(found[0].height.as_deref(), Some("16"));
    assert_eq!(found[1].src.as_deref(), Some("/other.gif"));
    assert_eq!(found[1].alt, None);
}

#[test]
fn scripts_split_external_and_inline() {
    let found = scripts::collect(DOC);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].src, None);
    assert_eq!(found[0].kind.as_deref(), Some("text/javascript"));
    assert!(found[0].body.contains("var n = 1;"));
    assert_eq!(found[1].src.as_deref(), Some("/app.js"));
    assert!(found[1].body.is_empty());
}

#[test]
fn headings_come_back_in_document_order() {
    let found = headings::collect(DOC);
    assert_eq!(found.len(), 2);
    assert_eq!((found[0].level, found[0].text.as_str()), (2, "Second"));
    assert_eq!((found[1].level, found[1].text.as_str()), (1, "First & Only"));
}

#[test]
fn cookie_jar_keeps_order_and_indexes_names() {
    let jar = cookies::CookieJar::parse("sid=abc; theme=dark; malformed; =nope; empty=");
    assert_eq!(jar.len(), 3);
    assert_eq!(jar.cookies()[0].name, "sid");
    assert_eq!(jar.cookies()[1].name, "theme");
    assert_eq!(jar.cookies()[2].value, "");
    assert_eq!(jar.get("theme"), Some("dark"));
    assert_eq!(jar.get("missing"), None);
}

#[test]
fn timing_entries_deserialize_and_compute_end() {
    let raw = r#"[
        {"name": "http://x/app.js", "entryType": "resource",
         "startTime": 12.5, "duration": 30.0, "initiatorType": "script"},
        {"name": "http://x/", "entryType": "navigation"}
    ]"#;
    let entries = timings::parse(raw).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].initiator_type.as_deref(), Some("script"));
    assert_eq!(entries[1].duration, 0.0);

    let schema = timings::schema();
    let report = pagereport::report::Report::build(None, &schema, &entries).unwrap();
    // End (ms) = startTime + duration, via the fn resolver
    assert_eq!(report.rows[0][6], Value::Num(42.5));
}

#[test]
fn runner_writes_a_csv_for_a_file_source() {
    let dir = tmp_dir("links_csv");
    let doc_path = dir.join("fixture.html");
    fs::write(&doc_path, DOC).unwrap();

    let mut opts = ReportOptions::new();
    opts.tool = ToolKind::Links;
    opts.source = Some(Source::File(doc_path));
    opts.format = OutputFormat::Csv;
    opts.out = Some(dir.join("out.csv"));

    let summary = runner::run(&opts).unwrap();
    assert_eq!(summary.files_written.len(), 1);

    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    assert!(text.starts_with("Links\r\nNo.,Href,Text,Title,Target,Attributes\r\n"));
    assert!(text.contains("1,/one,One bold,Go,_blank,"));
    // the attribute dump cell is quoted and newline-separated
    assert!(text.contains("href: /one;\n\r"));
}

#[test]
fn out_path_resolution_covers_default_hint_and_dir_hint() {
    use pagereport::file::{resolve_out_path, write_artifact};
    use pagereport::report::Artifact;
    use std::path::Path;

    // no hint: default out dir + suggested name
    let p = resolve_out_path(None, "page_links.csv").unwrap();
    assert_eq!(p, PathBuf::from("out").join("page_links.csv"));

    // trailing-slash hint: treated as a directory even before it exists
    let dir = tmp_dir("out_paths");
    let sub = format!("{}/nested/", dir.display());
    let p = resolve_out_path(Some(Path::new(&sub)), "page_links.csv").unwrap();
    assert!(p.ends_with(Path::new("nested").join("page_links.csv")));
    assert!(dir.join("nested").is_dir());

    // existing directory without the slash joins the suggested name too
    let p = resolve_out_path(Some(dir.as_path()), "page_links.csv").unwrap();
    assert_eq!(p, dir.join("page_links.csv"));

    // and write_artifact lands the payload through the same resolution
    let artifact = Artifact {
        mime: "text/csv",
        filename: "page_links.csv".to_string(),
        payload: "No.\r\n1\r\n".to_string(),
    };
    let deeper = dir.join("deeper/");
    let written = write_artifact(&artifact, Some(deeper.as_path())).unwrap();
    assert_eq!(fs::read_to_string(&written).unwrap(), artifact.payload);
    assert!(written.ends_with(Path::new("deeper").join("page_links.csv")));
}

#[test]
fn runner_renders_a_tree_page_and_json_artifact() {
    let dir = tmp_dir("tree");
    let json_path = dir.join("data.json");
    fs::write(&json_path, r#"{"a": [1, null], "b": "x"}"#).unwrap();

    let mut opts = ReportOptions::new();
    opts.tool = ToolKind::Tree;
    opts.source = Some(Source::File(json_path));
    opts.format = OutputFormat::Json;

    let artifact = runner::build_artifact(&opts).unwrap();
    assert_eq!(artifact.mime, "application/json");
    let parsed: serde_json::Value = serde_json::from_str(&artifact.payload).unwrap();
    assert_eq!(parsed, serde_json::json!({"a": [1, null], "b": "x"}));

    opts.format = OutputFormat::Table;
    let artifact = runner::build_artifact(&opts).unwrap();
    assert_eq!(artifact.mime, "text/html");
    assert!(artifact.payload.contains("<li>a: <ol><li>1</li><li>null</li></ol></li>"));
}

#[test]
fn runner_rejects_json_for_tabular_tools() {
    let mut opts = ReportOptions::new();
    opts.tool = ToolKind::Cookies;
    opts.cookies = Some("a=1".to_string());
    opts.format = OutputFormat::Json;
    assert!(runner::build_artifact(&opts).is_err());
}
