// benches/render.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pagereport::collect::links;
use pagereport::report::table::render_table;
use pagereport::report::text::render_csv;
use pagereport::report::Report;

fn synthetic_doc(n: usize) -> String {
    let mut doc = String::from("<html><body>\n");
    for i in 0..n {
        doc.push_str(&format!(
            "<a href=\"/item/{i}\" title=\"Item {i}\" target=\"_self\">Item {i}, \"quoted\"</a>\n"
        ));
    }
    doc.push_str("</body></html>\n");
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = synthetic_doc(1000);
    let items = links::collect(&doc);
    let schema = links::schema();
    let report = Report::build(Some("Links"), &schema, &items).unwrap();

    c.bench_function("collect_links_1k", |b| {
        b.iter(|| {
            let found = links::collect(black_box(&doc));
            black_box(found.len())
        })
    });

    c.bench_function("render_csv_1k", |b| {
        b.iter(|| {
            let out = render_csv(black_box(&report));
            black_box(out.len())
        })
    });

    c.bench_function("render_table_1k", |b| {
        b.iter(|| {
            let out = render_table(black_box(&report), "links.csv");
            black_box(out.markup.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
