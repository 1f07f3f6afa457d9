// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use vocab_scrape::config::{consts::*, DelimiterSpec};
use vocab_scrape::core::{extract_entry, markup::strip_markup};

fn sample_page() -> String {
    // Roughly page-sized filler so the marker search has real work to do.
    let filler = "<div class=\"menu\"><a href=\"/en/x\">link</a></div>\n".repeat(2_000);
    vocab_scrape::join!(
        "<html><head><title>chat</title></head><body>",
        &filler,
        WORD_TYPE_TAG, "nom masculin", END_WORD_TYPE_TAG_2,
        &filler,
        DEF_TAG, "<span class=\"Indicateur\">animal</span> <b>cat</b>, a small feline&nbsp;: le chat dort.", END_DEF_TAG,
        &filler,
        "</body></html>"
    )
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page();
    let delims = DelimiterSpec::default();
    let def = "<i>a</i> <b>b</b> <em>c</em> ".repeat(200);

    c.bench_function("extract_entry", |b| {
        b.iter(|| {
            let e = extract_entry("chat", black_box(&page), &delims);
            black_box(e.definition.len())
        })
    });

    c.bench_function("strip_markup", |b| {
        b.iter(|| black_box(strip_markup(black_box(&def))).len())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
