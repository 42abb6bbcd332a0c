use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mdkit::{bracket::find_closing_bracket, regex::edit, table::split_cells};

pub fn criterion_benchmark(c: &mut Criterion) {
    {
        let row = r"| Name | Description \| escaped | Default |";
        assert_eq!(split_cells(row, 5)[2], "Description | escaped");
        c.bench_function("split_cells/row", |b| {
            b.iter(|| split_cells(black_box(row), 5))
        });

        let wide = "| a ".repeat(64);
        c.bench_function("split_cells/wide", |b| {
            b.iter(|| split_cells(black_box(&wide), 65))
        });
    }
    {
        let link = "link text [with (nested) brackets]](https://example.com)";
        assert_eq!(find_closing_bracket(link, ['[', ']']), Some(34));
        c.bench_function("find_closing_bracket/hit", |b| {
            b.iter(|| find_closing_bracket(black_box(link), ['[', ']']))
        });

        c.bench_function("find_closing_bracket/fast_miss", |b| {
            b.iter(|| find_closing_bracket(black_box("no closing bracket at all"), ['[', ']']))
        });
    }
    {
        c.bench_function("edit/compose", |b| {
            b.iter(|| {
                edit(black_box(r"^( {0,3}bull)( [^\n]+?)?(?:\n|$)"))
                    .replace("bull", r"(?:[*+-]|\d{1,9}[.)])")
                    .into_source()
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
