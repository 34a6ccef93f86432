use criterion::{Criterion, criterion_group, criterion_main};
use pegmark_engine::{parse, render, to_html};
mod common;

fn bench_to_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse", |b| {
        b.iter(|| parse(std::hint::black_box(&content)).unwrap());
    });

    let tree = parse(&content).unwrap();
    group.bench_function("render", |b| {
        b.iter(|| render(std::hint::black_box(&tree)).unwrap());
    });

    group.bench_function("to_html", |b| {
        b.iter(|| to_html(std::hint::black_box(&content)).unwrap());
    });

    let nested = common::generate_nested_list(4, 4);
    group.bench_function("nested_lists", |b| {
        b.iter(|| to_html(std::hint::black_box(&nested)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_to_html);
criterion_main!(benches);
