//! Benchmarks for wrapping and layout with fixed-advance metrics

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rmdialog_core::geometry::Size;
use rmdialog_text::{
    Alignment, HorizontalAlign, IconSide, MonospaceMetrics, TextMetrics, VerticalAlign, Viewport,
    layout, wrap,
};

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    for repeats in [1, 10, 100] {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            let mut metrics = MonospaceMetrics::new(12, 24);
            b.iter(|| black_box(wrap(black_box(text), 676, |s| metrics.text_width(s))));
        });
    }

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let viewport = Viewport {
        size: Size::new(800, 600),
        padding: 20,
        icon: Size::new(64, 64),
        side: IconSide::Left,
    };
    let mut metrics = MonospaceMetrics::new(12, 24);
    let text = "Lorem ipsum dolor sit amet. ".repeat(20);
    let lines = wrap(&text, viewport.text_max_width(), |s| metrics.text_width(s)).unwrap();
    let alignment = Alignment::new(HorizontalAlign::Center, VerticalAlign::Middle);

    c.bench_function("layout", |b| {
        b.iter(|| black_box(layout(&lines, &mut metrics, &viewport, alignment)));
    });
}

criterion_group!(benches, bench_wrap, bench_layout);
criterion_main!(benches);
