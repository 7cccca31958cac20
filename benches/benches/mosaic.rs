// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use std::sync::Arc;
use understory_mosaic::{
    Block, BlockSeparators, Direction, LayoutConfig, MosaicLayout, Pattern, StaticSource,
    StripSupplementary, UnitBlock, build,
};

const SIDE: f64 = 375.0;

fn gallery_source() -> StaticSource {
    let feature: Arc<dyn Block> = Arc::new(UnitBlock::new(
        Direction::Vertical,
        [
            Rect::new(0.0, 0.0, 2.0 / 3.0, 2.0 / 3.0),
            Rect::new(2.0 / 3.0, 0.0, 1.0, 1.0 / 3.0),
            Rect::new(2.0 / 3.0, 1.0 / 3.0, 1.0, 2.0 / 3.0),
        ],
    ));
    let grid: Arc<dyn Block> = Arc::new(UnitBlock::grid(Direction::Vertical, 3));
    let pattern = Pattern::builder()
        .block(feature)
        .block(grid)
        .repeat_last()
        .separators(BlockSeparators::new(8.0, 2.0, 8.0))
        .build()
        .expect("valid pattern");
    StaticSource::new(pattern)
        .with_section_separator(16.0)
        .with_header(0, Arc::new(StripSupplementary::new(Direction::Vertical, 44.0)))
}

fn dimension(sections: usize, rows: usize) -> Vec<usize> {
    // Every fourth section is empty to exercise the separator resolver.
    (0..sections)
        .map(|section| if section % 4 == 3 { 0 } else { rows })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mosaic/build");
    let source = gallery_source();
    let config = LayoutConfig::vertical(SIDE);

    for (sections, rows) in [(1_usize, 1_000_usize), (100, 100), (1_000, 10)] {
        let dimension = dimension(sections, rows);
        let cells: usize = dimension.iter().sum();
        group.throughput(Throughput::Elements(cells as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &dimension,
            |b, dimension| {
                b.iter(|| black_box(build(dimension, &source, &config).expect("layout")));
            },
        );
    }
    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let source = gallery_source();
    let dimension = dimension(100, 100);
    let mut layout = MosaicLayout::new(LayoutConfig::vertical(SIDE));
    layout.layout(&dimension, &source).expect("layout");

    c.bench_function("mosaic/cached_layout", |b| {
        b.iter(|| {
            let result = layout.layout(&dimension, &source).expect("layout");
            black_box(result.content_extent());
        });
    });
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("mosaic/query");
    let source = gallery_source();
    let result = build(&dimension(100, 100), &source, &LayoutConfig::vertical(SIDE))
        .expect("layout");
    let extent = result.content_extent();

    // A phone-sized viewport scrolled to the middle.
    let viewport = Rect::new(0.0, extent / 2.0, SIDE, extent / 2.0 + 812.0);
    group.bench_function("intersecting_viewport", |b| {
        b.iter(|| black_box(result.intersecting(black_box(viewport)).count()));
    });

    group.bench_function("hit_test_point", |b| {
        b.iter(|| black_box(result.hit_test_point(black_box(viewport.center()))));
    });

    group.bench_function("cell", |b| {
        b.iter(|| black_box(result.cell(black_box(50), black_box(73))));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_cached, bench_queries);
criterion_main!(benches);
