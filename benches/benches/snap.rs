// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use std::time::Duration;
use understory_snap::{
    Axis, SnapConfig, SnapDirection, SnapEdge, SnapGeometry, SnapLocations, SnapResolver,
    resolve_offset,
};

/// Raw, unsorted locations with a duplicate every eighth entry.
fn raw_locations(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let slot = if i % 8 == 7 { i - 1 } else { i };
            ((slot * 7_919) % len) as f64 * 120.0
        })
        .collect()
}

fn bench_build_locations(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/locations_new");

    for len in [16usize, 256, 4_096] {
        let raw = raw_locations(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &raw, |b, raw| {
            b.iter_batched(
                || raw.clone(),
                |raw| black_box(SnapLocations::new(raw)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_resolve_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/resolve_offset");
    group.measurement_time(Duration::from_secs(3));

    // Hypothesis: resolution is dominated by the bracketing search, so cost
    // should grow logarithmically with the number of locations.
    for len in [16usize, 256, 4_096] {
        let locations = SnapLocations::new(raw_locations(len));
        let extent = locations.last() + 1_000.0;
        let bounds = Size::new(320.0, 240.0);
        let content = Size::new(extent, 240.0);
        let requests: Vec<Point> = (0..64)
            .map(|i| Point::new(extent * f64::from(i) / 64.0, 0.0))
            .collect();

        group.throughput(Throughput::Elements(requests.len() as u64));
        for edge in [SnapEdge::Min, SnapEdge::Mid, SnapEdge::Max] {
            group.bench_with_input(
                BenchmarkId::new(format!("{edge:?}"), len),
                &requests,
                |b, requests| {
                    b.iter(|| {
                        for &requested in requests {
                            black_box(resolve_offset(
                                black_box(requested),
                                bounds,
                                content,
                                edge,
                                Axis::Horizontal,
                                &locations,
                            ));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_drag_end(c: &mut Criterion) {
    let locations = SnapLocations::from_extents(std::iter::repeat_n(180.0, 500), 12.0);
    let extent = locations.last() + 180.0;
    let resolver = SnapResolver::new(SnapConfig::new(SnapEdge::Mid, SnapDirection::Automatic))
        .with_locations(locations);
    let viewport = SnapGeometry::new(Size::new(400.0, 300.0), Size::new(extent, 300.0));

    c.bench_function("snap/on_drag_end/automatic_axis", |b| {
        b.iter(|| {
            black_box(resolver.on_drag_end(
                &viewport,
                black_box(Vec2::new(2.5, 0.0)),
                black_box(Point::new(extent / 3.0, 0.0)),
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_build_locations,
    bench_resolve_offset,
    bench_drag_end
);
criterion_main!(benches);
