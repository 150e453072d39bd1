//! Performance measurement for geometric transforms and clipped region fills

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use cellgrid::{Grid, GridRegion};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Measures rotation cost as the grid side length grows
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotated_clockwise");

    for side in &[64, 256, 1024] {
        let Ok(grid) = Grid::new(*side, *side, 0_u32) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| black_box(&grid).rotated_clockwise());
        });
    }

    group.finish();
}

/// Measures fill cost for a region half inside and half outside the grid
fn bench_clipped_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("clipped_fill");

    for side in &[64, 256, 1024] {
        let Ok(grid) = Grid::new(*side, *side, 0_u32) else {
            group.finish();
            return;
        };
        let overhang = GridRegion::new(-side / 2, -side / 2, *side as usize, *side as usize);

        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| {
                let mut target = grid.clone();
                target.fill(black_box(1), overhang);
                target
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rotation, bench_clipped_fill);
criterion_main!(benches);
