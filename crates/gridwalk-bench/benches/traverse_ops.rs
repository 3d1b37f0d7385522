//! Criterion micro-benchmarks for grid traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridwalk_bench::{ascending_plateau, terrain};
use gridwalk_core::Point;
use gridwalk_space::{TraverseOptions, VisitDecision, VisitedScope};

/// Benchmark: flood fill of a 100x100 grid with a global visited set.
fn bench_flood_fill_global_10k(c: &mut Criterion) {
    let grid = terrain(100, 100, 7);
    let options = TraverseOptions::bfs().with_scope(VisitedScope::Global);

    c.bench_function("flood_fill_global_10k", |b| {
        b.iter(|| {
            let result = grid.traverse(Point::ORIGIN, &options, 0usize, |n, _| {
                *n += 1;
                VisitDecision::expand()
            });
            black_box(result.custom);
        });
    });
}

/// Benchmark: enumerate every ascending route across a 9x9 plateau.
///
/// C(16, 8) = 12870 complete routes, each a separate branch sharing its
/// prefix with its siblings.
fn bench_ascending_routes_per_branch(c: &mut Criterion) {
    let grid = ascending_plateau(9);
    let summit = Point::new(8, 8);

    for options in [TraverseOptions::bfs(), TraverseOptions::dfs()] {
        let name = format!("ascending_routes_{:?}", options.mode()).to_lowercase();
        c.bench_function(&name, |b| {
            b.iter(|| {
                let result = grid.traverse(Point::ORIGIN, &options, 0u64, |routes, visit| {
                    let climbs = match (visit.path.last().and_then(|s| s.value), visit.value) {
                        (None, Some(_)) => true,
                        (Some(&prev), Some(&h)) => h == prev + 1,
                        _ => false,
                    };
                    if !climbs {
                        return VisitDecision::prune();
                    }
                    if visit.point == summit {
                        *routes += 1;
                        return VisitDecision::prune();
                    }
                    VisitDecision::expand()
                });
                black_box(result.custom);
            });
        });
    }
}

/// Benchmark: trailhead scoring on pseudo-random terrain.
fn bench_trailheads_terrain(c: &mut Criterion) {
    let grid = terrain(50, 50, 42);
    let trailheads: Vec<Point> = grid.positions(|&h| h == 0).collect();
    let options = TraverseOptions::dfs();

    c.bench_function("trailheads_terrain_2500", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for &head in &trailheads {
                let result = grid.traverse(head, &options, 0usize, |peaks, visit| {
                    let climbs = match (visit.path.last().and_then(|s| s.value), visit.value) {
                        (None, Some(_)) => true,
                        (Some(&prev), Some(&h)) => h == prev + 1,
                        _ => false,
                    };
                    if !climbs {
                        return VisitDecision::prune();
                    }
                    if visit.value == Some(&9) {
                        *peaks += 1;
                        return VisitDecision::prune();
                    }
                    VisitDecision::expand()
                });
                total += result.custom;
            }
            black_box(total);
        });
    });
}

criterion_group!(
    benches,
    bench_flood_fill_global_10k,
    bench_ascending_routes_per_branch,
    bench_trailheads_terrain
);
criterion_main!(benches);
