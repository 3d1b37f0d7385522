//! Trailhead scoring on a topographic map.
//!
//! A trail starts at height 0, climbs by exactly one per step and ends at
//! height 9. A trailhead's score is the number of distinct summits it
//! reaches; its rating is the number of distinct trails.
//!
//! Run with `RUST_LOG=gridwalk_space=debug` to see per-traversal summaries.

use std::collections::BTreeSet;

use gridwalk::prelude::*;

const MAP: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

#[derive(Default)]
struct Hike {
    summits: BTreeSet<Point>,
    trails: usize,
}

fn main() -> Result<(), GridError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let grid = Grid::digits_from_lines(MAP.lines())?;
    tracing::info!(rows = grid.rows(), cols = grid.cols(), "map loaded");

    let options = TraverseOptions::dfs();
    let (mut score, mut rating) = (0, 0);
    for trailhead in grid.positions(|&h| h == 0) {
        let result = grid.traverse(trailhead, &options, Hike::default(), |hike, visit| {
            let climbs = match (visit.path.last().and_then(|s| s.value), visit.value) {
                (None, Some(&h)) => h == 0,
                (Some(&prev), Some(&h)) => h == prev + 1,
                _ => false,
            };
            if !climbs {
                return VisitDecision::prune();
            }
            if visit.value == Some(&9) {
                hike.summits.insert(visit.point);
                hike.trails += 1;
                return VisitDecision::prune();
            }
            VisitDecision::expand()
        });
        let hike = result.custom;
        tracing::info!(
            %trailhead,
            score = hike.summits.len(),
            rating = hike.trails,
            visits = result.stats.visits,
            "trailhead explored"
        );
        score += hike.summits.len();
        rating += hike.trails;
    }

    println!("total score:  {score}");
    println!("total rating: {rating}");
    Ok(())
}
