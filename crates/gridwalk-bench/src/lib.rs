//! Benchmark profiles for the gridwalk toolkit.
//!
//! - [`terrain`]: deterministic pseudo-random elevation grid
//! - [`ascending_plateau`]: grid where every step right or down climbs
//! - [`layered_pipeline`]: chain of transform maps with many sub-ranges

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_range::{RangeError, RangePipeline, TransformMap};
use gridwalk_space::Grid;

/// A `rows x cols` grid of heights in `0..10`, fixed by `seed`.
pub fn terrain(rows: usize, cols: usize, seed: u64) -> Grid<u32> {
    let data = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let i = (r * cols + c) as u64 ^ seed;
                    (i.wrapping_mul(6364136223846793007) >> 33) as u32 % 10
                })
                .collect()
        })
        .collect();
    Grid::new(data)
}

/// A `size x size` grid holding `row + col`.
///
/// Every monotone lattice route from the origin is a strictly ascending
/// path, so a per-branch traversal enumerates all `C(2n-2, n-1)` of them.
pub fn ascending_plateau(size: usize) -> Grid<u32> {
    Grid::new(
        (0..size)
            .map(|r| (0..size).map(|c| (r + c) as u32).collect())
            .collect(),
    )
}

/// `stages` maps, each cutting `0..pieces * width` into `pieces` sub-ranges
/// sent to shuffled destination slots.
pub fn layered_pipeline(
    stages: usize,
    pieces: i64,
    width: i64,
) -> Result<RangePipeline, RangeError> {
    let mut pipeline = RangePipeline::new();
    for stage in 0..stages {
        let mut map = TransformMap::new(format!("s{stage}"), format!("s{}", stage + 1));
        for piece in 0..pieces {
            let slot = (piece * 7 + stage as i64 * 3) % pieces;
            map.add_range(slot * width, piece * width, width)?;
        }
        pipeline.push(map);
    }
    Ok(pipeline)
}
