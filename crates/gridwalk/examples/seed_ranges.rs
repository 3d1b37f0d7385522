//! Lowest location for seed ranges pushed through an almanac of maps.
//!
//! Each map stage splits every range along its sub-range boundaries and the
//! pieces are consolidated before the next stage, so the work depends on
//! the number of boundaries rather than the number of seeds.
//!
//! Run with `RUST_LOG=gridwalk_range=debug` to see per-stage range counts.

use gridwalk::prelude::*;

const SEEDS: [(i64, i64); 2] = [(79, 14), (55, 13)];

/// `(source, dest, [(dest_start, source_start, length)])` per stage.
const STAGES: [(&str, &str, &[(i64, i64, i64)]); 7] = [
    ("seed", "soil", &[(50, 98, 2), (52, 50, 48)]),
    ("soil", "fertilizer", &[(0, 15, 37), (37, 52, 2), (39, 0, 15)]),
    (
        "fertilizer",
        "water",
        &[(49, 53, 8), (0, 11, 42), (42, 0, 7), (57, 7, 4)],
    ),
    ("water", "light", &[(88, 18, 7), (18, 25, 70)]),
    (
        "light",
        "temperature",
        &[(45, 77, 23), (81, 45, 19), (68, 64, 13)],
    ),
    ("temperature", "humidity", &[(0, 69, 1), (1, 0, 69)]),
    ("humidity", "location", &[(60, 56, 37), (56, 93, 4)]),
];

fn main() -> Result<(), RangeError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut pipeline = RangePipeline::new();
    for (source, dest, triples) in STAGES {
        let mut map = TransformMap::new(source, dest);
        for &(dest_start, source_start, length) in triples {
            map.add_range(dest_start, source_start, length)?;
        }
        tracing::info!(stage = %map.name(), sub_ranges = map.len(), "stage built");
        pipeline.push(map);
    }

    let seeds = SEEDS
        .iter()
        .map(|&(start, length)| Range::new(start, length))
        .collect::<Result<Vec<_>, _>>()?;

    let locations = pipeline.map_ranges(seeds.iter().copied());
    for range in &locations {
        tracing::info!(%range, "location range");
    }

    match locations.first() {
        Some(lowest) => println!("lowest location: {}", lowest.lower()),
        None => println!("no seeds"),
    }
    Ok(())
}
