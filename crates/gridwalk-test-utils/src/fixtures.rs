//! Small puzzle inputs with known answers.
//!
//! - [`TRAIL_MAP`]: topographic map; trailheads are `0`, summits `9`.
//!   Summed trailhead score 36, summed rating 81.
//! - [`ANTENNA_MAP`]: antenna frequencies; 14 antinodes at double distance,
//!   34 along whole lines.
//! - [`GUARD_MAP`]: guard `^` turning right at `#`; visits 41 cells.
//! - [`ALMANAC`]: seed almanac; lowest location 35 for single seeds and 46
//!   for seed ranges.

use std::num::ParseIntError;

use gridwalk_range::{Range, RangeError, RangePipeline, TransformMap};
use gridwalk_space::Grid;

pub const TRAIL_MAP: [&str; 8] = [
    "89010123", "78121874", "87430965", "96549874", "45678903", "32019012", "01329801",
    "10456732",
];

pub const ANTENNA_MAP: [&str; 12] = [
    "............",
    "........0...",
    ".....0......",
    ".......0....",
    "....0.......",
    "......A.....",
    "............",
    "............",
    "........A...",
    ".........A..",
    "............",
    "............",
];

pub const GUARD_MAP: [&str; 10] = [
    "....#.....",
    ".........#",
    "..........",
    "..#.......",
    ".......#..",
    "..........",
    ".#..^.....",
    "........#.",
    "#.........",
    "......#...",
];

pub const ALMANAC: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

/// The 3x3 grid whose values climb by one along every step right or down.
pub fn ascending_grid() -> Grid<u32> {
    Grid::new(vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]])
}

/// [`TRAIL_MAP`] as a digit grid.
pub fn trail_grid() -> Grid<u32> {
    Grid::new(
        TRAIL_MAP
            .iter()
            .map(|line| line.chars().filter_map(|ch| ch.to_digit(10)).collect())
            .collect(),
    )
}

/// Errors from reading almanac text.
#[derive(Debug, thiserror::Error)]
pub enum AlmanacError {
    #[error("line {line} not understood: {text:?}")]
    UnexpectedLine { line: usize, text: String },
    #[error("mapping line {line} before any map header")]
    MappingWithoutMap { line: usize },
    #[error("missing seeds line")]
    MissingSeeds,
    #[error("invalid number: {0}")]
    Number(#[from] ParseIntError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Seeds plus the chain of maps from seed to location.
#[derive(Clone, Debug)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub pipeline: RangePipeline,
}

impl Almanac {
    /// Parse `seeds: ...` followed by `a-to-b map:` blocks of
    /// `dest source length` lines.
    pub fn parse(text: &str) -> Result<Self, AlmanacError> {
        let mut seeds = None;
        let mut pipeline = RangePipeline::new();
        let mut current: Option<TransformMap> = None;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix("seeds:") {
                seeds = Some(numbers(rest)?);
            } else if let Some(title) = line.strip_suffix(" map:") {
                let (source, dest) =
                    title
                        .split_once("-to-")
                        .ok_or_else(|| AlmanacError::UnexpectedLine {
                            line: line_no,
                            text: line.to_string(),
                        })?;
                if let Some(done) = current.replace(TransformMap::new(source, dest)) {
                    pipeline.push(done);
                }
            } else {
                let map = current
                    .as_mut()
                    .ok_or(AlmanacError::MappingWithoutMap { line: line_no })?;
                match numbers(line)?.as_slice() {
                    &[dest, source, length] => map.add_range(dest, source, length)?,
                    _ => {
                        return Err(AlmanacError::UnexpectedLine {
                            line: line_no,
                            text: line.to_string(),
                        })
                    }
                }
            }
        }
        pipeline.extend(current);

        Ok(Self {
            seeds: seeds.ok_or(AlmanacError::MissingSeeds)?,
            pipeline,
        })
    }

    /// Each seed as a single-value range.
    pub fn seed_values(&self) -> Result<Vec<Range>, RangeError> {
        self.seeds.iter().map(|&seed| Range::new(seed, 1)).collect()
    }

    /// Seeds read as `(start, length)` pairs; a trailing odd seed has
    /// length 1.
    pub fn seed_ranges(&self) -> Result<Vec<Range>, RangeError> {
        self.seeds
            .chunks(2)
            .map(|pair| Range::new(pair[0], pair.get(1).copied().unwrap_or(1)))
            .collect()
    }
}

fn numbers(text: &str) -> Result<Vec<i64>, ParseIntError> {
    text.split_whitespace().map(str::parse).collect()
}
