use gridwalk_range::{consolidate_ranges, Range};
use gridwalk_test_utils::fixtures::{Almanac, ALMANAC};
use gridwalk_test_utils::{assert_consolidated, covered_points};

fn almanac() -> Almanac {
    Almanac::parse(ALMANAC).unwrap()
}

#[test]
fn single_seeds_lowest_location() {
    let almanac = almanac();
    let locations: Vec<i64> = almanac
        .seeds
        .iter()
        .map(|&seed| almanac.pipeline.map_value(seed))
        .collect();
    assert_eq!(locations, vec![82, 43, 86, 35]);

    let seeds = almanac.seed_values().unwrap();
    assert_eq!(almanac.pipeline.lowest(seeds), Some(35));
}

#[test]
fn seed_ranges_lowest_location() {
    let almanac = almanac();
    let seeds = almanac.seed_ranges().unwrap();
    assert_eq!(
        seeds,
        vec![Range::new(79, 14).unwrap(), Range::new(55, 13).unwrap()]
    );
    assert_eq!(almanac.pipeline.lowest(seeds), Some(46));
}

#[test]
fn pipeline_output_is_consolidated_and_length_preserving() {
    let almanac = almanac();
    let seeds = almanac.seed_ranges().unwrap();
    let locations = almanac.pipeline.map_ranges(seeds.clone());
    assert_consolidated(&locations);

    let total: i64 = locations.iter().map(Range::len).sum();
    assert_eq!(total, 14 + 13);

    // Every seed lands in the output set and nothing else does.
    let brute: std::collections::BTreeSet<i64> = seeds
        .iter()
        .flat_map(|r| r.lower()..=r.upper())
        .map(|seed| almanac.pipeline.map_value(seed))
        .collect();
    assert_eq!(covered_points(&locations), brute);
}

#[test]
fn stage_by_stage_split_matches_pipeline() {
    let almanac = almanac();
    let mut current = consolidate_ranges(almanac.seed_ranges().unwrap());
    for stage in almanac.pipeline.stages() {
        let split: Vec<Range> = current.iter().flat_map(|r| stage.map_range(*r)).collect();
        let before: i64 = current.iter().map(Range::len).sum();
        let after: i64 = split.iter().map(Range::len).sum();
        assert_eq!(before, after, "{}", stage.name());
        current = consolidate_ranges(split);
        assert_consolidated(&current);
    }
    assert_eq!(
        current,
        almanac.pipeline.map_ranges(almanac.seed_ranges().unwrap())
    );
}
