use std::collections::{BTreeMap, BTreeSet};

use gridwalk_core::{DirectionSet, Point, Vector};
use gridwalk_space::{Grid, TraverseOptions, Visit, VisitDecision, VisitedScope};
use gridwalk_test_utils::assert_simple_path;
use gridwalk_test_utils::fixtures::{
    ascending_grid, trail_grid, ANTENNA_MAP, GUARD_MAP, TRAIL_MAP,
};

#[derive(Default)]
struct Hike {
    summits: BTreeSet<Point>,
    rating: usize,
    trails: Vec<Vec<Point>>,
}

fn climbs_by_one(visit: &Visit<'_, '_, u32>) -> bool {
    match (visit.path.last().and_then(|step| step.value), visit.value) {
        (None, Some(&height)) => height == 0,
        (Some(&previous), Some(&height)) => height == previous + 1,
        _ => false,
    }
}

fn hike_from(grid: &Grid<u32>, trailhead: Point, options: &TraverseOptions) -> Hike {
    grid.traverse(trailhead, options, Hike::default(), |hike, visit| {
        if !climbs_by_one(visit) {
            return VisitDecision::prune();
        }
        if visit.value == Some(&9) {
            hike.summits.insert(visit.point);
            hike.rating += 1;
            let mut trail = visit.path.points();
            trail.push(visit.point);
            hike.trails.push(trail);
            return VisitDecision::prune();
        }
        VisitDecision::expand()
    })
    .custom
}

#[test]
fn trailhead_scores_and_ratings() {
    let grid = trail_grid();
    let trailheads: Vec<Point> = grid.positions(|&h| h == 0).collect();
    assert_eq!(trailheads.len(), 9);

    for options in [TraverseOptions::bfs(), TraverseOptions::dfs()] {
        let hikes: Vec<Hike> = trailheads
            .iter()
            .map(|&head| hike_from(&grid, head, &options))
            .collect();
        let score: usize = hikes.iter().map(|h| h.summits.len()).sum();
        let rating: usize = hikes.iter().map(|h| h.rating).sum();
        assert_eq!(score, 36, "{:?}", options.mode());
        assert_eq!(rating, 81, "{:?}", options.mode());

        for trail in hikes.iter().flat_map(|h| &h.trails) {
            assert_eq!(trail.len(), 10);
            assert_simple_path(trail, DirectionSet::cardinal().as_slice());
        }
    }
}

#[test]
fn trail_map_parses_as_digits() {
    let parsed = Grid::digits_from_lines(TRAIL_MAP).unwrap();
    assert_eq!(parsed, trail_grid());
}

#[test]
fn ascending_grid_has_one_summit_and_six_routes() {
    let hike = ascending_grid().traverse(
        Point::ORIGIN,
        &TraverseOptions::bfs(),
        Hike::default(),
        |hike, visit| {
            if !climbs_by_one(visit) {
                return VisitDecision::prune();
            }
            if visit.value == Some(&4) {
                hike.summits.insert(visit.point);
                hike.rating += 1;
                return VisitDecision::prune();
            }
            VisitDecision::expand()
        },
    );
    assert_eq!(hike.custom.summits, BTreeSet::from([Point::new(2, 2)]));
    assert_eq!(hike.custom.rating, 6);
    assert!(!hike.stats.aborted);
}

#[test]
fn flood_fill_with_global_scope_counts_regions() {
    // Plots of the same letter that touch edge-on form one region.
    let garden = Grid::from_lines(["AAAA", "BBCD", "BBCC", "EEEC"]);
    let mut assigned: BTreeSet<Point> = BTreeSet::new();
    let mut regions = Vec::new();
    let options = TraverseOptions::bfs().with_scope(VisitedScope::Global);

    for (start, &plant) in &garden {
        if assigned.contains(&start) {
            continue;
        }
        let region = garden
            .traverse(start, &options, BTreeSet::new(), |cells, visit| {
                if visit.value != Some(&plant) {
                    return VisitDecision::prune();
                }
                cells.insert(visit.point);
                VisitDecision::expand()
            })
            .custom;
        assigned.extend(region.iter().copied());
        regions.push((plant, region.len()));
    }

    assert_eq!(
        regions,
        vec![('A', 4), ('B', 4), ('C', 4), ('D', 1), ('E', 3)]
    );
}

#[test]
fn antinodes_at_double_distance_and_along_lines() {
    let grid = Grid::from_lines(ANTENNA_MAP);
    let mut antennas: BTreeMap<char, Vec<Point>> = BTreeMap::new();
    for (point, &ch) in &grid {
        if ch != '.' {
            antennas.entry(ch).or_default().push(point);
        }
    }

    let mut doubled = BTreeSet::new();
    let mut resonant = BTreeSet::new();
    for points in antennas.values() {
        for &a in points {
            for &b in points {
                if a == b {
                    continue;
                }
                let step = a.vector_to(b);
                let beyond = b + step;
                if grid.bounds_contain(beyond) {
                    doubled.insert(beyond);
                }
                resonant.insert(b);
                resonant.extend(grid.ray(b, step).map(|(point, _)| point));
            }
        }
    }

    assert_eq!(doubled.len(), 14);
    assert_eq!(resonant.len(), 34);
}

#[test]
fn guard_patrol_covers_41_cells() {
    let grid = Grid::from_lines(GUARD_MAP);
    let mut guard = grid.find(|&ch| ch == '^').unwrap();
    let mut facing = Vector::N;
    let mut seen = BTreeSet::from([guard]);

    loop {
        let ahead = guard + facing;
        match grid.at(ahead) {
            None => break,
            Some(&'#') => facing = facing.turn_right(),
            Some(_) => {
                guard = ahead;
                seen.insert(guard);
            }
        }
    }

    assert_eq!(seen.len(), 41);
    assert_eq!(guard, Point::new(9, 7));
}
