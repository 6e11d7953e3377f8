// src/generator/connect.rs

use log::{debug, warn};
use rand::Rng;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use super::DungeonContext;
use crate::map::{Grid, RegionId, TileKind};
use crate::utils::Point2D;

type Merges = QuickUnionUf<UnionBySize>;

/// A wall cell that borders more than one region, with the regions seen on
/// each open side. A region touching from two sides is listed twice.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Connector {
    pos: Point2D,
    regions: Vec<RegionId>,
}

/// What a call to [`connect_regions`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectOutcome {
    /// Doorways opened to merge two or more regions.
    pub doorways: usize,
    /// Redundant connectors opened anyway to add loops.
    pub extra_connectors: usize,
    /// Regions still apart when no connector was left to open.
    pub unconnected: usize,
}

/// Opens doorways between regions until every region carved so far is joined
/// into one.
///
/// Connectors are picked at random. After each pick, connectors right next to
/// the new doorway are dropped so doorways do not cluster, and connectors
/// that no longer join separate regions are dropped too, each opened first
/// with probability `extra_connector_chance`.
pub fn connect_regions(ctx: &mut DungeonContext) -> ConnectOutcome {
    let DungeonContext {
        config,
        rng,
        grid,
        regions,
        stats,
        ..
    } = ctx;

    let mut outcome = ConnectOutcome::default();
    let region_count = regions.count();
    let mut merged: Merges = UnionFind::new(region_count);
    let mut open = live_regions(grid, region_count);

    let mut connectors = find_connectors(grid, &mut merged);
    debug!(
        "Connecting {} regions through {} candidate connectors",
        open,
        connectors.len()
    );

    while open > 1 {
        if connectors.is_empty() {
            connectors = find_connectors(grid, &mut merged);
            if connectors.is_empty() {
                warn!("{} regions could not be connected: no connectors left", open);
                outcome.unconnected = open;
                break;
            }
            debug!("Rediscovered {} connectors", connectors.len());
        }

        let picked = connectors[rng.random_range(0..connectors.len())].clone();

        let dest = merged.find(picked.regions[0]);
        for &source in &picked.regions[1..] {
            if merged.union(dest, source) {
                open -= 1;
            }
        }
        grid.set_tile(picked.pos, TileKind::Doorway, Some(dest));
        outcome.doorways += 1;

        connectors.retain(|connector| {
            if connector.pos.distance_to(&picked.pos) < 2.0 {
                return false;
            }

            let roots = resolve(&mut merged, &connector.regions);
            if roots.len() > 1 {
                return true;
            }

            if rng.random_bool(config.extra_connector_chance) {
                grid.set_tile(connector.pos, TileKind::Doorway, Some(roots[0]));
                outcome.extra_connectors += 1;
            }
            false
        });
    }

    debug!(
        "Opened {} doorways and {} extra connectors",
        outcome.doorways, outcome.extra_connectors
    );
    stats.doorways += outcome.doorways;
    stats.extra_connectors += outcome.extra_connectors;
    stats.unconnected_regions = outcome.unconnected;
    outcome
}

/// Number of distinct regions that still own at least one open cell.
fn live_regions(grid: &Grid, region_count: usize) -> usize {
    let mut seen = vec![false; region_count];
    for p in grid.points().filter(|p| grid.is_open(*p)) {
        if let Some(region) = grid.region(p) {
            seen[region] = true;
        }
    }
    seen.iter().filter(|s| **s).count()
}

/// Interior wall cells whose open neighbours resolve to two or more distinct
/// merged regions.
fn find_connectors(grid: &Grid, merged: &mut Merges) -> Vec<Connector> {
    let mut connectors = Vec::new();
    for pos in grid.interior_points() {
        if !grid.is_wall(pos) {
            continue;
        }

        let regions: Vec<RegionId> = pos
            .neighbors()
            .filter(|n| grid.is_open(*n))
            .filter_map(|n| grid.region(n))
            .collect();
        if resolve(merged, &regions).len() < 2 {
            continue;
        }

        connectors.push(Connector { pos, regions });
    }
    connectors
}

/// The distinct merged representatives of `regions`, in ascending order.
fn resolve(merged: &mut Merges, regions: &[RegionId]) -> Vec<RegionId> {
    let mut roots: Vec<RegionId> = regions.iter().map(|&r| merged.find(r)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::{add_mazes, place_rooms};
    use crate::map::RoomTemplate;

    fn carved(config: GeneratorConfig) -> DungeonContext {
        let mut ctx = DungeonContext::new(config).unwrap();
        place_rooms(&mut ctx).unwrap();
        add_mazes(&mut ctx);
        ctx
    }

    /// Counts the open cells reachable from the first open cell.
    fn flood_fill(grid: &Grid) -> usize {
        let Some(start) = grid.points().find(|p| grid.is_open(*p)) else {
            return 0;
        };
        let mut seen = vec![false; grid.tiles().len()];
        let mut stack = vec![start];
        let mut reached = 0;
        while let Some(p) = stack.pop() {
            let Some(i) = grid.index(p) else { continue };
            if seen[i] || !grid.is_open(p) {
                continue;
            }
            seen[i] = true;
            reached += 1;
            stack.extend(p.neighbors());
        }
        reached
    }

    fn open_cells(grid: &Grid) -> usize {
        grid.tiles().iter().filter(|t| t.is_open()).count()
    }

    #[test]
    fn test_connectors_border_two_regions() {
        let mut grid = Grid::new(7, 3);
        grid.set_tile(Point2D::new(1, 1), TileKind::Floor, Some(0));
        grid.set_tile(Point2D::new(3, 1), TileKind::Floor, Some(1));
        grid.set_tile(Point2D::new(5, 1), TileKind::Floor, Some(1));
        let mut merged: Merges = UnionFind::new(2);

        let connectors = find_connectors(&grid, &mut merged);
        assert_eq!(
            connectors,
            vec![Connector {
                pos: Point2D::new(2, 1),
                regions: vec![1, 0],
            }]
        );

        // Once the two regions are merged nothing is left to connect.
        merged.union(0, 1);
        assert!(find_connectors(&grid, &mut merged).is_empty());
    }

    #[test]
    fn test_all_regions_end_up_connected() {
        for seed in 0..8 {
            let config = GeneratorConfig::new(41, 25)
                .with_seed(seed)
                .with_room_tries(100)
                .with_templates(vec![RoomTemplate::new(3, 3), RoomTemplate::new(7, 5)]);
            let mut ctx = carved(config);
            assert!(ctx.region_count() > 1);

            let outcome = connect_regions(&mut ctx);
            assert_eq!(outcome.unconnected, 0);
            assert!(outcome.doorways >= 1);
            assert_eq!(
                ctx.grid().count(TileKind::Doorway),
                outcome.doorways + outcome.extra_connectors
            );
            assert_eq!(flood_fill(ctx.grid()), open_cells(ctx.grid()));
        }
    }

    #[test]
    fn test_zero_chance_adds_no_loops() {
        let config = GeneratorConfig::new(31, 31)
            .with_seed(9)
            .with_room_tries(50)
            .with_extra_connector_chance(0.0)
            .with_templates(vec![RoomTemplate::new(5, 5)]);
        let mut ctx = carved(config);
        let outcome = connect_regions(&mut ctx);
        assert_eq!(outcome.extra_connectors, 0);
    }

    #[test]
    fn test_full_chance_adds_loops() {
        let config = GeneratorConfig::new(41, 41)
            .with_seed(9)
            .with_room_tries(80)
            .with_extra_connector_chance(1.0)
            .with_templates(vec![RoomTemplate::new(5, 5)]);
        let mut ctx = carved(config);
        let outcome = connect_regions(&mut ctx);
        assert!(outcome.extra_connectors > 0);
        assert_eq!(flood_fill(ctx.grid()), open_cells(ctx.grid()));
    }

    #[test]
    fn test_single_region_needs_no_doorway() {
        let config = GeneratorConfig::new(5, 5)
            .with_seed(1)
            .with_templates(vec![RoomTemplate::new(9, 9)]);
        let mut ctx = carved(config);
        assert_eq!(ctx.region_count(), 1);
        assert_eq!(connect_regions(&mut ctx), ConnectOutcome::default());
        assert_eq!(ctx.grid().count(TileKind::Doorway), 0);
    }

    #[test]
    fn test_empty_grid_is_a_no_op() {
        let mut ctx = DungeonContext::new(GeneratorConfig::new(9, 9).with_seed(0)).unwrap();
        assert_eq!(connect_regions(&mut ctx), ConnectOutcome::default());
    }

    #[test]
    fn test_rooms_without_corridors_report_unconnected() {
        let config = GeneratorConfig::new(41, 41)
            .with_seed(3)
            .with_room_tries(300)
            .with_templates(vec![RoomTemplate::new(3, 3), RoomTemplate::new(5, 5)]);
        let mut ctx = DungeonContext::new(config).unwrap();
        let placed = place_rooms(&mut ctx).unwrap();
        assert!(placed > 2);

        let outcome = connect_regions(&mut ctx);
        assert!(outcome.unconnected > 0);
        assert!(outcome.unconnected <= placed);
        assert_eq!(ctx.stats().unconnected_regions, outcome.unconnected);
        assert!(flood_fill(ctx.grid()) < open_cells(ctx.grid()));
    }

    #[test]
    fn test_connectors_are_found_again_after_clustering_filter() {
        let mut ctx = DungeonContext::new(GeneratorConfig::new(7, 5).with_seed(0)).unwrap();
        // Three single cells. (2, 1) joins the first two, (3, 2) the last
        // two, and the two connectors sit diagonally next to each other.
        for (x, y) in [(1, 1), (3, 1), (3, 3)] {
            let region = ctx.regions.start_region();
            ctx.grid.set_tile(Point2D::new(x, y), TileKind::Floor, Some(region));
        }

        let outcome = connect_regions(&mut ctx);
        assert_eq!(outcome.doorways, 2);
        assert_eq!(outcome.extra_connectors, 0);
        assert_eq!(outcome.unconnected, 0);
        assert_eq!(ctx.grid().tile(Point2D::new(2, 1)), Some(TileKind::Doorway));
        assert_eq!(ctx.grid().tile(Point2D::new(3, 2)), Some(TileKind::Doorway));
        assert_eq!(flood_fill(ctx.grid()), open_cells(ctx.grid()));
    }
}
