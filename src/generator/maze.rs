// src/generator/maze.rs
//! Fills the space rooms left behind with corridors, using the "growing tree"
//! algorithm from <http://www.astrolog.org/labyrnth/algrithm.htm>.
//!
//! Corridors live on the odd lattice: every cell with odd x and odd y is a
//! candidate, and the cell between two lattice neighbours is opened when the
//! carver moves between them. That keeps every corridor one cell wide with a
//! wall between parallel runs.

use log::debug;
use rand::Rng;

use super::{DungeonContext, RegionAllocator};
use crate::map::{Grid, TileKind};
use crate::utils::{Direction, Point2D};

/// Grows a maze from every lattice cell that is still wall, in row-major
/// order. Returns the number of maze regions started.
pub fn add_mazes(ctx: &mut DungeonContext) -> usize {
    let DungeonContext {
        config,
        rng,
        grid,
        regions,
        stats,
        ..
    } = ctx;

    let (width, height) = (grid.width() as i32, grid.height() as i32);
    let mut mazes = 0;
    for y in (1..height).step_by(2) {
        for x in (1..width).step_by(2) {
            let start = Point2D::new(x, y);
            if !grid.is_wall(start) {
                continue;
            }
            grow_maze(grid, regions, rng, config.winding_percent, start);
            mazes += 1;
        }
    }

    debug!("Grew {} maze regions", mazes);
    stats.maze_regions += mazes;
    mazes
}

fn grow_maze(
    grid: &mut Grid,
    regions: &mut RegionAllocator,
    rng: &mut impl Rng,
    winding_percent: u32,
    start: Point2D,
) {
    let region = regions.start_region();
    grid.set_tile(start, TileKind::Floor, Some(region));

    let mut cells = vec![start];
    let mut last_dir: Option<Direction> = None;

    while let Some(&cell) = cells.last() {
        let unmade: Vec<Direction> = Direction::ALL
            .iter()
            .copied()
            .filter(|dir| can_carve(grid, cell, *dir))
            .collect();

        if unmade.is_empty() {
            // Dead branch; back up and let the next cell pick freely.
            cells.pop();
            last_dir = None;
            continue;
        }

        let dir = match last_dir {
            Some(last) if unmade.contains(&last) && rng.random_range(0..100) > winding_percent => {
                last
            }
            _ => unmade[rng.random_range(0..unmade.len())],
        };

        grid.set_tile(cell.step(dir, 1), TileKind::Floor, Some(region));
        let next = cell.step(dir, 2);
        grid.set_tile(next, TileKind::Floor, Some(region));
        cells.push(next);
        last_dir = Some(dir);
    }
}

/// A move is allowed when the lattice cell two steps away is wall, and so is
/// the cell just past it. The look-ahead stops a corridor from running
/// flush against a room or another passage.
fn can_carve(grid: &Grid, from: Point2D, dir: Direction) -> bool {
    grid.is_wall(from.step(dir, 2)) && grid.is_wall(from.step(dir, 3))
}
