// src/generator/prune.rs

use log::debug;

use super::DungeonContext;
use crate::map::{Grid, TileKind};

/// Fills every dead end back in with wall until none are left. Returns the
/// number of cells removed.
pub fn remove_dead_ends(ctx: &mut DungeonContext) -> usize {
    let removed = prune_grid(&mut ctx.grid);
    ctx.stats.dead_ends_removed += removed;
    removed
}

/// Sweeps the interior repeatedly; each sweep walls up open cells with exactly
/// one open neighbour, and stops after a sweep that changed nothing.
pub fn prune_grid(grid: &mut Grid) -> usize {
    let mut removed = 0;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut done = true;
        for p in grid.interior_points() {
            if !grid.is_open(p) || grid.open_neighbors(p) != 1 {
                continue;
            }
            grid.set_tile(p, TileKind::Wall, None);
            removed += 1;
            done = false;
        }
        if done {
            break;
        }
    }
    debug!("Removed {} dead-end cells in {} passes", removed, passes);
    removed
}
