// src/generator/rooms.rs

use log::debug;
use rand::Rng;

use super::DungeonContext;
use crate::error::GenerateError;
use crate::map::{PlacedRoom, TileKind};
use crate::utils::Rect;

/// Drops rooms onto the grid `room_tries` times, skipping any try whose
/// bordered rectangle would touch a room already placed. Returns how many
/// rooms this call placed.
pub fn place_rooms(ctx: &mut DungeonContext) -> Result<usize, GenerateError> {
    let DungeonContext {
        config,
        rng,
        grid,
        regions,
        rooms,
        stats,
        ..
    } = ctx;

    let templates = &config.room_templates;
    if templates.is_empty() {
        return Err(GenerateError::EmptyRoomCatalog);
    }

    let mut placed = 0;
    let mut rejected = 0;
    for _ in 0..config.room_tries {
        let index = rng.random_range(0..templates.len());
        let template = &templates[index];

        let Some(x) = odd_anchor(rng, grid.width(), template.width) else {
            rejected += 1;
            continue;
        };
        let Some(y) = odd_anchor(rng, grid.height(), template.height) else {
            rejected += 1;
            continue;
        };

        let room = Rect::new(x, y, template.width, template.height);
        let border = room.grow(1);
        if rooms.iter().any(|other| other.bounds.overlaps(&border)) {
            rejected += 1;
            continue;
        }

        let region = regions.start_region();
        for p in room.points() {
            grid.set_tile(p, TileKind::Floor, Some(region));
        }
        rooms.push(PlacedRoom {
            template: index,
            bounds: room,
        });
        placed += 1;
    }

    debug!("Placed {} rooms, rejected {} tries", placed, rejected);
    stats.rooms_placed += placed;
    stats.room_tries_rejected += rejected;
    Ok(placed)
}

/// Picks an odd coordinate that keeps a room of `size` at least one cell
/// away from the far edge. `None` if the room cannot fit at all.
fn odd_anchor(rng: &mut impl Rng, extent: usize, size: i32) -> Option<i32> {
    let slots = (extent as i32 - size) / 2;
    if slots < 1 {
        return None;
    }
    Some(rng.random_range(0..slots) * 2 + 1)
}
