// src/map/tile.rs
use serde::{Deserialize, Serialize};

/// What a single dungeon cell is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
    Doorway,
}

impl TileKind {
    /// Floors and doorways can be walked through; walls cannot.
    pub fn is_open(&self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}
