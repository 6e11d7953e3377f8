// src/map/mod.rs
pub mod grid;
pub mod room;
pub mod tile;

pub use grid::{Grid, RegionId};
pub use room::{PlacedRoom, RoomTemplate};
pub use tile::TileKind;
