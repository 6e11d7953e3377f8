// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod map;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::{generate, Dungeon, DungeonContext, GenerationStats, Phase};
pub use map::{Grid, PlacedRoom, RoomTemplate, TileKind};
