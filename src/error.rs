// src/error.rs

use thiserror::Error;

/// Everything that can stop a generation run or its configuration from loading.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Rooms were requested but no templates were supplied.
    #[error("no room templates were given")]
    EmptyRoomCatalog,

    #[error("invalid grid size {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("room template {index} is {width}x{height}; both sides must be odd to line up with the maze lattice")]
    EvenRoomDimension { index: usize, width: i32, height: i32 },

    #[error("room template {index} is {width}x{height}; both sides must be at least 1")]
    EmptyRoomDimension { index: usize, width: i32, height: i32 },

    #[error("extra connector chance {0} is outside 0..=1")]
    InvalidConnectorChance(f64),

    #[error("winding percent {0} is above 100")]
    InvalidWindingPercent(u32),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
