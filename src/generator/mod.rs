// src/generator/mod.rs
//! # Dungeon generation
//!
//! A run goes through four phases, in this order:
//!
//! 1. [`place_rooms`] drops room templates at random odd positions.
//! 2. [`add_mazes`] fills the remaining space with growing-tree corridors.
//! 3. [`connect_regions`] opens doorways until everything is one region.
//! 4. [`remove_dead_ends`] walls up corridors that lead nowhere.
//!
//! All run state lives in a [`DungeonContext`]. [`generate`] does everything
//! in one call; a tool that wants to show each step can create a context and
//! call the phases (or [`DungeonContext::run`]) one at a time. Each phase
//! works on whatever the previous ones left behind. Start a new context to
//! start over.

mod connect;
mod maze;
mod prune;
mod regions;
mod rooms;

pub use connect::{connect_regions, ConnectOutcome};
pub use maze::add_mazes;
pub use prune::{prune_grid, remove_dead_ends};
pub use regions::RegionAllocator;
pub use rooms::place_rooms;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::map::{Grid, PlacedRoom, TileKind};

/// The steps of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlaceRooms,
    AddMazes,
    ConnectRegions,
    RemoveDeadEnds,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::PlaceRooms => "Place Rooms",
            Phase::AddMazes => "Add Mazes",
            Phase::ConnectRegions => "Connect Regions",
            Phase::RemoveDeadEnds => "Remove Dead Ends",
        }
    }

    /// Every phase, in the order a full run applies them.
    pub fn all() -> &'static [Phase] {
        &[
            Phase::PlaceRooms,
            Phase::AddMazes,
            Phase::ConnectRegions,
            Phase::RemoveDeadEnds,
        ]
    }
}

/// Counters collected while the phases run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms_placed: usize,
    pub room_tries_rejected: usize,
    pub maze_regions: usize,
    pub doorways: usize,
    pub extra_connectors: usize,
    pub unconnected_regions: usize,
    pub dead_ends_removed: usize,
}

/// Everything one generation run reads and mutates: the grid, the region
/// counter, the random source and the rooms placed so far.
#[derive(Debug)]
pub struct DungeonContext {
    config: GeneratorConfig,
    seed: u64,
    rng: StdRng,
    grid: Grid,
    regions: RegionAllocator,
    rooms: Vec<PlacedRoom>,
    stats: GenerationStats,
}

impl DungeonContext {
    /// Validates `config` and sets up an all-wall grid. Without a seed in the
    /// config a random one is drawn; [`seed`](Self::seed) reports it.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "Initialized {}x{} dungeon with seed {}",
            config.width, config.height, seed
        );

        Ok(Self {
            grid: Grid::new(config.width, config.height),
            rng: StdRng::seed_from_u64(seed),
            seed,
            regions: RegionAllocator::new(),
            rooms: Vec::new(),
            stats: GenerationStats::default(),
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rooms(&self) -> &[PlacedRoom] {
        &self.rooms
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Number of regions started so far, rooms and mazes alike.
    pub fn region_count(&self) -> usize {
        self.regions.count()
    }

    /// Runs a single phase against the current state.
    pub fn run(&mut self, phase: Phase) -> Result<(), GenerateError> {
        debug!(
            "Running phase {} (current region {:?})",
            phase.name(),
            self.regions.current()
        );
        match phase {
            Phase::PlaceRooms => {
                place_rooms(self)?;
            }
            Phase::AddMazes => {
                add_mazes(self);
            }
            Phase::ConnectRegions => {
                connect_regions(self);
            }
            Phase::RemoveDeadEnds => {
                remove_dead_ends(self);
            }
        }
        Ok(())
    }

    /// Runs every phase in order.
    pub fn run_all(&mut self) -> Result<(), GenerateError> {
        for phase in Phase::all() {
            self.run(*phase)?;
        }
        Ok(())
    }

    /// Hands back the finished layout.
    pub fn into_dungeon(self) -> Dungeon {
        Dungeon {
            width: self.grid.width(),
            height: self.grid.height(),
            seed: self.seed,
            tiles: self.grid.tiles().to_vec(),
            rooms: self.rooms,
            stats: self.stats,
        }
    }
}

/// A finished dungeon layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub width: usize,
    pub height: usize,
    /// The seed that reproduces this layout.
    pub seed: u64,
    /// Row-major tiles, `index = x + y * width`.
    pub tiles: Vec<TileKind>,
    pub rooms: Vec<PlacedRoom>,
    pub stats: GenerationStats,
}

impl Dungeon {
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<TileKind> {
        if x < self.width && y < self.height {
            self.tiles.get(x + y * self.width).copied()
        } else {
            None
        }
    }
}

/// Runs all four phases on a fresh context and returns the result.
pub fn generate(config: GeneratorConfig) -> Result<Dungeon, GenerateError> {
    let mut ctx = DungeonContext::new(config)?;
    ctx.run_all()?;
    let dungeon = ctx.into_dungeon();
    info!(
        "Generated dungeon: {} rooms, {} doorways, {} extra connectors, {} dead-end cells removed",
        dungeon.stats.rooms_placed,
        dungeon.stats.doorways,
        dungeon.stats.extra_connectors,
        dungeon.stats.dead_ends_removed
    );
    Ok(dungeon)
}
