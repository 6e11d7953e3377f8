//! # tile_dungeon command line driver
//!
//! Generates one dungeon and writes it to stdout as JSON.
//!
//! ```text
//! tile_dungeon [config.json]
//! ```
//!
//! Without an argument the built-in 51x21 layout with a single 3x3 room shape
//! is used. Set `RUST_LOG=info` (or `debug`) to follow the phases on stderr.

use std::error::Error;
use std::io::{self, Write};

use log::info;
use tile_dungeon::{generate, GeneratorConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("tile_dungeon starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            GeneratorConfig::from_path(&path)?
        }
        None => GeneratorConfig::default(),
    };

    let dungeon = generate(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &dungeon)?;
    writeln!(out)?;

    info!("tile_dungeon finished (seed {}).", dungeon.seed);
    Ok(())
}
