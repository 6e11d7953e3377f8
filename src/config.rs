// src/config.rs
//! # Generator configuration
//!
//! `GeneratorConfig` carries every knob a run needs. It serializes to and from
//! JSON so a tool can keep presets on disk; only `width` and `height` are
//! required, everything else falls back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::map::RoomTemplate;

pub const DEFAULT_ROOM_TRIES: usize = 500;
pub const DEFAULT_EXTRA_CONNECTOR_CHANCE: f64 = 0.2;
pub const DEFAULT_WINDING_PERCENT: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// `None` picks a random seed at init; the chosen one is kept on the context.
    #[serde(default)]
    pub seed: Option<u64>,
    /// How many times to try dropping a room onto the grid.
    #[serde(default = "default_room_tries")]
    pub room_tries: usize,
    #[serde(default)]
    pub room_templates: Vec<RoomTemplate>,
    /// Probability that a connector made redundant by a merge is opened anyway,
    /// adding a loop. 0 keeps the dungeon a tree, 1 opens every one of them.
    #[serde(default = "default_extra_connector_chance")]
    pub extra_connector_chance: f64,
    /// 0 carves corridors as straight as possible, 100 turns at every chance.
    #[serde(default = "default_winding_percent")]
    pub winding_percent: u32,
}

fn default_room_tries() -> usize {
    DEFAULT_ROOM_TRIES
}

fn default_extra_connector_chance() -> f64 {
    DEFAULT_EXTRA_CONNECTOR_CHANCE
}

fn default_winding_percent() -> u32 {
    DEFAULT_WINDING_PERCENT
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
            room_tries: DEFAULT_ROOM_TRIES,
            room_templates: Vec::new(),
            extra_connector_chance: DEFAULT_EXTRA_CONNECTOR_CHANCE,
            winding_percent: DEFAULT_WINDING_PERCENT,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_room_tries(mut self, room_tries: usize) -> Self {
        self.room_tries = room_tries;
        self
    }

    pub fn with_templates(mut self, templates: Vec<RoomTemplate>) -> Self {
        self.room_templates = templates;
        self
    }

    pub fn with_extra_connector_chance(mut self, chance: f64) -> Self {
        self.extra_connector_chance = chance;
        self
    }

    pub fn with_winding_percent(mut self, percent: u32) -> Self {
        self.winding_percent = percent;
        self
    }

    /// Loads a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, GenerateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rejects settings the generator cannot honour. An empty template catalog
    /// is allowed here; it only fails once rooms are actually placed.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let max = i32::MAX as usize;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(GenerateError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.extra_connector_chance) {
            return Err(GenerateError::InvalidConnectorChance(
                self.extra_connector_chance,
            ));
        }
        if self.winding_percent > 100 {
            return Err(GenerateError::InvalidWindingPercent(self.winding_percent));
        }
        for (index, template) in self.room_templates.iter().enumerate() {
            template.validate(index)?;
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// A 51x21 dungeon with a single 3x3 room shape.
    fn default() -> Self {
        GeneratorConfig::new(51, 21).with_templates(vec![RoomTemplate::new(3, 3)])
    }
}
