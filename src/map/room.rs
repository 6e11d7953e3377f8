// src/map/room.rs
use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::utils::{Point2D, Rect};

/// A room shape supplied by the caller's catalog.
///
/// Only `width` and `height` drive placement. `name` and `connections` are
/// carried through untouched so the consumer can match a placed room back to
/// its prefab and the cells it marked as connectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTemplate {
    #[serde(default)]
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub connections: Vec<Point2D>,
}

impl RoomTemplate {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            name: String::new(),
            width,
            height,
            connections: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Checks the declared size against the odd carving lattice.
    /// `index` is the template's position in the catalog, for the error.
    pub fn validate(&self, index: usize) -> Result<(), GenerateError> {
        let (width, height) = (self.width, self.height);
        if width < 1 || height < 1 {
            return Err(GenerateError::EmptyRoomDimension { index, width, height });
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(GenerateError::EvenRoomDimension { index, width, height });
        }
        Ok(())
    }
}

/// A room that made it onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedRoom {
    /// Index into the template catalog.
    pub template: usize,
    pub bounds: Rect,
}
