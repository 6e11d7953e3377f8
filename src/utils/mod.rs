// src/utils/mod.rs
pub mod geometry;

pub use geometry::{Direction, Point2D, Rect};
