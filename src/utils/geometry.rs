// src/utils/geometry.rs

use serde::{Deserialize, Serialize};

/// An integer cell position on the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves `steps` cells in `dir`.
    pub fn step(&self, dir: Direction, steps: i32) -> Point2D {
        let (dx, dy) = dir.offset();
        Point2D::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// The four axis neighbours, in `Direction::ALL` order.
    pub fn neighbors(&self) -> impl Iterator<Item = Point2D> {
        let p = *self;
        Direction::ALL.iter().map(move |dir| p.step(*dir, 1))
    }
}

/// One of the four axis directions carving and neighbour tests move along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// All directions in the order neighbour checks are made.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}

/// An axis-aligned rectangle of cells. `x`/`y` is the top-left cell; the
/// right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Grows the rectangle by `by` cells on every side.
    pub fn grow(&self, by: i32) -> Rect {
        Rect::new(
            self.x - by,
            self.y - by,
            self.width + by * 2,
            self.height + by * 2,
        )
    }

    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    // Edges touching without sharing a cell do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Every cell inside the rectangle, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point2D> {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x..right).map(move |x| Point2D::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance_to() {
        let origin = Point2D::new(0, 0);
        assert_approx_eq!(origin.distance_to(&Point2D::new(1, 1)), 2f64.sqrt());
        assert_approx_eq!(origin.distance_to(&Point2D::new(2, 0)), 2.0);
    }

    #[test]
    fn test_step_and_neighbors() {
        let p = Point2D::new(3, 3);
        assert_eq!(p.step(Direction::East, 2), Point2D::new(5, 3));
        assert_eq!(p.step(Direction::North, 3), Point2D::new(3, 0));

        let around: Vec<_> = p.neighbors().collect();
        assert_eq!(
            around,
            vec![
                Point2D::new(4, 3),
                Point2D::new(2, 3),
                Point2D::new(3, 4),
                Point2D::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_rect_overlap_is_exclusive_of_edges() {
        let a = Rect::new(1, 1, 3, 3);
        // Shares only the boundary line x = 4.
        assert!(!a.overlaps(&Rect::new(4, 1, 3, 3)));
        assert!(a.overlaps(&Rect::new(3, 3, 3, 3)));
        // The grown border of a neighbour one wall away still clears the room.
        assert!(!a.overlaps(&Rect::new(5, 1, 3, 3).grow(1)));
        assert!(a.overlaps(&Rect::new(3, 1, 3, 3).grow(1)));
    }

    #[test]
    fn test_rect_points() {
        let r = Rect::new(1, 2, 2, 2);
        let points: Vec<_> = r.points().collect();
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| r.contains(*p)));
        assert!(!r.contains(Point2D::new(3, 2)));
    }
}
