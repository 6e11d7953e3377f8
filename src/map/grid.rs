// src/map/grid.rs

use crate::map::TileKind;
use crate::utils::Point2D;

/// Identifier handed out for every room and maze segment as it is carved.
pub type RegionId = usize;

/// The tile buffer the generator carves into, plus the region each open cell
/// was carved under. Both buffers are row-major: `index = x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    regions: Vec<Option<RegionId>>,
}

impl Grid {
    /// Creates a grid that is solid wall with no regions assigned.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; len],
            regions: vec![None; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, p: Point2D) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Linear index of `p`, or `None` when it lies outside the grid.
    pub fn index(&self, p: Point2D) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.x as usize + p.y as usize * self.width)
        } else {
            None
        }
    }

    pub fn tile(&self, p: Point2D) -> Option<TileKind> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// True for an in-bounds Wall cell.
    pub fn is_wall(&self, p: Point2D) -> bool {
        self.tile(p) == Some(TileKind::Wall)
    }

    /// True for an in-bounds Floor or Doorway cell.
    pub fn is_open(&self, p: Point2D) -> bool {
        self.tile(p).is_some_and(|t| t.is_open())
    }

    /// Writes `kind` at `p`. A `Some` region stamps the cell with it; `None`
    /// leaves whatever region the cell had. Returns false if `p` is outside.
    pub fn set_tile(&mut self, p: Point2D, kind: TileKind, region: Option<RegionId>) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        self.tiles[i] = kind;
        if region.is_some() {
            self.regions[i] = region;
        }
        true
    }

    /// Region the cell was carved under. Stale for cells pruned back to wall.
    pub fn region(&self, p: Point2D) -> Option<RegionId> {
        self.index(p).and_then(|i| self.regions[i])
    }

    pub fn set_region(&mut self, p: Point2D, region: Option<RegionId>) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        self.regions[i] = region;
        true
    }

    /// Number of the four axis neighbours that are open.
    pub fn open_neighbors(&self, p: Point2D) -> usize {
        p.neighbors().filter(|n| self.is_open(*n)).count()
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == kind).count()
    }

    /// Cells that are not on the outer edge, column by column.
    pub fn interior_points(&self) -> impl Iterator<Item = Point2D> {
        let (width, height) = (self.width as i32, self.height as i32);
        (1..width - 1).flat_map(move |x| (1..height - 1).map(move |y| Point2D::new(x, y)))
    }

    /// Every cell of the grid, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point2D> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point2D::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_solid_wall() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.tiles().len(), 35);
        assert_eq!(grid.count(TileKind::Wall), 35);
        assert!(grid.points().all(|p| grid.region(p).is_none()));
    }

    #[test]
    fn test_index_is_row_major_and_bounds_checked() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.index(Point2D::new(3, 2)), Some(3 + 2 * 7));
        assert_eq!(grid.index(Point2D::new(7, 0)), None);
        assert_eq!(grid.index(Point2D::new(0, 5)), None);
        assert_eq!(grid.index(Point2D::new(-1, 0)), None);
        assert!(!grid.is_wall(Point2D::new(-1, 0)));
        assert!(!grid.is_open(Point2D::new(-1, 0)));
    }

    #[test]
    fn test_set_tile_stamps_region() {
        let mut grid = Grid::new(5, 5);
        let p = Point2D::new(1, 1);
        assert!(grid.set_tile(p, TileKind::Floor, Some(4)));
        assert_eq!(grid.tile(p), Some(TileKind::Floor));
        assert_eq!(grid.region(p), Some(4));

        // Walling a cell back up keeps the stale region.
        grid.set_tile(p, TileKind::Wall, None);
        assert_eq!(grid.region(p), Some(4));
        assert!(grid.is_wall(p));
        assert!(grid.set_region(p, None));
        assert_eq!(grid.region(p), None);

        assert!(!grid.set_tile(Point2D::new(9, 9), TileKind::Floor, Some(0)));
    }

    #[test]
    fn test_open_neighbors() {
        let mut grid = Grid::new(5, 5);
        let center = Point2D::new(2, 2);
        grid.set_tile(Point2D::new(2, 1), TileKind::Floor, Some(0));
        grid.set_tile(Point2D::new(3, 2), TileKind::Doorway, Some(0));
        assert_eq!(grid.open_neighbors(center), 2);
        // Out-of-bounds neighbours never count.
        assert_eq!(grid.open_neighbors(Point2D::new(0, 0)), 0);
    }

    #[test]
    fn test_interior_points_skip_edges() {
        let grid = Grid::new(5, 4);
        let interior: Vec<_> = grid.interior_points().collect();
        assert_eq!(interior.len(), 3 * 2);
        assert_eq!(interior[0], Point2D::new(1, 1));
        assert_eq!(interior[1], Point2D::new(1, 2));
        assert!(Grid::new(2, 2).interior_points().next().is_none());
    }
}
