//! Column height-map grid, solidity predicate and texture policy.
#![forbid(unsafe_code)]

use serde::Deserialize;

pub mod generation;

pub use generation::{MazeParams, flat, maze, perimeter};

/// Read access to a square column height-map.
///
/// A cell `(x, y, z)` is solid iff `0 <= y < height(x, z)`. Implementations
/// must return 0 for any column outside `[0, size)`, which makes every
/// out-of-bounds coordinate non-solid.
pub trait HeightField {
    fn size(&self) -> usize;

    fn height(&self, x: i32, z: i32) -> i32;

    #[inline]
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        y >= 0 && y < self.height(x, z)
    }

    #[inline]
    fn in_bounds(&self, x: i32, z: i32) -> bool {
        let s = self.size() as i32;
        x >= 0 && x < s && z >= 0 && z < s
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u16);

impl TextureId {
    pub const BRICK: TextureId = TextureId(0);
    pub const WOOD: TextureId = TextureId(1);
}

/// Per-column texture selection. Evaluated on `(x, z)` only, so a whole column
/// shares one texture regardless of height.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TexturePolicy {
    /// Outer ring is brick, interior columns are wood.
    #[default]
    PerimeterBrick,
    /// Every column uses brick.
    Single,
}

impl TexturePolicy {
    #[inline]
    pub fn texture_for(self, x: i32, z: i32, size: usize) -> TextureId {
        match self {
            TexturePolicy::Single => TextureId::BRICK,
            TexturePolicy::PerimeterBrick => {
                let last = size as i32 - 1;
                if x == 0 || z == 0 || x == last || z == last {
                    TextureId::BRICK
                } else {
                    TextureId::WOOD
                }
            }
        }
    }
}

/// Owned `size x size` height-map with heights clamped to `[0, max_height]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    size: usize,
    max_height: i32,
    heights: Vec<i32>,
}

impl HeightGrid {
    pub fn new(size: usize, max_height: i32) -> Self {
        Self {
            size,
            max_height: max_height.max(0),
            heights: vec![0; size * size],
        }
    }

    /// Builds a grid from row-major heights (`heights[z * size + x]`).
    /// Missing entries are filled with 0 and every value is clamped.
    pub fn from_heights(size: usize, max_height: i32, heights: Vec<i32>) -> Self {
        let mut grid = Self::new(size, max_height);
        for (dst, h) in grid.heights.iter_mut().zip(heights) {
            *dst = h.clamp(0, grid.max_height);
        }
        grid
    }

    #[inline]
    pub fn max_height(&self) -> i32 {
        self.max_height
    }

    #[inline]
    fn idx(&self, x: usize, z: usize) -> usize {
        z * self.size + x
    }

    /// Returns `H(x, z)`, or 0 outside the grid.
    #[inline]
    pub fn get_height(&self, x: i32, z: i32) -> i32 {
        if !self.in_bounds(x, z) {
            return 0;
        }
        self.heights[self.idx(x as usize, z as usize)]
    }

    /// Clamps `h` and stores it. Out-of-bounds columns are ignored.
    /// Returns true when the stored height actually changed.
    pub fn set_height(&mut self, x: i32, z: i32, h: i32) -> bool {
        if !self.in_bounds(x, z) {
            return false;
        }
        let h = h.clamp(0, self.max_height);
        let i = self.idx(x as usize, z as usize);
        if self.heights[i] == h {
            return false;
        }
        self.heights[i] = h;
        true
    }

    /// Row-major heights, `z * size + x`.
    #[inline]
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Tallest column currently in the grid.
    pub fn tallest(&self) -> i32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    pub fn solid_count(&self) -> usize {
        self.heights.iter().map(|&h| h as usize).sum()
    }
}

impl HeightField for HeightGrid {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn height(&self, x: i32, z: i32) -> i32 {
        self.get_height(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_are_zero() {
        let mut g = HeightGrid::new(4, 4);
        for x in 0..4 {
            for z in 0..4 {
                g.set_height(x, z, 3);
            }
        }
        assert_eq!(g.get_height(-1, 0), 0);
        assert_eq!(g.get_height(0, -1), 0);
        assert_eq!(g.get_height(4, 0), 0);
        assert_eq!(g.get_height(0, 4), 0);
        assert_eq!(g.get_height(3, 3), 3);
    }

    #[test]
    fn set_height_clamps() {
        let mut g = HeightGrid::new(4, 4);
        assert!(g.set_height(1, 1, 5));
        assert_eq!(g.get_height(1, 1), 4);
        assert!(g.set_height(1, 1, -3));
        assert_eq!(g.get_height(1, 1), 0);
        assert!(!g.set_height(1, 1, 0));
    }

    #[test]
    fn set_height_out_of_bounds_is_noop() {
        let mut g = HeightGrid::new(4, 4);
        let before = g.clone();
        assert!(!g.set_height(-1, 2, 3));
        assert!(!g.set_height(2, 4, 3));
        assert_eq!(g, before);
    }

    #[test]
    fn solidity_follows_height() {
        let g = HeightGrid::from_heights(2, 4, vec![2, 0, 0, 1]);
        assert!(g.is_solid(0, 0, 0));
        assert!(g.is_solid(0, 1, 0));
        assert!(!g.is_solid(0, 2, 0));
        assert!(!g.is_solid(0, -1, 0));
        assert!(!g.is_solid(1, 0, 0));
        assert!(g.is_solid(1, 0, 1));
        assert!(!g.is_solid(2, 0, 1));
    }

    #[test]
    fn perimeter_policy_uses_ring() {
        let p = TexturePolicy::PerimeterBrick;
        assert_eq!(p.texture_for(0, 3, 8), TextureId::BRICK);
        assert_eq!(p.texture_for(7, 3, 8), TextureId::BRICK);
        assert_eq!(p.texture_for(3, 0, 8), TextureId::BRICK);
        assert_eq!(p.texture_for(3, 7, 8), TextureId::BRICK);
        assert_eq!(p.texture_for(3, 3, 8), TextureId::WOOD);
        assert_eq!(TexturePolicy::Single.texture_for(3, 3, 8), TextureId::BRICK);
    }

    #[test]
    fn from_heights_clamps_and_pads() {
        let g = HeightGrid::from_heights(2, 3, vec![9, -1]);
        assert_eq!(g.heights(), &[3, 0, 0, 0]);
        assert_eq!(g.tallest(), 3);
        assert_eq!(g.solid_count(), 3);
    }
}
