//! Procedural height-map generators: flat ground, a perimeter room and a
//! randomized Prim maze.

use crate::{HeightField, HeightGrid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MazeParams {
    pub wall_height: i32,
    pub perimeter_height: i32,
    pub path_height: i32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            wall_height: 3,
            perimeter_height: 4,
            path_height: 0,
        }
    }
}

// Carving steps two cells at a time so walls stay one cell thick.
const CARVE_DIRS: [(i32, i32); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

pub fn flat(size: usize, max_height: i32) -> HeightGrid {
    HeightGrid::new(size, max_height)
}

/// Outer ring at `height`, interior at 0.
pub fn perimeter(size: usize, max_height: i32, height: i32) -> HeightGrid {
    let mut grid = HeightGrid::new(size, max_height);
    set_ring(&mut grid, height);
    grid
}

fn set_ring(grid: &mut HeightGrid, height: i32) {
    let last = grid.size() as i32 - 1;
    for i in 0..=last {
        grid.set_height(i, 0, height);
        grid.set_height(i, last, height);
        grid.set_height(0, i, height);
        grid.set_height(last, i, height);
    }
}

struct Frontier {
    x: i32,
    z: i32,
    wall_x: i32,
    wall_z: i32,
}

/// Fills the grid with walls, rings it with the perimeter wall, then carves a
/// maze with randomized Prim's algorithm starting at (1, 1). An entry is opened
/// at (0, 1) and an exit at (size-1, size-2).
pub fn maze(size: usize, max_height: i32, params: MazeParams, rng: &mut fastrand::Rng) -> HeightGrid {
    let mut grid = HeightGrid::from_heights(
        size,
        max_height,
        vec![params.wall_height; size * size],
    );
    set_ring(&mut grid, params.perimeter_height);
    if size < 3 {
        return grid;
    }
    let s = size as i32;
    let wall = grid.get_height(1, 1);
    let interior = |x: i32, z: i32| x >= 1 && x < s - 1 && z >= 1 && z < s - 1;
    let is_wall = |g: &HeightGrid, x: i32, z: i32| interior(x, z) && g.get_height(x, z) == wall;

    let start = (1, 1);
    grid.set_height(start.0, start.1, params.path_height);
    let mut frontier: Vec<Frontier> = Vec::new();
    let push_neighbors = |g: &HeightGrid, x: i32, z: i32, out: &mut Vec<Frontier>| {
        for (dx, dz) in CARVE_DIRS {
            let (nx, nz) = (x + dx, z + dz);
            if is_wall(g, nx, nz) {
                out.push(Frontier {
                    x: nx,
                    z: nz,
                    wall_x: x + dx / 2,
                    wall_z: z + dz / 2,
                });
            }
        }
    };
    // Path height equal to wall height would make every cell look carved.
    if wall != grid.get_height(start.0, start.1) {
        push_neighbors(&grid, start.0, start.1, &mut frontier);
    }
    while !frontier.is_empty() {
        let f = frontier.swap_remove(rng.usize(..frontier.len()));
        if !is_wall(&grid, f.x, f.z) {
            continue;
        }
        grid.set_height(f.x, f.z, params.path_height);
        grid.set_height(f.wall_x, f.wall_z, params.path_height);
        push_neighbors(&grid, f.x, f.z, &mut frontier);
    }

    grid.set_height(0, 1, params.path_height);
    grid.set_height(1, 1, params.path_height);
    grid.set_height(s - 1, s - 2, params.path_height);
    grid.set_height(s - 2, s - 2, params.path_height);
    grid
}
