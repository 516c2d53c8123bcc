//! Block maze world: owns the height grid, its face batches, collectible items
//! and the edit journal. All state lives on one `World`; edits are applied on
//! the caller's thread between frames.
#![forbid(unsafe_code)]

pub mod config;
pub mod items;

use std::error::Error;

pub use config::{GenMode, WorldConfig};
pub use items::{Item, place_items};

use blockmaze_edit::EditJournal;
use blockmaze_grid::{HeightField, HeightGrid, TexturePolicy, flat, maze, perimeter};
use blockmaze_mesh_cpu::{BatchUpload, GridMeshCPU, Mesher, RebuildStrategy, VertexLayout, upload_mesh};

pub struct World {
    grid: HeightGrid,
    mesher: Mesher,
    layout: VertexLayout,
    items: Vec<Item>,
    journal: EditJournal,
    seed: Option<u64>,
}

impl World {
    /// Wraps an existing grid and builds its batches. No items.
    pub fn from_grid(
        grid: HeightGrid,
        scan_height: i32,
        policy: TexturePolicy,
        layout: VertexLayout,
        strategy: RebuildStrategy,
    ) -> Self {
        let mesher = Mesher::new(grid.size(), grid.max_height(), scan_height, policy, strategy);
        let journal = EditJournal::new(grid.size());
        let mut world = Self {
            grid,
            mesher,
            layout,
            items: Vec::new(),
            journal,
            seed: None,
        };
        world.build();
        world
    }

    /// Generates the grid and items described by `cfg` and builds the batches.
    /// `cfg` is validated first, so configs assembled in code get the same
    /// bounds checks as parsed files.
    pub fn from_config(cfg: &WorldConfig) -> Result<Self, Box<dyn Error>> {
        cfg.validate()?;
        let seed = cfg.generation.seed.unwrap_or_else(|| fastrand::u64(..));
        let mut rng = fastrand::Rng::with_seed(seed);
        let g = &cfg.grid;
        let grid = match cfg.generation.mode {
            GenMode::Maze => maze(g.size, g.max_height, cfg.generation.maze_params(), &mut rng),
            GenMode::Perimeter => perimeter(g.size, g.max_height, cfg.generation.perimeter_height),
            GenMode::Flat => flat(g.size, g.max_height),
        };
        let items = place_items(&grid, cfg.items.count, cfg.generation.path_height, &mut rng);
        log::info!(
            "world mode={:?} size={} seed={} items={} solid_cubes={}",
            cfg.generation.mode,
            g.size,
            seed,
            items.len(),
            grid.solid_count()
        );
        let mut world = Self::from_grid(
            grid,
            g.scan_height,
            cfg.mesh.textures,
            cfg.mesh.layout,
            cfg.mesh.rebuild,
        );
        world.items = items;
        world.seed = Some(seed);
        Ok(world)
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Regenerates every batch from the current grid.
    pub fn build(&mut self) -> &GridMeshCPU {
        self.mesher.build(&self.grid);
        self.journal.mark_built(self.journal.rev());
        self.mesher.mesh()
    }

    /// `H(x, z)`, or 0 outside the grid.
    #[inline]
    pub fn get_height(&self, x: i32, z: i32) -> i32 {
        self.grid.get_height(x, z)
    }

    /// Clamps `h` to `[0, max_height]` and stores it, then brings the batches
    /// up to date. Out-of-bounds columns are ignored.
    pub fn set_height(&mut self, x: i32, z: i32, h: i32) {
        if !self.grid.in_bounds(x, z) {
            log::debug!("set_height({}, {}, {}) outside grid; ignored", x, z, h);
            return;
        }
        if !self.grid.set_height(x, z, h) {
            return;
        }
        let stored = self.grid.get_height(x, z);
        let rev = self.journal.record(x, z, stored);
        let columns = self.journal.affected_columns(x, z);
        self.mesher.rebuild_columns(&self.grid, &columns);
        self.journal.mark_built(rev);
        log::debug!("set_height({}, {}) = {} rev={}", x, z, stored, rev);
    }

    /// Adds one cube on top of the column unless it is already at max height.
    pub fn raise_column(&mut self, x: i32, z: i32) -> bool {
        let h = self.get_height(x, z);
        if !self.grid.in_bounds(x, z) || h >= self.grid.max_height() {
            return false;
        }
        self.set_height(x, z, h + 1);
        true
    }

    /// Removes the top cube of the column unless it is empty.
    pub fn lower_column(&mut self, x: i32, z: i32) -> bool {
        let h = self.get_height(x, z);
        if !self.grid.in_bounds(x, z) || h <= 0 {
            return false;
        }
        self.set_height(x, z, h - 1);
        true
    }

    /// Collects the first uncollected item at `(x, z)` whose height matches
    /// the column's current height.
    pub fn collect_at(&mut self, x: i32, z: i32) -> bool {
        let h = self.grid.get_height(x, z);
        let Some(item) = self
            .items
            .iter_mut()
            .find(|it| !it.collected && it.x == x && it.z == z && it.y == h)
        else {
            return false;
        };
        item.collected = true;
        log::info!("collected item at ({}, {}); {} left", x, z, self.remaining_items());
        true
    }

    pub fn remaining_items(&self) -> usize {
        self.items.iter().filter(|it| !it.collected).count()
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn batches(&self) -> &GridMeshCPU {
        self.mesher.mesh()
    }

    /// Hands the current batches to a renderer-side uploader.
    pub fn upload(&self, sink: &mut impl BatchUpload) {
        upload_mesh(self.mesher.mesh(), self.layout, sink);
    }

    #[inline]
    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    #[inline]
    pub fn mesher(&self) -> &Mesher {
        &self.mesher
    }

    #[inline]
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    #[inline]
    pub fn journal(&self) -> &EditJournal {
        &self.journal
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[inline]
    pub fn needs_rebuild(&self) -> bool {
        self.journal.needs_rebuild()
    }
}
