use std::time::Instant;

use blockmaze_grid::{HeightField, TexturePolicy};
use serde::Deserialize;

use crate::build::build_grid_mesh;
use crate::cache::FaceMaskCache;
use crate::mesh::GridMeshCPU;

/// How the mesher reacts to a single-column edit. Both strategies produce the
/// same batches for the same grid state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebuildStrategy {
    /// Re-scan every cube.
    #[default]
    Full,
    /// Recompute cached face masks for the edited column and its neighbors,
    /// then re-emit all batches from the cache.
    DirtyRegion,
}

pub struct Mesher {
    policy: TexturePolicy,
    scan_height: i32,
    strategy: RebuildStrategy,
    cache: FaceMaskCache,
    mesh: GridMeshCPU,
    builds: u64,
    // Set once every cached mask reflects the grid; partial refreshes are
    // only valid after that.
    cache_ready: bool,
}

impl Mesher {
    /// `scan_height` is raised to `max_height` when lower, otherwise raised
    /// columns would lose their upper cubes.
    pub fn new(
        size: usize,
        max_height: i32,
        scan_height: i32,
        policy: TexturePolicy,
        strategy: RebuildStrategy,
    ) -> Self {
        let mut scan = scan_height.max(0);
        if scan < max_height {
            log::warn!(
                "scan_height {} is below max_height {}; raising it",
                scan,
                max_height
            );
            scan = max_height;
        }
        let cache_len = if strategy == RebuildStrategy::DirtyRegion { size } else { 0 };
        Self {
            policy,
            scan_height: scan,
            strategy,
            cache: FaceMaskCache::new(cache_len, scan as usize),
            mesh: GridMeshCPU::default(),
            builds: 0,
            cache_ready: false,
        }
    }

    #[inline]
    pub fn policy(&self) -> TexturePolicy {
        self.policy
    }

    #[inline]
    pub fn scan_height(&self) -> i32 {
        self.scan_height
    }

    #[inline]
    pub fn strategy(&self) -> RebuildStrategy {
        self.strategy
    }

    #[inline]
    pub fn mesh(&self) -> &GridMeshCPU {
        &self.mesh
    }

    /// Number of completed passes (full or partial).
    #[inline]
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Rebuilds every batch from scratch, replacing the previous output.
    pub fn build(&mut self, field: &impl HeightField) -> &GridMeshCPU {
        let t0 = Instant::now();
        match self.strategy {
            RebuildStrategy::Full => {
                self.mesh = build_grid_mesh(field, self.policy, self.scan_height);
            }
            RebuildStrategy::DirtyRegion => {
                if self.cache.size() != field.size() {
                    self.cache = FaceMaskCache::new(field.size(), self.scan_height as usize);
                }
                self.cache.refresh_all(field);
                self.cache_ready = true;
                self.cache.emit_into(self.policy, &mut self.mesh);
            }
        }
        self.builds += 1;
        log::info!(
            target: "perf",
            "ms={:.3} mesher_full_build size={} scan_height={} faces={} batches={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            field.size(),
            self.scan_height,
            self.mesh.total_faces(),
            self.mesh.parts.len()
        );
        &self.mesh
    }

    /// Brings the batches up to date after the heights of `columns` changed.
    /// Falls back to a full build until the mask cache has been filled once.
    pub fn rebuild_columns(&mut self, field: &impl HeightField, columns: &[(i32, i32)]) -> &GridMeshCPU {
        if self.strategy == RebuildStrategy::Full
            || !self.cache_ready
            || self.cache.size() != field.size()
        {
            return self.build(field);
        }
        let t0 = Instant::now();
        self.cache.refresh_columns(field, columns);
        self.cache.emit_into(self.policy, &mut self.mesh);
        self.builds += 1;
        log::info!(
            target: "perf",
            "ms={:.3} mesher_dirty_rebuild columns={} faces={} batches={}",
            t0.elapsed().as_secs_f64() * 1000.0,
            columns.len(),
            self.mesh.total_faces(),
            self.mesh.parts.len()
        );
        &self.mesh
    }
}
