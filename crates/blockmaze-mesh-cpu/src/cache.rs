use std::collections::BTreeMap;

use blockmaze_geom::Vec3;
use blockmaze_grid::{HeightField, TextureId, TexturePolicy};

use crate::build::{FaceMask, visible_faces};
use crate::emit::emit_face;
use crate::mesh::GridMeshCPU;

/// Visible-face masks for every cube in the scan volume.
///
/// A height change at `(x, z)` only alters solidity inside that column, so
/// only the masks of that column and its four lateral neighbors need to be
/// recomputed. Re-emitting from the cache walks cells in the same order as
/// [`build_grid_mesh`](crate::build_grid_mesh), so the output is identical.
#[derive(Clone, Debug)]
pub struct FaceMaskCache {
    size: usize,
    scan_height: usize,
    masks: Vec<FaceMask>,
}

impl FaceMaskCache {
    pub fn new(size: usize, scan_height: usize) -> Self {
        Self {
            size,
            scan_height,
            masks: vec![FaceMask::EMPTY; size * size * scan_height],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size + z) * self.size + x
    }

    /// Mask of cube `(x, y, z)`; empty outside the scan volume.
    pub fn mask_at(&self, x: i32, y: i32, z: i32) -> FaceMask {
        let s = self.size as i32;
        if x < 0 || z < 0 || y < 0 || x >= s || z >= s || y >= self.scan_height as i32 {
            return FaceMask::EMPTY;
        }
        self.masks[self.idx(x as usize, y as usize, z as usize)]
    }

    pub fn refresh_all(&mut self, field: &impl HeightField) {
        for y in 0..self.scan_height {
            for z in 0..self.size {
                for x in 0..self.size {
                    let i = self.idx(x, y, z);
                    self.masks[i] = visible_faces(field, x as i32, y as i32, z as i32);
                }
            }
        }
    }

    /// Recomputes the masks of every cell in the given columns; out-of-bounds
    /// columns are skipped.
    pub fn refresh_columns(&mut self, field: &impl HeightField, columns: &[(i32, i32)]) {
        let s = self.size as i32;
        for &(x, z) in columns {
            if x < 0 || z < 0 || x >= s || z >= s {
                continue;
            }
            for y in 0..self.scan_height {
                let i = self.idx(x as usize, y, z as usize);
                self.masks[i] = visible_faces(field, x, y as i32, z);
            }
        }
    }

    pub fn visible_face_count(&self) -> usize {
        self.masks.iter().map(|m| m.count() as usize).sum()
    }

    /// Visible faces per texture, from the cached masks.
    pub fn face_counts(&self, policy: TexturePolicy) -> BTreeMap<TextureId, usize> {
        let mut counts = BTreeMap::new();
        for z in 0..self.size {
            for x in 0..self.size {
                let column: usize = (0..self.scan_height)
                    .map(|y| self.masks[self.idx(x, y, z)].count() as usize)
                    .sum();
                if column > 0 {
                    let texture = policy.texture_for(x as i32, z as i32, self.size);
                    *counts.entry(texture).or_insert(0) += column;
                }
            }
        }
        counts
    }

    /// Rewrites `out` from the cached masks, reusing its batch allocations.
    pub fn emit_into(&self, policy: TexturePolicy, out: &mut GridMeshCPU) {
        out.reset_keep_capacity();
        for (texture, faces) in self.face_counts(policy) {
            out.parts.entry(texture).or_default().reserve_faces(faces);
        }
        for y in 0..self.scan_height {
            for z in 0..self.size {
                for x in 0..self.size {
                    let mask = self.masks[self.idx(x, y, z)];
                    if mask.is_empty() {
                        continue;
                    }
                    let (x, y, z) = (x as i32, y as i32, z as i32);
                    let texture = policy.texture_for(x, z, self.size);
                    let center = Vec3::cell_center(x, y, z);
                    for face in mask.faces() {
                        emit_face(&mut out.parts, texture, face, center);
                    }
                }
            }
        }
        out.finalize();
    }
}
