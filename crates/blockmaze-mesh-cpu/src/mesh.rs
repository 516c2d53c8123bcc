use std::collections::BTreeMap;

use blockmaze_geom::Aabb;
use blockmaze_grid::TextureId;

use crate::batch::Batch;

/// Output of one mesher pass: one batch per texture that received at least
/// one face, iterated in ascending texture id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridMeshCPU {
    pub bbox: Aabb,
    pub parts: BTreeMap<TextureId, Batch>,
}

impl GridMeshCPU {
    pub fn from_parts(parts: BTreeMap<TextureId, Batch>) -> Self {
        let mut mesh = Self {
            bbox: Aabb::EMPTY,
            parts,
        };
        mesh.finalize();
        mesh
    }

    /// Empties every batch while keeping their allocations.
    pub fn reset_keep_capacity(&mut self) {
        for batch in self.parts.values_mut() {
            batch.clear_keep_capacity();
        }
        self.bbox = Aabb::EMPTY;
    }

    /// Drops batches that ended up empty and recomputes the bounds.
    pub fn finalize(&mut self) {
        self.parts.retain(|_, b| !b.is_empty());
        self.bbox = self
            .parts
            .values()
            .fold(Aabb::EMPTY, |acc, b| acc.union(b.bounds()));
    }

    #[inline]
    pub fn get(&self, texture: TextureId) -> Option<&Batch> {
        self.parts.get(&texture)
    }

    pub fn total_vertices(&self) -> usize {
        self.parts.values().map(Batch::vertex_count).sum()
    }

    pub fn total_faces(&self) -> usize {
        self.parts.values().map(Batch::face_count).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
