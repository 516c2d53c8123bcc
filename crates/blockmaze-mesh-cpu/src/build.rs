use std::collections::BTreeMap;

use blockmaze_geom::Vec3;
use blockmaze_grid::{HeightField, TexturePolicy};

use crate::emit::emit_face;
use crate::face::Face;
use crate::mesh::GridMeshCPU;

/// Set of visible faces of one cube, one bit per [`Face`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceMask(pub u8);

impl FaceMask {
    pub const EMPTY: FaceMask = FaceMask(0);

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= face.bit();
    }

    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Visible faces in emission order.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

/// Faces of cube `(x, y, z)` whose neighbor is not solid. Empty for non-solid cells.
#[inline]
pub fn visible_faces(field: &impl HeightField, x: i32, y: i32, z: i32) -> FaceMask {
    let mut mask = FaceMask::EMPTY;
    if !field.is_solid(x, y, z) {
        return mask;
    }
    for face in Face::ALL {
        let (dx, dy, dz) = face.delta();
        if !field.is_solid(x + dx, y + dy, z + dz) {
            mask.insert(face);
        }
    }
    mask
}

/// Scans every cube below `scan_height` (layer by layer, then z, then x) and
/// emits each visible face into the batch of its column's texture.
pub fn build_grid_mesh(
    field: &impl HeightField,
    policy: TexturePolicy,
    scan_height: i32,
) -> GridMeshCPU {
    let size = field.size();
    let s = size as i32;
    let mut parts = BTreeMap::new();
    for y in 0..scan_height {
        for z in 0..s {
            for x in 0..s {
                let mask = visible_faces(field, x, y, z);
                if mask.is_empty() {
                    continue;
                }
                let texture = policy.texture_for(x, z, size);
                let center = Vec3::cell_center(x, y, z);
                for face in mask.faces() {
                    emit_face(&mut parts, texture, face, center);
                }
            }
        }
    }
    GridMeshCPU::from_parts(parts)
}
