use blockmaze_geom::{Aabb, Vec3};

use crate::face::{Face, VERTS_PER_FACE};
use crate::layout::VertexLayout;

/// All visible faces sharing one texture. Vertices are stored as separate
/// position/normal/uv arrays; [`Batch::interleaved`] packs them for upload.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Batch {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
}

impl Batch {
    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
    }

    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        let n = n_faces * VERTS_PER_FACE;
        self.pos.reserve(n * 3);
        self.norm.reserve(n * 3);
        self.uv.reserve(n * 2);
    }

    /// Appends the face template translated so the cube is centered on `center`.
    pub fn push_face(&mut self, face: Face, center: Vec3) {
        let n = face.normal().to_array();
        for v in face.template() {
            self.pos.extend_from_slice(&[
                v.pos[0] + center.x,
                v.pos[1] + center.y,
                v.pos[2] + center.z,
            ]);
            self.norm.extend_from_slice(&n);
            self.uv.extend_from_slice(&v.uv);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.vertex_count() / VERTS_PER_FACE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    pub fn bounds(&self) -> Aabb {
        let mut b = Aabb::EMPTY;
        for i in 0..self.vertex_count() {
            b.include(self.position(i));
        }
        b
    }

    /// Packs the vertices for `layout`; length is `vertex_count * floats_per_vertex`.
    pub fn interleaved(&self, layout: VertexLayout) -> Vec<f32> {
        let n = self.vertex_count();
        let stride = layout.floats_per_vertex();
        let uv_at = layout.uv_offset();
        let mut out = vec![0.0; n * stride];
        for (i, v) in out.chunks_exact_mut(stride).enumerate() {
            v[..3].copy_from_slice(&self.pos[i * 3..i * 3 + 3]);
            if layout == VertexLayout::Lit {
                v[3..6].copy_from_slice(&self.norm[i * 3..i * 3 + 3]);
            }
            v[uv_at..uv_at + 2].copy_from_slice(&self.uv[i * 2..i * 2 + 2]);
        }
        out
    }
}
