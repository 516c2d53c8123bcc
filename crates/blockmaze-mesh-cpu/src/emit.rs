use std::collections::BTreeMap;

use blockmaze_geom::Vec3;
use blockmaze_grid::TextureId;

use crate::batch::Batch;
use crate::face::Face;

/// Destination for emitted faces, keyed by texture.
pub trait BuildSink {
    fn get_build_mut(&mut self, texture: TextureId) -> &mut Batch;
}

impl BuildSink for BTreeMap<TextureId, Batch> {
    #[inline]
    fn get_build_mut(&mut self, texture: TextureId) -> &mut Batch {
        self.entry(texture).or_default()
    }
}

#[inline]
pub(crate) fn emit_face(builds: &mut impl BuildSink, texture: TextureId, face: Face, center: Vec3) {
    builds.get_build_mut(texture).push_face(face, center);
}
