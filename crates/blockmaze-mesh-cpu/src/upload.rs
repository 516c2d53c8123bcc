use std::collections::BTreeMap;

use blockmaze_grid::TextureId;

use crate::batch::Batch;
use crate::layout::VertexLayout;
use crate::mesh::GridMeshCPU;

/// Receiver of finished batches, typically a GPU buffer uploader that issues
/// one draw per texture.
pub trait BatchUpload {
    /// Called once before the batches of a rebuild. Previously uploaded
    /// buffers are stale from this point on.
    fn begin(&mut self, _layout: VertexLayout) {}

    fn upload(&mut self, texture: TextureId, batch: &Batch, layout: VertexLayout);

    fn finish(&mut self) {}
}

/// CPU-side copy of an uploaded batch: interleaved data plus its vertex count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadedBatch {
    pub data: Vec<f32>,
    pub count: usize,
}

impl BatchUpload for BTreeMap<TextureId, UploadedBatch> {
    fn begin(&mut self, _layout: VertexLayout) {
        self.clear();
    }

    fn upload(&mut self, texture: TextureId, batch: &Batch, layout: VertexLayout) {
        self.insert(
            texture,
            UploadedBatch {
                data: batch.interleaved(layout),
                count: batch.vertex_count(),
            },
        );
    }
}

/// Hands every batch of `mesh` to `sink`, in ascending texture id.
pub fn upload_mesh(mesh: &GridMeshCPU, layout: VertexLayout, sink: &mut impl BatchUpload) {
    sink.begin(layout);
    for (texture, batch) in &mesh.parts {
        sink.upload(*texture, batch, layout);
    }
    sink.finish();
}
