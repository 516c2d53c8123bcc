//! CPU face mesher for column height-maps: per-texture batches of visible cube
//! faces, with full and dirty-region rebuilds.
#![forbid(unsafe_code)]

mod batch;
mod build;
mod cache;
mod emit;
mod face;
mod layout;
mod mesh;
mod mesher;
mod upload;

pub use batch::Batch;
pub use build::{FaceMask, build_grid_mesh, visible_faces};
pub use cache::FaceMaskCache;
pub use emit::BuildSink;
pub use face::{Face, TemplateVertex, VERTS_PER_FACE};
pub use layout::VertexLayout;
pub use mesh::GridMeshCPU;
pub use mesher::{Mesher, RebuildStrategy};
pub use upload::{BatchUpload, UploadedBatch, upload_mesh};
