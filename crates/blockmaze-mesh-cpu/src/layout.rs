use serde::Deserialize;

/// Interleaved vertex layout expected by the renderer. A mismatch with the
/// shader's stride corrupts rendering silently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexLayout {
    /// position(3) + uv(2)
    #[default]
    Textured,
    /// position(3) + normal(3) + uv(2)
    Lit,
}

impl VertexLayout {
    #[inline]
    pub fn floats_per_vertex(self) -> usize {
        match self {
            VertexLayout::Textured => 5,
            VertexLayout::Lit => 8,
        }
    }

    #[inline]
    pub fn stride_bytes(self) -> usize {
        self.floats_per_vertex() * std::mem::size_of::<f32>()
    }

    /// Float offset of the UV pair inside one vertex.
    #[inline]
    pub fn uv_offset(self) -> usize {
        match self {
            VertexLayout::Textured => 3,
            VertexLayout::Lit => 6,
        }
    }
}
