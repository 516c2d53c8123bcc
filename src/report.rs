use std::fmt::Write as _;

use blockmaze_grid::{HeightField, TextureId};
use blockmaze_mesh_cpu::{Batch, BatchUpload, VertexLayout};
use blockmaze_world::World;

/// Uploader that records one summary line per batch instead of talking to a GPU.
#[derive(Default)]
pub struct SummaryUpload {
    pub lines: Vec<String>,
    pub total_vertices: usize,
}

fn texture_name(t: TextureId) -> &'static str {
    match t {
        TextureId::BRICK => "brick",
        TextureId::WOOD => "wood",
        _ => "other",
    }
}

impl BatchUpload for SummaryUpload {
    fn begin(&mut self, layout: VertexLayout) {
        self.lines.clear();
        self.total_vertices = 0;
        self.lines.push(format!(
            "layout={:?} floats_per_vertex={} stride_bytes={}",
            layout,
            layout.floats_per_vertex(),
            layout.stride_bytes()
        ));
    }

    fn upload(&mut self, texture: TextureId, batch: &Batch, layout: VertexLayout) {
        let b = batch.bounds();
        self.total_vertices += batch.vertex_count();
        self.lines.push(format!(
            "texture={} ({}) faces={} vertices={} floats={} bounds=({},{},{})..({},{},{})",
            texture.0,
            texture_name(texture),
            batch.face_count(),
            batch.vertex_count(),
            batch.vertex_count() * layout.floats_per_vertex(),
            b.min.x,
            b.min.y,
            b.min.z,
            b.max.x,
            b.max.y,
            b.max.z
        ));
    }
}

/// One character per column: height digit, `*` for an uncollected item resting
/// on the column.
pub fn height_map(world: &World) -> String {
    let n = world.grid().size() as i32;
    let mut out = String::new();
    for z in 0..n {
        for x in 0..n {
            let h = world.get_height(x, z);
            let item_here = world
                .items()
                .iter()
                .any(|it| !it.collected && it.x == x && it.z == z && it.y == h);
            if item_here {
                out.push('*');
            } else if h == 0 {
                out.push('.');
            } else {
                let _ = write!(out, "{}", h);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmaze_grid::{TexturePolicy, perimeter};
    use blockmaze_mesh_cpu::RebuildStrategy;
    use blockmaze_world::Item;

    fn room() -> World {
        World::from_grid(
            perimeter(4, 4, 2),
            5,
            TexturePolicy::PerimeterBrick,
            VertexLayout::Textured,
            RebuildStrategy::Full,
        )
        .with_items(vec![Item::new(1, 0, 2)])
    }

    #[test]
    fn map_marks_walls_paths_and_items() {
        assert_eq!(height_map(&room()), "2222\n2..2\n2*.2\n2222\n");
    }

    #[test]
    fn map_marks_items_on_raised_paths() {
        let mut grid = perimeter(4, 4, 3);
        grid.set_height(1, 1, 1);
        grid.set_height(2, 1, 1);
        let world = World::from_grid(
            grid,
            5,
            TexturePolicy::PerimeterBrick,
            VertexLayout::Textured,
            RebuildStrategy::Full,
        )
        .with_items(vec![Item::new(1, 1, 1), Item::new(2, 0, 1)]);
        // The second item sits below the column top, so it is not drawn.
        assert_eq!(height_map(&world), "3333\n3*13\n3..3\n3333\n");
    }

    #[test]
    fn summary_counts_vertices() {
        let world = room();
        let mut s = SummaryUpload::default();
        world.upload(&mut s);
        assert_eq!(s.total_vertices, world.batches().total_vertices());
        assert_eq!(s.lines.len(), 1 + world.batches().parts.len());
        assert!(s.lines[1].starts_with("texture=0 (brick)"));
    }
}
