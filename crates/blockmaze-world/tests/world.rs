use std::collections::BTreeMap;

use blockmaze_grid::{HeightGrid, TextureId, TexturePolicy, perimeter};
use blockmaze_mesh_cpu::{RebuildStrategy, UploadedBatch, VertexLayout, build_grid_mesh};
use blockmaze_world::{GenMode, Item, World, WorldConfig};
use proptest::prelude::*;

fn small_world(strategy: RebuildStrategy) -> World {
    World::from_grid(
        HeightGrid::new(4, 4),
        5,
        TexturePolicy::PerimeterBrick,
        VertexLayout::Textured,
        strategy,
    )
}

#[test]
fn raising_a_column_builds_ten_faces() {
    for strategy in [RebuildStrategy::Full, RebuildStrategy::DirtyRegion] {
        let mut world = small_world(strategy);
        assert!(world.batches().is_empty());
        world.set_height(1, 1, 2);
        let batches = world.batches();
        assert_eq!(batches.parts.len(), 1);
        assert_eq!(batches.get(TextureId::WOOD).unwrap().vertex_count(), 60);
        assert!(!world.needs_rebuild());
    }
}

#[test]
fn set_height_is_clamped_to_max() {
    let mut world = small_world(RebuildStrategy::Full);
    world.set_height(1, 1, 5);
    assert_eq!(world.get_height(1, 1), 4);
    world.set_height(1, 1, -2);
    assert_eq!(world.get_height(1, 1), 0);
}

#[test]
fn out_of_bounds_set_leaves_batches_untouched() {
    let mut world = World::from_grid(
        perimeter(8, 4, 4),
        5,
        TexturePolicy::PerimeterBrick,
        VertexLayout::Lit,
        RebuildStrategy::DirtyRegion,
    );
    let before = world.batches().clone();
    let builds = world.mesher().builds();
    world.set_height(-1, 2, 3);
    world.set_height(2, 8, 3);
    assert_eq!(world.batches(), &before);
    assert_eq!(world.mesher().builds(), builds);
    assert_eq!(world.journal().stats().total_edits, 0);
    assert_eq!(world.get_height(-1, 2), 0);
}

#[test]
fn raise_and_lower_respect_bounds() {
    let mut world = small_world(RebuildStrategy::Full);
    assert!(!world.lower_column(2, 2));
    for _ in 0..4 {
        assert!(world.raise_column(2, 2));
    }
    assert!(!world.raise_column(2, 2));
    assert_eq!(world.get_height(2, 2), 4);
    assert!(world.lower_column(2, 2));
    assert_eq!(world.get_height(2, 2), 3);
    assert!(!world.raise_column(9, 9));
    assert_eq!(world.journal().stats().total_edits, 5);
}

#[test]
fn explicit_build_matches_edit_rebuilds() {
    let mut world = small_world(RebuildStrategy::DirtyRegion);
    world.set_height(0, 0, 3);
    world.set_height(1, 0, 1);
    world.set_height(3, 2, 4);
    let incremental = world.batches().clone();
    let rebuilt = world.build().clone();
    assert_eq!(incremental, rebuilt);
    assert_eq!(rebuilt, build_grid_mesh(world.grid(), TexturePolicy::PerimeterBrick, 5));
}

#[test]
fn items_collect_only_at_matching_height() {
    let mut world = small_world(RebuildStrategy::Full).with_items(vec![
        Item::new(1, 0, 1),
        Item::new(2, 0, 2),
    ]);
    assert_eq!(world.remaining_items(), 2);
    world.set_height(1, 1, 1);
    assert!(!world.collect_at(1, 1));
    world.set_height(1, 1, 0);
    assert!(world.collect_at(1, 1));
    assert!(!world.collect_at(1, 1));
    assert!(!world.collect_at(3, 3));
    assert_eq!(world.remaining_items(), 1);
    assert!(world.collect_at(2, 2));
    assert_eq!(world.remaining_items(), 0);
}

#[test]
fn upload_uses_world_layout() {
    let world = World::from_grid(
        perimeter(8, 4, 4),
        5,
        TexturePolicy::Single,
        VertexLayout::Lit,
        RebuildStrategy::Full,
    );
    let mut uploaded: BTreeMap<TextureId, UploadedBatch> = BTreeMap::new();
    world.upload(&mut uploaded);
    let brick = &uploaded[&TextureId::BRICK];
    assert_eq!(brick.count, 280 * 6);
    assert_eq!(brick.data.len(), brick.count * 8);
}

#[test]
fn maze_world_from_config() {
    let mut cfg = WorldConfig::maze();
    cfg.generation.seed = Some(1234);
    let world = World::from_config(&cfg).unwrap();
    assert_eq!(world.seed(), Some(1234));
    assert_eq!(world.items().len(), 3);
    for it in world.items() {
        assert_eq!(world.get_height(it.x, it.z), it.y);
    }
    assert!(world.batches().get(TextureId::BRICK).is_some());
    assert!(world.batches().get(TextureId::WOOD).is_some());
    let again = World::from_config(&cfg).unwrap();
    assert_eq!(again.grid(), world.grid());
    assert_eq!(again.items(), world.items());
    assert_eq!(again.batches(), world.batches());
}

#[test]
fn from_config_rejects_out_of_range_heights() {
    let mut cfg = WorldConfig::maze();
    cfg.generation.wall_height = 9;
    assert!(World::from_config(&cfg).is_err());

    let mut cfg = WorldConfig::room();
    cfg.grid.scan_height = 2;
    assert!(World::from_config(&cfg).is_err());

    let mut cfg = WorldConfig::maze();
    cfg.generation.path_height = cfg.generation.wall_height;
    assert!(World::from_config(&cfg).is_err());
}

#[test]
fn room_preset_is_single_texture_lit() {
    let world = World::from_config(&WorldConfig::room()).unwrap();
    assert_eq!(world.layout(), VertexLayout::Lit);
    assert!(world.items().is_empty());
    assert_eq!(world.batches().parts.len(), 1);
    assert_eq!(world.batches().total_faces(), 280);
}

#[test]
fn config_parses_with_defaults() {
    let cfg = WorldConfig::from_toml_str(
        r#"
        [grid]
        size = 8
        [generation]
        mode = "perimeter"
        seed = 5
        [mesh]
        textures = "single"
        layout = "lit"
        rebuild = "dirty_region"
        "#,
    )
    .unwrap();
    assert_eq!(cfg.grid.size, 8);
    assert_eq!(cfg.grid.max_height, 4);
    assert_eq!(cfg.grid.scan_height, 5);
    assert_eq!(cfg.generation.mode, GenMode::Perimeter);
    assert_eq!(cfg.generation.seed, Some(5));
    assert_eq!(cfg.mesh.textures, TexturePolicy::Single);
    assert_eq!(cfg.mesh.layout, VertexLayout::Lit);
    assert_eq!(cfg.mesh.rebuild, RebuildStrategy::DirtyRegion);
    assert_eq!(cfg.items.count, 3);

    let empty = WorldConfig::from_toml_str("").unwrap();
    assert_eq!(empty, WorldConfig::maze());
}

#[test]
fn config_rejects_bad_bounds() {
    assert!(WorldConfig::from_toml_str("[grid]\nscan_height = 3\n").is_err());
    assert!(WorldConfig::from_toml_str("[grid]\nsize = 2\n").is_err());
    assert!(WorldConfig::from_toml_str("[generation]\nwall_height = 9\n").is_err());
    assert!(WorldConfig::from_toml_str("[generation]\nwall_height = 0\n").is_err());
    assert!(WorldConfig::from_toml_str("[mesh]\nlayout = \"bogus\"\n").is_err());
}

proptest! {
    // set then get returns the clamped height; out-of-bounds edits change nothing.
    #[test]
    fn set_get_roundtrip(x in -3i32..8, z in -3i32..8, h in -5i32..10) {
        let mut world = small_world(RebuildStrategy::DirtyRegion);
        let before = world.batches().clone();
        world.set_height(x, z, h);
        if (0..4).contains(&x) && (0..4).contains(&z) {
            prop_assert_eq!(world.get_height(x, z), h.clamp(0, 4));
        } else {
            prop_assert_eq!(world.get_height(x, z), 0);
            prop_assert_eq!(world.batches(), &before);
        }
        prop_assert_eq!(world.batches(), &build_grid_mesh(world.grid(), TexturePolicy::PerimeterBrick, 5));
    }
}

fn config_path(name: &str) -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join("../../configs").join(name)
}

#[test]
fn shipped_configs_load() {
    let maze = WorldConfig::load_from_path(&config_path("maze.toml")).unwrap();
    assert_eq!(maze.mesh.rebuild, RebuildStrategy::DirtyRegion);
    assert_eq!(maze.generation.mode, GenMode::Maze);
    let room = WorldConfig::load_from_path(&config_path("room.toml")).unwrap();
    assert_eq!(room, WorldConfig::room());
}
