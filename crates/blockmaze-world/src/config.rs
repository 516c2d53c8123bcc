use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use blockmaze_grid::{MazeParams, TexturePolicy};
use blockmaze_mesh_cpu::{RebuildStrategy, VertexLayout};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WorldConfig {
    #[serde(default)]
    pub grid: GridSection,
    #[serde(default)]
    pub generation: Generation,
    #[serde(default)]
    pub mesh: MeshSection,
    #[serde(default)]
    pub items: Items,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::maze()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GridSection {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_max_height")]
    pub max_height: i32,
    #[serde(default = "default_scan_height")]
    pub scan_height: i32,
}
fn default_size() -> usize {
    32
}
fn default_max_height() -> i32 {
    4
}
fn default_scan_height() -> i32 {
    5
}
impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_height: default_max_height(),
            scan_height: default_scan_height(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenMode {
    Maze,
    Perimeter,
    Flat,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Generation {
    #[serde(default = "default_mode")]
    pub mode: GenMode,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_perimeter_height")]
    pub perimeter_height: i32,
    #[serde(default = "default_wall_height")]
    pub wall_height: i32,
    #[serde(default)]
    pub path_height: i32,
}
fn default_mode() -> GenMode {
    GenMode::Maze
}
fn default_perimeter_height() -> i32 {
    4
}
fn default_wall_height() -> i32 {
    3
}
impl Default for Generation {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            seed: None,
            perimeter_height: default_perimeter_height(),
            wall_height: default_wall_height(),
            path_height: 0,
        }
    }
}

impl Generation {
    pub fn maze_params(&self) -> MazeParams {
        MazeParams {
            wall_height: self.wall_height,
            perimeter_height: self.perimeter_height,
            path_height: self.path_height,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct MeshSection {
    #[serde(default)]
    pub textures: TexturePolicy,
    #[serde(default)]
    pub layout: VertexLayout,
    #[serde(default)]
    pub rebuild: RebuildStrategy,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Items {
    #[serde(default = "default_item_count")]
    pub count: usize,
}
fn default_item_count() -> usize {
    3
}
impl Default for Items {
    fn default() -> Self {
        Self {
            count: default_item_count(),
        }
    }
}

impl WorldConfig {
    /// 32x32 maze with brick perimeter, wood walls and three gold items.
    pub fn maze() -> Self {
        Self {
            grid: GridSection::default(),
            generation: Generation::default(),
            mesh: MeshSection::default(),
            items: Items::default(),
        }
    }

    /// 8x8 lit room enclosed by a single-texture perimeter wall.
    pub fn room() -> Self {
        Self {
            grid: GridSection {
                size: 8,
                max_height: 4,
                scan_height: 5,
            },
            generation: Generation {
                mode: GenMode::Perimeter,
                ..Generation::default()
            },
            mesh: MeshSection {
                textures: TexturePolicy::Single,
                layout: VertexLayout::Lit,
                rebuild: RebuildStrategy::Full,
            },
            items: Items { count: 0 },
        }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: WorldConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let g = &self.grid;
        if g.size < 3 {
            return Err(format!("grid.size must be at least 3, got {}", g.size).into());
        }
        if g.max_height < 0 {
            return Err(format!("grid.max_height must be >= 0, got {}", g.max_height).into());
        }
        if g.scan_height < g.max_height {
            return Err(format!(
                "grid.scan_height ({}) must be >= grid.max_height ({})",
                g.scan_height, g.max_height
            )
            .into());
        }
        let gen_cfg = &self.generation;
        for (name, h) in [
            ("perimeter_height", gen_cfg.perimeter_height),
            ("wall_height", gen_cfg.wall_height),
            ("path_height", gen_cfg.path_height),
        ] {
            if h < 0 || h > g.max_height {
                return Err(format!(
                    "generation.{} ({}) must be within [0, {}]",
                    name, h, g.max_height
                )
                .into());
            }
        }
        if gen_cfg.mode == GenMode::Maze && gen_cfg.wall_height == gen_cfg.path_height {
            return Err("generation.wall_height must differ from path_height".into());
        }
        Ok(())
    }
}
