use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "blockmaze", about = "Build and edit a block maze, then report its face batches")]
pub struct Cli {
    /// TOML world configuration; overrides the preset.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Preset::Maze)]
    pub preset: Preset,

    /// Grid side length.
    #[arg(long)]
    pub size: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    #[arg(long, value_enum)]
    pub rebuild: Option<RebuildArg>,

    /// Column height edit `x,z,h`; repeatable, applied in order.
    #[arg(long = "set", value_parser = parse_xzh)]
    pub sets: Vec<(i32, i32, i32)>,

    /// Add one cube on column `x,z`; repeatable.
    #[arg(long = "raise", value_parser = parse_xz)]
    pub raises: Vec<(i32, i32)>,

    /// Remove one cube from column `x,z`; repeatable.
    #[arg(long = "lower", value_parser = parse_xz)]
    pub lowers: Vec<(i32, i32)>,

    /// Try to collect an item at `x,z`; repeatable.
    #[arg(long = "collect", value_parser = parse_xz)]
    pub collects: Vec<(i32, i32)>,

    /// Print the height map after all edits.
    #[arg(long)]
    pub map: bool,

    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Maze,
    Room,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Textured,
    Lit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RebuildArg {
    Full,
    DirtyRegion,
}

fn parse_ints<const N: usize>(s: &str) -> Result<[i32; N], Box<dyn Error + Send + Sync>> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated integers, got '{}'", N, s).into());
    }
    let mut out = [0i32; N];
    for (dst, p) in out.iter_mut().zip(parts) {
        *dst = p.parse()?;
    }
    Ok(out)
}

pub fn parse_xz(s: &str) -> Result<(i32, i32), Box<dyn Error + Send + Sync>> {
    let [x, z] = parse_ints::<2>(s)?;
    Ok((x, z))
}

pub fn parse_xzh(s: &str) -> Result<(i32, i32, i32), Box<dyn Error + Send + Sync>> {
    let [x, z, h] = parse_ints::<3>(s)?;
    Ok((x, z, h))
}
