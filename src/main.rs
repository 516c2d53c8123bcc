mod cli;
mod report;

use std::error::Error;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use blockmaze_mesh_cpu::{RebuildStrategy, VertexLayout};
use blockmaze_world::{World, WorldConfig};

use crate::cli::{Cli, LayoutArg, Preset, RebuildArg};
use crate::report::{SummaryUpload, height_map};

fn load_config(cli: &Cli) -> Result<WorldConfig, Box<dyn Error>> {
    let mut cfg = match &cli.config {
        Some(path) => WorldConfig::load_from_path(path)?,
        None => match cli.preset {
            Preset::Maze => WorldConfig::maze(),
            Preset::Room => WorldConfig::room(),
        },
    };
    if let Some(size) = cli.size {
        cfg.grid.size = size;
    }
    if cli.seed.is_some() {
        cfg.generation.seed = cli.seed;
    }
    if let Some(layout) = cli.layout {
        cfg.mesh.layout = match layout {
            LayoutArg::Textured => VertexLayout::Textured,
            LayoutArg::Lit => VertexLayout::Lit,
        };
    }
    if let Some(rebuild) = cli.rebuild {
        cfg.mesh.rebuild = match rebuild {
            RebuildArg::Full => RebuildStrategy::Full,
            RebuildArg::DirtyRegion => RebuildStrategy::DirtyRegion,
        };
    }
    Ok(cfg)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let log_cfg = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();
    TermLogger::init(cli.log_level, log_cfg, TerminalMode::Stderr, ColorChoice::Auto)?;

    let cfg = load_config(&cli)?;
    let mut world = World::from_config(&cfg)?;

    for &(x, z, h) in &cli.sets {
        world.set_height(x, z, h);
    }
    for &(x, z) in &cli.raises {
        if !world.raise_column(x, z) {
            log::warn!("raise ({}, {}) skipped", x, z);
        }
    }
    for &(x, z) in &cli.lowers {
        if !world.lower_column(x, z) {
            log::warn!("lower ({}, {}) skipped", x, z);
        }
    }
    for &(x, z) in &cli.collects {
        if !world.collect_at(x, z) {
            log::info!("nothing to collect at ({}, {})", x, z);
        }
    }

    let mut summary = SummaryUpload::default();
    world.upload(&mut summary);
    for line in &summary.lines {
        println!("{}", line);
    }
    let stats = world.journal().stats();
    println!(
        "total_vertices={} edits={} edited_columns={} items_left={}/{}",
        summary.total_vertices,
        stats.total_edits,
        stats.edited_columns,
        world.remaining_items(),
        world.items().len()
    );
    if cli.map {
        print!("{}", height_map(&world));
    }
    Ok(())
}
