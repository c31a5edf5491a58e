//! Battlefield - Entry Point
//!
//! Loads an ASCII map, then renders it or lists the cells around a point in
//! ring-scan order.

use battlefield::battlefield::{
    AsciiBattlefieldBuilder, Battlefield, Champion, GroundTile, Nexus, TileVisitor,
};
use battlefield::core::config::{set_config, BattlefieldConfig};
use battlefield::core::error::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Battlefield map tool
#[derive(Parser, Debug)]
#[command(name = "battlefield")]
#[command(about = "Render battlefield maps and inspect ring scans")]
struct Args {
    /// TOML config overriding map symbols and targeting defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the map as the battlefield sees it
    Render {
        /// ASCII map file
        map: PathBuf,
    },
    /// List the cells around (x, y), ring by ring, clockwise from the top left
    Adjacent {
        /// ASCII map file
        map: PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        x: i32,

        #[arg(long, allow_negative_numbers = true)]
        y: i32,

        /// Outermost ring (defaults to targeting.default_radius)
        #[arg(long)]
        radius: Option<u32>,

        /// Output format: json or text
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// One visited cell
#[derive(Serialize)]
struct CellReport {
    x: usize,
    y: usize,
    content: String,
}

#[derive(Default)]
struct Reporter {
    cells: Vec<CellReport>,
}

impl TileVisitor for Reporter {
    fn visit_ground(&mut self, tile: GroundTile, x: usize, y: usize) {
        let content = format!("{:?}", tile).to_lowercase();
        self.cells.push(CellReport { x, y, content });
    }

    fn visit_champion(&mut self, champion: &Champion, x: usize, y: usize) {
        let content = format!("champion {} ({})", champion.name(), champion.team());
        self.cells.push(CellReport { x, y, content });
    }

    fn visit_nexus(&mut self, nexus: &Nexus, x: usize, y: usize) {
        let content = format!("nexus ({})", nexus.team());
        self.cells.push(CellReport { x, y, content });
    }
}

fn load_map(config: &BattlefieldConfig, map: &Path) -> Result<Battlefield> {
    let field = AsciiBattlefieldBuilder::new(config.symbols.clone()).load(map)?;
    tracing::info!("Loaded {}x{} map from {:?}", field.width(), field.height(), map);
    Ok(field)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("battlefield=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BattlefieldConfig::load(path)?,
        None => BattlefieldConfig::default(),
    };
    if set_config(config.clone()).is_err() {
        tracing::warn!("Global config already set, ignoring {:?}", args.config);
    }

    match args.command {
        Command::Render { map } => {
            let field = load_map(&config, &map)?;
            print!("{}", field);
        }
        Command::Adjacent { map, x, y, radius, format } => {
            let field = load_map(&config, &map)?;
            if !field.in_bounds(x, y) {
                tracing::warn!("Center ({}, {}) lies outside the map", x, y);
            }
            let radius = radius.unwrap_or(config.targeting.default_radius);

            let mut reporter = Reporter::default();
            field.visit_adjacent(x, y, radius, &mut reporter);

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&reporter.cells)?);
            } else {
                for cell in &reporter.cells {
                    println!("({}, {}) {}", cell.x, cell.y, cell.content);
                }
            }
        }
    }

    Ok(())
}
