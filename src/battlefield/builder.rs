//! Build a battlefield from an ASCII map
//!
//! Each character is one cell. Ground symbols become terrain; occupant
//! symbols stand on grass and place an occupant there:
//!
//! ```text
//! ~~~*~~~
//! B~C*C~R
//! ~~~*~~~
//! ```
//!
//! Champions in the left half of the map play for blue, the rest for red,
//! and are numbered per team in reading order. Blank lines are ignored.

use std::fs;
use std::path::Path;

use crate::battlefield::grid::Battlefield;
use crate::battlefield::occupant::{Champion, Nexus, Occupant};
use crate::battlefield::terrain::{GroundTile, Terrain};
use crate::core::config::SymbolConfig;
use crate::core::error::{BattlefieldError, Result};
use crate::core::types::{ChampionId, Team};

#[derive(Debug, Clone, Default)]
pub struct AsciiBattlefieldBuilder {
    symbols: SymbolConfig,
}

/// What a map character stands for
enum Cell {
    Ground(GroundTile),
    Champion,
    Nexus(Team),
}

impl AsciiBattlefieldBuilder {
    pub fn new(symbols: SymbolConfig) -> Self {
        Self { symbols }
    }

    fn classify(&self, symbol: char) -> Option<Cell> {
        if let Some(tile) = self.symbols.ground_from(symbol) {
            Some(Cell::Ground(tile))
        } else if symbol == self.symbols.champion {
            Some(Cell::Champion)
        } else if symbol == self.symbols.blue_nexus {
            Some(Cell::Nexus(Team::Blue))
        } else if symbol == self.symbols.red_nexus {
            Some(Cell::Nexus(Team::Red))
        } else {
            None
        }
    }

    /// Parse a map
    pub fn build(&self, map: &str) -> Result<Battlefield> {
        let mut rows = Vec::new();
        let mut pending: Vec<(usize, usize, Cell)> = Vec::new();

        for (line_idx, line) in map.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let y = rows.len();
            let mut row = Vec::with_capacity(line.len());
            for (x, symbol) in line.chars().enumerate() {
                let cell = self.classify(symbol).ok_or(BattlefieldError::UnknownGroundSymbol {
                    symbol,
                    line: line_idx + 1,
                    column: x + 1,
                })?;
                match cell {
                    Cell::Ground(tile) => row.push(tile),
                    occupant => {
                        row.push(GroundTile::Grass);
                        pending.push((x, y, occupant));
                    }
                }
            }
            rows.push(row);
        }

        let terrain = Terrain::from_rows(rows)?;
        let half = terrain.width().div_ceil(2);
        let mut field = Battlefield::new(terrain);
        let mut champions = [0u32; 2];

        for (x, y, cell) in pending {
            let occupant: Occupant = match cell {
                Cell::Champion => {
                    let team = if x < half { Team::Blue } else { Team::Red };
                    let counter = &mut champions[team as usize];
                    let champion = Champion::new(
                        ChampionId(*counter),
                        team,
                        format!("{}-{}", team, *counter),
                    );
                    *counter += 1;
                    champion.into()
                }
                Cell::Nexus(team) => Nexus::new(team).into(),
                Cell::Ground(_) => continue,
            };
            // Occupant symbols stand on grass and each owns its cell
            if field.spawn_at(occupant, x as i32, y as i32).is_none() {
                unreachable!("parsed occupant at ({}, {}) could not be placed", x, y);
            }
        }

        tracing::debug!(
            "Built {}x{} battlefield with {} occupants",
            field.width(),
            field.height(),
            field.len()
        );
        Ok(field)
    }

    /// Read and parse a map file
    pub fn load(&self, path: &Path) -> Result<Battlefield> {
        let content = fs::read_to_string(path)?;
        self.build(&content)
    }
}
