//! ASCII rendering
//!
//! One character per cell, rows top to bottom, each row terminated by a
//! newline.

use std::fmt;

use crate::battlefield::grid::Battlefield;
use crate::battlefield::occupant::{Champion, Nexus};
use crate::battlefield::terrain::GroundTile;
use crate::battlefield::visitor::TileVisitor;
use crate::core::config::{config, SymbolConfig};

struct AsciiRenderer<'a> {
    symbols: &'a SymbolConfig,
    width: usize,
    map: String,
}

impl AsciiRenderer<'_> {
    fn push(&mut self, symbol: char, x: usize) {
        self.map.push(symbol);
        if x == self.width - 1 {
            self.map.push('\n');
        }
    }
}

impl TileVisitor for AsciiRenderer<'_> {
    fn visit_ground(&mut self, tile: GroundTile, x: usize, _y: usize) {
        self.push(self.symbols.ground(tile), x);
    }

    fn visit_champion(&mut self, _champion: &Champion, x: usize, _y: usize) {
        self.push(self.symbols.champion, x);
    }

    fn visit_nexus(&mut self, nexus: &Nexus, x: usize, _y: usize) {
        self.push(self.symbols.nexus(nexus.team()), x);
    }
}

impl Battlefield {
    /// Render the map with the given symbols
    pub fn render_with(&self, symbols: &SymbolConfig) -> String {
        let mut renderer = AsciiRenderer {
            symbols,
            width: self.width(),
            map: String::with_capacity((self.width() + 1) * self.height()),
        };
        self.visit_full_map(&mut renderer);
        renderer.map
    }
}

/// Renders with the symbols of the global config
impl fmt::Display for Battlefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&config().symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battlefield::terrain::Terrain;
    use crate::core::types::{ChampionId, Team};

    #[test]
    fn test_render_checkerboard_with_champion() {
        let terrain = Terrain::from_rows(vec![
            vec![GroundTile::Grass, GroundTile::Rock],
            vec![GroundTile::Rock, GroundTile::Grass],
        ])
        .unwrap();
        let mut field = Battlefield::new(terrain);
        field
            .spawn_at(Champion::new(ChampionId(0), Team::Blue, "Ashe"), 0, 0)
            .unwrap();

        assert_eq!(field.to_string(), "C*\n*~\n");
    }

    #[test]
    fn test_render_nexus_colours() {
        let mut field = Battlefield::new(Terrain::filled(3, 1, GroundTile::Grass).unwrap());
        field.spawn_at(Nexus::new(Team::Blue), 0, 0).unwrap();
        field.spawn_at(Nexus::new(Team::Red), 2, 0).unwrap();
        assert_eq!(field.to_string(), "B~R\n");
    }

    #[test]
    fn test_render_custom_symbols() {
        let field = Battlefield::new(Terrain::filled(2, 2, GroundTile::Grass).unwrap());
        let symbols = SymbolConfig {
            grass: '.',
            ..SymbolConfig::default()
        };
        assert_eq!(field.render_with(&symbols), "..\n..\n");
    }

    #[test]
    fn test_display_uses_global_symbols() {
        let mut field = Battlefield::new(Terrain::filled(2, 1, GroundTile::Rock).unwrap());
        field.spawn_at(Nexus::new(Team::Blue), 1, 0).unwrap();
        assert_eq!(field.to_string(), field.render_with(&config().symbols));
    }

    #[test]
    fn test_render_shows_ground_after_vacate() {
        let mut field = Battlefield::new(Terrain::filled(1, 1, GroundTile::Grass).unwrap());
        let id = field.spawn_at(Nexus::new(Team::Red), 0, 0).unwrap();
        assert_eq!(field.to_string(), "R\n");
        field.vacate(id);
        assert_eq!(field.to_string(), "~\n");
    }
}
