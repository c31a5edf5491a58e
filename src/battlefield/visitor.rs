//! Per-cell dispatch surface used by traversal
//!
//! Renderers and targeting logic implement [`TileVisitor`]; the battlefield
//! decides which cells are visited and in what order, and calls exactly one
//! method per visited cell.

use crate::battlefield::occupant::{Champion, Nexus};
use crate::battlefield::terrain::GroundTile;

pub trait TileVisitor {
    /// Called for an unoccupied cell
    fn visit_ground(&mut self, tile: GroundTile, x: usize, y: usize);

    /// Called for a cell holding a champion
    fn visit_champion(&mut self, champion: &Champion, x: usize, y: usize);

    /// Called for a cell holding a nexus
    fn visit_nexus(&mut self, nexus: &Nexus, x: usize, y: usize);
}
