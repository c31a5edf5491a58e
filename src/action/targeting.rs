//! Target lookup around a cell
//!
//! Targets are reported in ring-scan order: nearest ring first, clockwise
//! from the top left within a ring.

use serde::Serialize;

use crate::battlefield::{Battlefield, Champion, GroundTile, Nexus, TileVisitor};
use crate::core::types::{ChampionId, Position, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TargetKind {
    Champion(ChampionId),
    Nexus,
}

/// An occupant found by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Target {
    pub team: Team,
    pub kind: TargetKind,
    pub position: Position,
}

#[derive(Default)]
struct TargetCollector {
    found: Vec<Target>,
}

impl TileVisitor for TargetCollector {
    fn visit_ground(&mut self, _tile: GroundTile, _x: usize, _y: usize) {}

    fn visit_champion(&mut self, champion: &Champion, x: usize, y: usize) {
        self.found.push(Target {
            team: champion.team(),
            kind: TargetKind::Champion(champion.id()),
            position: Position::new(x, y),
        });
    }

    fn visit_nexus(&mut self, nexus: &Nexus, x: usize, y: usize) {
        self.found.push(Target {
            team: nexus.team(),
            kind: TargetKind::Nexus,
            position: Position::new(x, y),
        });
    }
}

/// Every occupant within `radius` rings of (x, y), excluding (x, y) itself
pub fn targets_in_radius(field: &Battlefield, x: i32, y: i32, radius: u32) -> Vec<Target> {
    let mut collector = TargetCollector::default();
    field.visit_adjacent(x, y, radius, &mut collector);
    collector.found
}

/// Nearest occupant within `radius` that does not belong to `team`
pub fn first_enemy(field: &Battlefield, x: i32, y: i32, radius: u32, team: Team) -> Option<Target> {
    targets_in_radius(field, x, y, radius)
        .into_iter()
        .find(|target| target.team == team.opponent())
}
