//! Destructible entities that stand on the battlefield
//!
//! Occupants are plain data records. Each one remembers the cell it stands
//! on, but only the battlefield can change that: positions are written by
//! placement and movement and nowhere else.

use serde::{Deserialize, Serialize};

use crate::battlefield::visitor::TileVisitor;
use crate::core::types::{ChampionId, Position, Team};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    id: ChampionId,
    team: Team,
    name: String,
    position: Option<Position>,
}

impl Champion {
    pub fn new(id: ChampionId, team: Team, name: impl Into<String>) -> Self {
        Self {
            id,
            team,
            name: name.into(),
            position: None,
        }
    }

    pub fn id(&self) -> ChampionId {
        self.id
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cell, or None while off the battlefield
    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// A team's objective structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nexus {
    team: Team,
    position: Option<Position>,
}

impl Nexus {
    pub fn new(team: Team) -> Self {
        Self { team, position: None }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }
}

/// Anything that can occupy a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Champion(Champion),
    Nexus(Nexus),
}

impl Occupant {
    pub fn position(&self) -> Option<Position> {
        match self {
            Occupant::Champion(champion) => champion.position,
            Occupant::Nexus(nexus) => nexus.position,
        }
    }

    pub fn team(&self) -> Team {
        match self {
            Occupant::Champion(champion) => champion.team,
            Occupant::Nexus(nexus) => nexus.team,
        }
    }

    pub fn as_champion(&self) -> Option<&Champion> {
        match self {
            Occupant::Champion(champion) => Some(champion),
            Occupant::Nexus(_) => None,
        }
    }

    pub fn as_nexus(&self) -> Option<&Nexus> {
        match self {
            Occupant::Champion(_) => None,
            Occupant::Nexus(nexus) => Some(nexus),
        }
    }

    /// Dispatch to the visitor case matching this variant
    pub fn accept<V: TileVisitor + ?Sized>(&self, visitor: &mut V, x: usize, y: usize) {
        match self {
            Occupant::Champion(champion) => visitor.visit_champion(champion, x, y),
            Occupant::Nexus(nexus) => visitor.visit_nexus(nexus, x, y),
        }
    }

    /// Only the battlefield moves occupants
    pub(crate) fn set_position(&mut self, position: Option<Position>) {
        match self {
            Occupant::Champion(champion) => champion.position = position,
            Occupant::Nexus(nexus) => nexus.position = position,
        }
    }
}

impl From<Champion> for Occupant {
    fn from(champion: Champion) -> Self {
        Occupant::Champion(champion)
    }
}

impl From<Nexus> for Occupant {
    fn from(nexus: Nexus) -> Self {
        Occupant::Nexus(nexus)
    }
}
