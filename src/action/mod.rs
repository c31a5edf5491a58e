//! Actions issued by teams each turn
//!
//! An action names the acting team and champion plus a target cell. Systems
//! consume actions through [`ActionVisitor`] rather than matching on them.

pub mod resolve;
pub mod targeting;

use serde::{Deserialize, Serialize};

use crate::core::types::{ChampionId, Team};

pub use resolve::{resolve, ActionOutcome, ActionResolver};
pub use targeting::{first_enemy, targets_in_radius, Target, TargetKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Walk to (x, y)
    Move {
        team: Team,
        champion: ChampionId,
        x: i32,
        y: i32,
    },
    /// Strike whatever stands on (x, y)
    Attack {
        team: Team,
        champion: ChampionId,
        x: i32,
        y: i32,
    },
    /// Spell: doubles the damage of the allied champion on (x, y)
    DoubleDamage {
        team: Team,
        champion: ChampionId,
        x: i32,
        y: i32,
    },
}

pub trait ActionVisitor {
    fn visit_move(&mut self, team: Team, champion: ChampionId, x: i32, y: i32);
    fn visit_attack(&mut self, team: Team, champion: ChampionId, x: i32, y: i32);
    fn visit_double_damage(&mut self, team: Team, champion: ChampionId, x: i32, y: i32);
}

impl Action {
    /// Dispatch to the visitor case matching this action, passing its fields
    pub fn accept<V: ActionVisitor + ?Sized>(&self, visitor: &mut V) {
        match *self {
            Action::Move { team, champion, x, y } => visitor.visit_move(team, champion, x, y),
            Action::Attack { team, champion, x, y } => visitor.visit_attack(team, champion, x, y),
            Action::DoubleDamage { team, champion, x, y } => {
                visitor.visit_double_damage(team, champion, x, y)
            }
        }
    }

    pub fn team(&self) -> Team {
        match *self {
            Action::Move { team, .. }
            | Action::Attack { team, .. }
            | Action::DoubleDamage { team, .. } => team,
        }
    }

    pub fn champion(&self) -> ChampionId {
        match *self {
            Action::Move { champion, .. }
            | Action::Attack { champion, .. }
            | Action::DoubleDamage { champion, .. } => champion,
        }
    }

    /// Target cell
    pub fn target(&self) -> (i32, i32) {
        match *self {
            Action::Move { x, y, .. }
            | Action::Attack { x, y, .. }
            | Action::DoubleDamage { x, y, .. } => (x, y),
        }
    }

    /// Is this a spell rather than a basic action?
    pub fn is_spell(&self) -> bool {
        matches!(self, Action::DoubleDamage { .. })
    }
}
