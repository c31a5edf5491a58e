//! Resolve actions against the battlefield
//!
//! Moves are applied; attacks and spells only resolve their target, damage
//! is left to the combat system.

use serde::Serialize;

use crate::action::targeting::{targets_in_radius, Target, TargetKind};
use crate::action::{Action, ActionVisitor};
use crate::battlefield::Battlefield;
use crate::core::config::config;
use crate::core::types::{ChampionId, Position, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionOutcome {
    /// Champion now stands on this cell
    Moved(Position),
    /// Destination could not be entered; nothing changed
    Blocked,
    /// Attack or spell found its target
    Target(Target),
    /// Nothing valid on the target cell
    NoTarget,
    /// Acting champion is not on the battlefield
    UnknownChampion,
}

pub struct ActionResolver<'a> {
    field: &'a mut Battlefield,
    attack_radius: u32,
    outcome: ActionOutcome,
}

impl<'a> ActionResolver<'a> {
    pub fn new(field: &'a mut Battlefield) -> Self {
        Self::with_attack_radius(field, config().targeting.default_radius)
    }

    pub fn with_attack_radius(field: &'a mut Battlefield, attack_radius: u32) -> Self {
        Self {
            field,
            attack_radius,
            outcome: ActionOutcome::NoTarget,
        }
    }

    pub fn resolve(&mut self, action: &Action) -> ActionOutcome {
        action.accept(self);
        let kind = if action.is_spell() { "Spell" } else { "Action" };
        tracing::debug!(
            "{} by {} champion {} on {:?} -> {:?}",
            kind,
            action.team(),
            action.champion().0,
            action.target(),
            self.outcome
        );
        self.outcome
    }

    fn acting_position(&self, team: Team, champion: ChampionId) -> Option<Position> {
        self.field
            .find_champion(team, champion)
            .and_then(|id| self.field.position_of(id))
    }
}

impl ActionVisitor for ActionResolver<'_> {
    fn visit_move(&mut self, team: Team, champion: ChampionId, x: i32, y: i32) {
        let Some(id) = self.field.find_champion(team, champion) else {
            self.outcome = ActionOutcome::UnknownChampion;
            return;
        };
        self.outcome = if self.field.move_to(id, x, y) {
            ActionOutcome::Moved(Position::new(x as usize, y as usize))
        } else {
            ActionOutcome::Blocked
        };
    }

    fn visit_attack(&mut self, team: Team, champion: ChampionId, x: i32, y: i32) {
        let Some(from) = self.acting_position(team, champion) else {
            self.outcome = ActionOutcome::UnknownChampion;
            return;
        };
        let target = targets_in_radius(self.field, from.x as i32, from.y as i32, self.attack_radius)
            .into_iter()
            .find(|t| {
                t.team == team.opponent() && t.position.x as i32 == x && t.position.y as i32 == y
            });
        self.outcome = target.map_or(ActionOutcome::NoTarget, ActionOutcome::Target);
    }

    fn visit_double_damage(&mut self, team: Team, champion: ChampionId, x: i32, y: i32) {
        if self.acting_position(team, champion).is_none() {
            self.outcome = ActionOutcome::UnknownChampion;
            return;
        }
        self.outcome = match self.field.occupant_at(x, y).and_then(|o| o.as_champion()) {
            Some(ally) if ally.team() == team => ActionOutcome::Target(Target {
                team,
                kind: TargetKind::Champion(ally.id()),
                position: Position::new(x as usize, y as usize),
            }),
            _ => ActionOutcome::NoTarget,
        };
    }
}

/// Resolve a single action with the configured attack radius
pub fn resolve(field: &mut Battlefield, action: &Action) -> ActionOutcome {
    ActionResolver::new(field).resolve(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battlefield::AsciiBattlefieldBuilder;

    fn field(map: &str) -> Battlefield {
        AsciiBattlefieldBuilder::default().build(map).unwrap()
    }

    #[test]
    fn test_move_applies() {
        let mut field = field("C~~~\n");
        let outcome = resolve(
            &mut field,
            &Action::Move { team: Team::Blue, champion: ChampionId(0), x: 1, y: 0 },
        );
        assert_eq!(outcome, ActionOutcome::Moved(Position::new(1, 0)));
        assert_eq!(field.to_string(), "~C~~\n");
    }

    #[test]
    fn test_move_into_rock_blocked() {
        let mut field = field("C*~~\n");
        let outcome = resolve(
            &mut field,
            &Action::Move { team: Team::Blue, champion: ChampionId(0), x: 1, y: 0 },
        );
        assert_eq!(outcome, ActionOutcome::Blocked);
        assert_eq!(field.to_string(), "C*~~\n");
    }

    #[test]
    fn test_unknown_champion() {
        let mut field = field("C~~~\n");
        let outcome = resolve(
            &mut field,
            &Action::Move { team: Team::Red, champion: ChampionId(0), x: 1, y: 0 },
        );
        assert_eq!(outcome, ActionOutcome::UnknownChampion);
    }

    #[test]
    fn test_attack_adjacent_enemy() {
        // Blue champion at (1, 0), red champion at (2, 0)
        let mut field = field("~CC~\n");
        let outcome = ActionResolver::with_attack_radius(&mut field, 1).resolve(&Action::Attack {
            team: Team::Blue,
            champion: ChampionId(0),
            x: 2,
            y: 0,
        });
        assert_eq!(
            outcome,
            ActionOutcome::Target(Target {
                team: Team::Red,
                kind: TargetKind::Champion(ChampionId(0)),
                position: Position::new(2, 0),
            })
        );
    }

    #[test]
    fn test_attack_out_of_range() {
        let mut field = field("C~~~~C\n");
        let outcome = ActionResolver::with_attack_radius(&mut field, 2).resolve(&Action::Attack {
            team: Team::Blue,
            champion: ChampionId(0),
            x: 5,
            y: 0,
        });
        assert_eq!(outcome, ActionOutcome::NoTarget);
    }

    #[test]
    fn test_double_damage_targets_ally_only() {
        // Two blue champions at (0, 0) and (1, 0); red champion at (5, 0)
        let mut field = field("CC~~~C\n");
        let on_ally = resolve(
            &mut field,
            &Action::DoubleDamage { team: Team::Blue, champion: ChampionId(0), x: 1, y: 0 },
        );
        assert!(matches!(on_ally, ActionOutcome::Target(t) if t.kind == TargetKind::Champion(ChampionId(1))));

        let on_enemy = resolve(
            &mut field,
            &Action::DoubleDamage { team: Team::Blue, champion: ChampionId(0), x: 5, y: 0 },
        );
        assert_eq!(on_enemy, ActionOutcome::NoTarget);
    }
}
