//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Handle to an occupant registered on a battlefield
///
/// Handles are issued by the battlefield and never reused within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OccupantId(pub u32);

/// Champion identifier, unique within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChampionId(pub u32);

/// Team colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// The opposing team
    pub fn opponent(&self) -> Self {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Blue => write!(f, "blue"),
            Team::Red => write!(f, "red"),
        }
    }
}

/// Cell coordinate on the battlefield. (0, 0) is the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, i.e. the ring radius at which `other` is found
    pub fn ring_distance(&self, other: &Self) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_opponent() {
        assert_eq!(Team::Blue.opponent(), Team::Red);
        assert_eq!(Team::Red.opponent(), Team::Blue);
    }

    #[test]
    fn test_team_display() {
        assert_eq!(Team::Blue.to_string(), "blue");
        assert_eq!(Team::Red.to_string(), "red");
    }

    #[test]
    fn test_ring_distance() {
        let center = Position::new(5, 5);
        assert_eq!(center.ring_distance(&center), 0);
        assert_eq!(center.ring_distance(&Position::new(4, 4)), 1);
        assert_eq!(center.ring_distance(&Position::new(7, 6)), 2);
        assert_eq!(center.ring_distance(&Position::new(5, 0)), 5);
    }

    #[test]
    fn test_occupant_id_ordering() {
        assert!(OccupantId(1) < OccupantId(2));
        assert!(ChampionId(3) > ChampionId(0));
    }
}
