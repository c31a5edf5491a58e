//! The battlefield: terrain overlaid with occupants
//!
//! Each cell is either empty (the ground shows through) or holds exactly one
//! occupant. Occupants are registered with the battlefield and referred to
//! by [`OccupantId`]; a cell stores the handle, the registry stores the
//! record, and the record's position always names the cell holding it.

use ahash::AHashMap;

use crate::battlefield::occupant::Occupant;
use crate::battlefield::terrain::{GroundTile, Terrain};
use crate::core::types::{ChampionId, OccupantId, Position, Team};

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(OccupantId),
}

#[derive(Debug, Clone)]
pub struct Battlefield {
    terrain: Terrain,
    cells: Vec<Slot>,
    occupants: AHashMap<OccupantId, Occupant>,
    next_id: u32,
}

impl Battlefield {
    /// Create an empty battlefield over the given terrain
    pub fn new(terrain: Terrain) -> Self {
        let cells = vec![Slot::Empty; terrain.width() * terrain.height()];
        Self {
            terrain,
            cells,
            occupants: AHashMap::new(),
            next_id: 0,
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn width(&self) -> usize {
        self.terrain.width()
    }

    pub fn height(&self) -> usize {
        self.terrain.height()
    }

    /// Ground at (x, y). Panics outside the map, see [`Terrain::ground_at`].
    pub fn ground_at(&self, x: usize, y: usize) -> GroundTile {
        self.terrain.ground_at(x, y)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.terrain.in_bounds(x, y)
    }

    /// Cell content at (x, y), None outside the map
    pub fn slot_at(&self, x: i32, y: i32) -> Option<Slot> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.terrain.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    pub fn occupant_id_at(&self, x: i32, y: i32) -> Option<OccupantId> {
        match self.slot_at(x, y)? {
            Slot::Empty => None,
            Slot::Occupied(id) => Some(id),
        }
    }

    pub fn occupant_at(&self, x: i32, y: i32) -> Option<&Occupant> {
        self.occupant_id_at(x, y).and_then(|id| self.occupants.get(&id))
    }

    pub fn occupant(&self, id: OccupantId) -> Option<&Occupant> {
        self.occupants.get(&id)
    }

    /// Current cell of a registered occupant
    pub fn position_of(&self, id: OccupantId) -> Option<Position> {
        self.occupants.get(&id).and_then(|o| o.position())
    }

    /// Handle of the champion with the given team and id
    ///
    /// If several registered champions match, the lowest handle wins.
    pub fn find_champion(&self, team: Team, champion: ChampionId) -> Option<OccupantId> {
        self.occupants().find_map(|(id, occupant)| {
            occupant
                .as_champion()
                .filter(|c| c.team() == team && c.id() == champion)
                .map(|_| id)
        })
    }

    /// Registered occupants in handle order
    pub fn occupants(&self) -> impl Iterator<Item = (OccupantId, &Occupant)> {
        let mut ids: Vec<OccupantId> = self.occupants.keys().copied().collect();
        ids.sort();
        ids.into_iter()
            .filter_map(move |id| self.occupants.get(&id).map(|occupant| (id, occupant)))
    }

    /// Number of registered occupants, placed or not
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Hand an occupant to the battlefield without placing it
    ///
    /// Any position the record carries is discarded; it gets one when placed.
    pub fn register(&mut self, occupant: impl Into<Occupant>) -> OccupantId {
        let mut occupant = occupant.into();
        occupant.set_position(None);
        let id = OccupantId(self.next_id);
        self.next_id += 1;
        self.occupants.insert(id, occupant);
        id
    }

    /// We can place something at (x, y) if:
    ///   * (x, y) is on the map
    ///   * the ground tile at (x, y) is walkable
    ///   * no other occupant is present at (x, y)
    pub fn can_place_at(&self, x: i32, y: i32) -> bool {
        match (self.terrain.get(x, y), self.slot_at(x, y)) {
            (Some(tile), Some(Slot::Empty)) => tile.walkable(),
            _ => false,
        }
    }

    /// Place a registered occupant on the battlefield for the first time
    ///
    /// Succeeds if `can_place_at(x, y)`; otherwise nothing changes. An occupant
    /// already on the battlefield is refused, use [`Battlefield::move_to`].
    pub fn place_at(&mut self, id: OccupantId, x: i32, y: i32) -> bool {
        match self.occupants.get(&id) {
            Some(occupant) if occupant.position().is_none() => {}
            Some(_) => {
                tracing::trace!("place_at refused for {:?}: already placed", id);
                return false;
            }
            None => return false,
        }

        if !self.can_place_at(x, y) {
            tracing::trace!("place_at refused for {:?} at ({}, {})", id, x, y);
            return false;
        }

        self.occupy(id, Position::new(x as usize, y as usize));
        tracing::debug!("Placed {:?} at ({}, {})", id, x, y);
        true
    }

    /// Register an occupant and place it in one step
    ///
    /// Returns None, keeping nothing, if the cell cannot take it.
    pub fn spawn_at(&mut self, occupant: impl Into<Occupant>, x: i32, y: i32) -> Option<OccupantId> {
        if !self.can_place_at(x, y) {
            return None;
        }
        let id = self.register(occupant);
        self.place_at(id, x, y).then_some(id)
    }

    /// Move a placed occupant to (x, y)
    ///
    /// Returns true on success, in which case the old cell is emptied. On
    /// failure the occupant and both cells are left untouched.
    pub fn move_to(&mut self, id: OccupantId, x: i32, y: i32) -> bool {
        let Some(old) = self.position_of(id) else {
            return false;
        };

        if !self.can_place_at(x, y) {
            tracing::trace!("move_to refused for {:?} to ({}, {})", id, x, y);
            return false;
        }

        let old_index = self.terrain.index(old.x, old.y);
        self.cells[old_index] = Slot::Empty;
        self.occupy(id, Position::new(x as usize, y as usize));
        tracing::debug!("Moved {:?} from ({}, {}) to ({}, {})", id, old.x, old.y, x, y);
        true
    }

    /// Remove an occupant, emptying its cell
    ///
    /// Called when the occupant is destroyed. The record is handed back
    /// without a position.
    pub fn vacate(&mut self, id: OccupantId) -> Option<Occupant> {
        let mut occupant = self.occupants.remove(&id)?;
        if let Some(position) = occupant.position() {
            let index = self.terrain.index(position.x, position.y);
            self.cells[index] = Slot::Empty;
            tracing::debug!("Vacated {:?} from ({}, {})", id, position.x, position.y);
        }
        occupant.set_position(None);
        Some(occupant)
    }

    /// Point a cell at an occupant and record the position on it
    fn occupy(&mut self, id: OccupantId, position: Position) {
        let index = self.terrain.index(position.x, position.y);
        self.cells[index] = Slot::Occupied(id);
        if let Some(occupant) = self.occupants.get_mut(&id) {
            occupant.set_position(Some(position));
        }
    }

    pub(crate) fn cell(&self, x: usize, y: usize) -> Slot {
        self.cells[self.terrain.index(x, y)]
    }
}
