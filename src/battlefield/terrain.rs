//! Ground tiles and the immutable terrain layer
//!
//! Terrain is fixed when the map is built. Occupants sit on top of it and
//! the ground shows through wherever a cell is empty.

use serde::{Deserialize, Serialize};

use crate::core::error::{BattlefieldError, Result};

/// Ground classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GroundTile {
    #[default]
    Grass, // Walkable
    Rock,  // Blocks placement and movement
}

impl GroundTile {
    /// Can an occupant stand on this tile?
    pub fn walkable(&self) -> bool {
        match self {
            GroundTile::Grass => true,
            GroundTile::Rock => false,
        }
    }

    /// All ground tiles
    pub fn all() -> [GroundTile; 2] {
        [GroundTile::Grass, GroundTile::Rock]
    }
}

/// Rectangular grid of ground tiles, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    width: usize,
    height: usize,
    tiles: Vec<GroundTile>,
}

impl Terrain {
    /// Build terrain from rows (row 0 is the top of the map)
    ///
    /// Every row must have the same length and the map must be at least 1x1.
    pub fn from_rows(rows: Vec<Vec<GroundTile>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(BattlefieldError::EmptyTerrain);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, tiles_in_row) in rows.into_iter().enumerate() {
            if tiles_in_row.len() != width {
                return Err(BattlefieldError::NonRectangular {
                    row,
                    expected: width,
                    found: tiles_in_row.len(),
                });
            }
            tiles.extend(tiles_in_row);
        }

        Ok(Self { width, height, tiles })
    }

    /// Terrain of the given size covered by a single tile kind
    pub fn filled(width: usize, height: usize, tile: GroundTile) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BattlefieldError::EmptyTerrain);
        }
        Ok(Self {
            width,
            height,
            tiles: vec![tile; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a signed coordinate is within the map
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Ground at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the map. Callers must check bounds first;
    /// use [`Terrain::get`] for a checked lookup.
    #[inline]
    pub fn ground_at(&self, x: usize, y: usize) -> GroundTile {
        assert!(
            x < self.width && y < self.height,
            "ground_at({}, {}) outside {}x{} terrain",
            x,
            y,
            self.width,
            self.height
        );
        self.tiles[self.index(x, y)]
    }

    /// Checked ground lookup for signed coordinates
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<GroundTile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    /// Row-major index of an in-bounds cell
    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grass_walkable_rock_not() {
        assert!(GroundTile::Grass.walkable());
        assert!(!GroundTile::Rock.walkable());
    }

    #[test]
    fn test_from_rows_dimensions() {
        let terrain = Terrain::from_rows(vec![
            vec![GroundTile::Grass, GroundTile::Rock, GroundTile::Grass],
            vec![GroundTile::Rock, GroundTile::Grass, GroundTile::Grass],
        ])
        .unwrap();
        assert_eq!(terrain.width(), 3);
        assert_eq!(terrain.height(), 2);
    }

    #[test]
    fn test_ground_at_is_x_then_y() {
        let terrain = Terrain::from_rows(vec![
            vec![GroundTile::Grass, GroundTile::Rock],
            vec![GroundTile::Grass, GroundTile::Grass],
        ])
        .unwrap();
        // x is the column, y is the row
        assert_eq!(terrain.ground_at(1, 0), GroundTile::Rock);
        assert_eq!(terrain.ground_at(0, 1), GroundTile::Grass);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Terrain::from_rows(vec![
            vec![GroundTile::Grass, GroundTile::Grass],
            vec![GroundTile::Grass],
        ]);
        assert!(matches!(
            result,
            Err(BattlefieldError::NonRectangular { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_empty_terrain_rejected() {
        assert!(matches!(Terrain::from_rows(vec![]), Err(BattlefieldError::EmptyTerrain)));
        assert!(matches!(Terrain::from_rows(vec![vec![]]), Err(BattlefieldError::EmptyTerrain)));
        assert!(matches!(
            Terrain::filled(0, 3, GroundTile::Grass),
            Err(BattlefieldError::EmptyTerrain)
        ));
    }

    #[test]
    fn test_checked_get() {
        let terrain = Terrain::filled(2, 2, GroundTile::Rock).unwrap();
        assert_eq!(terrain.get(1, 1), Some(GroundTile::Rock));
        assert_eq!(terrain.get(-1, 0), None);
        assert_eq!(terrain.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_ground_at_out_of_bounds_panics() {
        let terrain = Terrain::filled(2, 2, GroundTile::Grass).unwrap();
        terrain.ground_at(2, 0);
    }
}
