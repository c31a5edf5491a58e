//! Square rings around a cell, walked clockwise
//!
//! Ring `r` around (x, y) is the perimeter of the square with corners
//! (x-r, y-r), (x+r, y-r), (x+r, y+r), (x-r, y+r). The walk starts at the
//! top left corner and follows the corners in that order, visiting each
//! edge up to but not including the next corner. Coordinates are `i64` so
//! rings around any `i32` center stay representable.

/// Corner offsets of a unit square, clockwise from the top left
const CORNERS: [(i64, i64); 4] = [(-1, -1), (1, -1), (1, 1), (-1, 1)];

/// Range of steps `k` in `0..len` for which `start + k * step` lies in `0..limit`
fn clip(start: i64, step: i64, len: i64, limit: i64) -> (i64, i64) {
    match step {
        1 => ((-start).max(0), (limit - start).min(len)),
        -1 => ((start - limit + 1).max(0), (start + 1).min(len)),
        _ if (0..limit).contains(&start) => (0, len),
        _ => (0, 0),
    }
}

/// Clockwise walk over the perimeter of a single ring
///
/// A ring built with [`Ring::within`] only yields cells inside a
/// `width` x `height` map, skipping whole edge stretches without walking them.
#[derive(Debug, Clone)]
pub struct Ring {
    corners: [(i64, i64); 4],
    side: i64,
    bounds: Option<(i64, i64)>,
    edge: usize,
    step: (i64, i64),
    k: i64,
    end: i64,
}

impl Ring {
    /// Ring of the given radius around (x, y). Radius 0 yields nothing.
    pub fn new(x: i64, y: i64, radius: u32) -> Self {
        let r = i64::from(radius);
        let corners = CORNERS.map(|(dx, dy)| (x + dx * r, y + dy * r));
        let mut ring = Self {
            corners,
            side: 2 * r,
            bounds: None,
            edge: 0,
            step: (0, 0),
            k: 0,
            end: 0,
        };
        ring.start_edge();
        ring
    }

    /// Restrict the walk to cells of a `width` x `height` map
    pub fn within(mut self, width: usize, height: usize) -> Self {
        self.bounds = Some((width as i64, height as i64));
        self.edge = 0;
        self.start_edge();
        self
    }

    fn start_edge(&mut self) {
        if self.edge >= 4 {
            return;
        }
        let from = self.corners[self.edge];
        let to = self.corners[(self.edge + 1) % 4];
        self.step = ((to.0 - from.0).signum(), (to.1 - from.1).signum());
        let (lo, hi) = match self.bounds {
            None => (0, self.side),
            Some((width, height)) => {
                let (x_lo, x_hi) = clip(from.0, self.step.0, self.side, width);
                let (y_lo, y_hi) = clip(from.1, self.step.1, self.side, height);
                (x_lo.max(y_lo), x_hi.min(y_hi))
            }
        };
        self.k = lo;
        self.end = hi;
    }
}

impl Iterator for Ring {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        while self.edge < 4 {
            if self.k < self.end {
                let from = self.corners[self.edge];
                let cell = (from.0 + self.k * self.step.0, from.1 + self.k * self.step.1);
                self.k += 1;
                return Some(cell);
            }
            self.edge += 1;
            self.start_edge();
        }
        None
    }
}

/// Smallest and largest ring radius around (x, y) that touch a
/// `width` x `height` map
pub(crate) fn touching_radii(x: i64, y: i64, width: usize, height: usize) -> (i64, i64) {
    let (right, bottom) = (width as i64 - 1, height as i64 - 1);
    let gap = |v: i64, last: i64| (-v).max(v - last).max(0);
    let near = gap(x, right).max(gap(y, bottom));
    let far = x.abs().max((x - right).abs()).max(y.abs()).max((y - bottom).abs());
    (near, far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_radius_one_clockwise_from_top_left() {
        let cells: Vec<_> = Ring::new(1, 1, 1).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)]
        );
    }

    #[test]
    fn test_radius_zero_is_empty() {
        assert_eq!(Ring::new(3, 3, 0).count(), 0);
    }

    #[test]
    fn test_perimeter_count_and_uniqueness() {
        for r in 1..6u32 {
            let cells: Vec<_> = Ring::new(0, 0, r).collect();
            assert_eq!(cells.len(), 8 * r as usize);
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(unique.len(), cells.len());
            for (x, y) in cells {
                assert_eq!(x.abs().max(y.abs()), i64::from(r));
            }
        }
    }

    #[test]
    fn test_radius_two_edges() {
        let cells: Vec<_> = Ring::new(0, 0, 2).collect();
        // Top edge, left to right
        assert_eq!(&cells[0..4], &[(-2, -2), (-1, -2), (0, -2), (1, -2)]);
        // Right edge, top to bottom
        assert_eq!(&cells[4..8], &[(2, -2), (2, -1), (2, 0), (2, 1)]);
        // Bottom edge, right to left
        assert_eq!(&cells[8..12], &[(2, 2), (1, 2), (0, 2), (-1, 2)]);
        // Left edge, bottom to top
        assert_eq!(&cells[12..16], &[(-2, 2), (-2, 1), (-2, 0), (-2, -1)]);
    }

    #[test]
    fn test_within_matches_filtered_walk() {
        for (cx, cy) in [(0, 0), (2, 1), (-2, 3), (6, -1), (4, 4)] {
            for r in 1..7u32 {
                let clipped: Vec<_> = Ring::new(cx, cy, r).within(5, 4).collect();
                let filtered: Vec<_> = Ring::new(cx, cy, r)
                    .filter(|&(x, y)| (0..5).contains(&x) && (0..4).contains(&y))
                    .collect();
                assert_eq!(clipped, filtered, "center ({}, {}) radius {}", cx, cy, r);
            }
        }
    }

    #[test]
    fn test_extreme_center_does_not_overflow() {
        let far = i64::from(i32::MAX);
        let cells: Vec<_> = Ring::new(far, far, u32::MAX).within(3, 3).collect();
        assert!(cells.is_empty());
        assert_eq!(Ring::new(far, 0, 1).count(), 8);
    }

    #[test]
    fn test_touching_radii() {
        // Inside a 3x3 map
        assert_eq!(touching_radii(1, 1, 3, 3), (0, 1));
        assert_eq!(touching_radii(0, 0, 3, 3), (0, 2));
        // Left of the map
        assert_eq!(touching_radii(-4, 1, 3, 3), (4, 6));
    }
}
