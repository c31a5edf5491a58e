//! Read-only walks over the battlefield
//!
//! Both walks hold no state between calls: the same battlefield and the same
//! visitor always produce the same sequence of calls.

use crate::battlefield::grid::{Battlefield, Slot};
use crate::battlefield::ring::{touching_radii, Ring};
use crate::battlefield::visitor::TileVisitor;

impl Battlefield {
    /// Visit an in-bounds cell
    fn visit<V: TileVisitor + ?Sized>(&self, visitor: &mut V, x: usize, y: usize) {
        match self.cell(x, y) {
            Slot::Empty => visitor.visit_ground(self.ground_at(x, y), x, y),
            Slot::Occupied(id) => match self.occupant(id) {
                Some(occupant) => occupant.accept(visitor, x, y),
                None => unreachable!("cell ({}, {}) holds unregistered {:?}", x, y, id),
            },
        }
    }

    /// Visit every cell from the top left to the bottom right, row by row
    ///
    /// Occupied cells dispatch to the occupant's case, empty cells to the
    /// ground case.
    pub fn visit_full_map<V: TileVisitor + ?Sized>(&self, visitor: &mut V) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.visit(visitor, x, y);
            }
        }
    }

    /// Visit the cells around (x, y), ring by ring up to `max_radius`
    ///
    /// Each ring starts at its top left corner and proceeds clockwise. Cells
    /// outside the map are skipped and (x, y) itself is never visited. Only
    /// rings that reach the map are walked, so the cost is bounded by the map
    /// size for any center and radius.
    pub fn visit_adjacent<V: TileVisitor + ?Sized>(
        &self,
        x: i32,
        y: i32,
        max_radius: u32,
        visitor: &mut V,
    ) {
        let (cx, cy) = (i64::from(x), i64::from(y));
        let (near, far) = touching_radii(cx, cy, self.width(), self.height());
        let last = far.min(i64::from(max_radius));

        let mut visited = 0usize;
        for r in near.max(1)..=last {
            for (px, py) in Ring::new(cx, cy, r as u32).within(self.width(), self.height()) {
                self.visit(visitor, px as usize, py as usize);
                visited += 1;
            }
        }
        tracing::trace!(
            "visit_adjacent({}, {}, radius {}) visited {} cells",
            x,
            y,
            max_radius,
            visited
        );
    }
}
