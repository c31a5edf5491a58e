//! Battlefield - square grid of ground tiles overlaid by destructible occupants
//!
//! The coordinate (0, 0) is the top left corner; x grows to the right and y
//! grows downwards. When an occupant is destroyed the ground tile beneath it
//! shows through again.

pub mod builder;
pub mod grid;
pub mod occupant;
pub mod render;
pub mod ring;
pub mod terrain;
pub mod traversal;
pub mod visitor;

// Re-exports for convenient access
pub use builder::AsciiBattlefieldBuilder;
pub use grid::{Battlefield, Slot};
pub use occupant::{Champion, Nexus, Occupant};
pub use ring::Ring;
pub use terrain::{GroundTile, Terrain};
pub use visitor::TileVisitor;
