//! Battlefield - spatial core of a tile-based combat simulation

pub mod action;
pub mod battlefield;
pub mod core;
