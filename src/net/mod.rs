//! Nets: six squares on an 8×8 grid, plus the built-in catalog of named
//! shapes.

mod catalog;
mod grid;

pub use catalog::{
    find, invalid_nets, valid_nets, NetShape, NetVariant, INVALID_SHAPES,
    VALID_SHAPES,
};
pub use grid::{Cell, NetGrid, GRID_SIZE, NET_CELLS};
