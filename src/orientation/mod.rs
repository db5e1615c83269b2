//! The rotation group of the cube.
//!
//! [`Orientation`] enumerates the 24 rigid poses and [`RotationOp`] the six
//! global quarter turns that move between them. Transitions are table
//! lookups; no floating-point composition is involved.

mod group;
mod op;

pub use group::Orientation;
pub use op::RotationOp;
