//! Fixed geometry of the unit cube: face labels, edge directions, adjacency
//! and the per-step twist tables used to label a net.
//!
//! All tables are immutable statics shared by every session.

mod face;
mod tables;

pub use face::{Edge, Face, HingeAxis, OrientedFace, HALF_UNIT};
pub use tables::{child_rotations, edge_to, neighbor, rotation_delta};
