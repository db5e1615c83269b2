//! Static adjacency tables of the unit cube.
//!
//! Every face has a local frame with four edges (`xp`, `zn`, `xn`, `zp`).
//! Looking at a face from outside the cube:
//!
//! ```text
//!     +------ B ------+       +------ F ------+      +------ D ------+
//!     |               |       |               |      |               |
//!     L       D       R       L       T       R      L       F       R
//!     |               |       |               |      |               |
//!     +------ F ------+       +------ B ------+      +------ T ------+
//!
//!     +------ B ------+       +------ B ------+      +------ T ------+
//!     |               |       |               |      |               |
//!     T       L       D       D       R       T      L       B       R
//!     |               |       |               |      |               |
//!     +------ F ------+       +------ F ------+      +------ D ------+
//! ```
//!
//! The tables are indexed by [`Face::index`] and [`Edge::index`].

use super::face::{Edge, Face, OrientedFace};

use super::face::Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Top as T};

/// Neighbor across each edge, `[face][edge]`.
static NEIGHBORS: [[Face; 4]; 6] = [
    // xp zn xn zp
    [R, F, L, B], // T
    [R, B, L, F], // D
    [R, D, L, T], // F
    [R, T, L, D], // B
    [D, B, T, F], // L
    [T, B, D, F], // R
];

/// Quarter turns of the child's frame relative to the parent's, aligned with
/// [`NEIGHBORS`].
static ROTATION_DELTAS: [[u8; 4]; 6] = [
    [2, 0, 2, 0], // T
    [0, 0, 0, 0], // D
    [3, 0, 1, 0], // F
    [1, 0, 3, 0], // B
    [0, 1, 2, 3], // L
    [2, 3, 0, 1], // R
];

const fn of(face: Face, rotation: u8) -> OrientedFace {
    OrientedFace::new(face, rotation)
}

/// `[face][rotation][step]`: oriented face found one grid step away, steps in
/// the order +col, -row, -col, +row.
static CHILD_ROTATIONS: [[[OrientedFace; 4]; 4]; 6] = [
    [
        [of(R, 2), of(F, 0), of(L, 2), of(B, 0)],
        [of(B, 1), of(R, 3), of(F, 1), of(L, 3)],
        [of(L, 0), of(B, 2), of(R, 0), of(F, 2)],
        [of(F, 3), of(L, 1), of(B, 3), of(R, 1)],
    ],
    [
        [of(R, 0), of(B, 0), of(L, 0), of(F, 0)],
        [of(F, 1), of(R, 1), of(B, 1), of(L, 1)],
        [of(L, 2), of(F, 2), of(R, 2), of(B, 2)],
        [of(B, 3), of(L, 3), of(F, 3), of(R, 3)],
    ],
    [
        [of(R, 3), of(D, 0), of(L, 1), of(T, 0)],
        [of(T, 1), of(R, 0), of(D, 1), of(L, 2)],
        [of(L, 3), of(T, 2), of(R, 1), of(D, 2)],
        [of(D, 3), of(L, 0), of(T, 3), of(R, 2)],
    ],
    [
        [of(R, 1), of(T, 0), of(L, 3), of(D, 0)],
        [of(D, 1), of(R, 2), of(T, 1), of(L, 0)],
        [of(L, 1), of(D, 2), of(R, 3), of(T, 2)],
        [of(T, 3), of(L, 2), of(D, 3), of(R, 0)],
    ],
    [
        [of(D, 0), of(B, 1), of(T, 2), of(F, 3)],
        [of(F, 0), of(D, 1), of(B, 2), of(T, 3)],
        [of(T, 0), of(F, 1), of(D, 2), of(B, 3)],
        [of(B, 0), of(T, 1), of(F, 2), of(D, 3)],
    ],
    [
        [of(T, 2), of(B, 3), of(D, 0), of(F, 1)],
        [of(F, 2), of(T, 3), of(B, 0), of(D, 1)],
        [of(D, 2), of(F, 3), of(T, 0), of(B, 1)],
        [of(B, 2), of(D, 3), of(F, 0), of(T, 1)],
    ],
];

/// Face reached by folding across `edge` of `face`.
#[must_use]
#[inline]
pub fn neighbor(face: Face, edge: Edge) -> Face {
    NEIGHBORS[face.index()][edge.index()]
}

/// Edge of `face` shared with `other`; `None` for the face itself and its
/// opposite.
#[must_use]
pub fn edge_to(face: Face, other: Face) -> Option<Edge> {
    Edge::ALL
        .into_iter()
        .find(|&edge| neighbor(face, edge) == other)
}

/// Quarter turns of `child`'s frame relative to `parent`'s when attached
/// across their shared edge.
#[must_use]
pub fn rotation_delta(parent: Face, child: Face) -> Option<u8> {
    edge_to(parent, child)
        .map(|edge| ROTATION_DELTAS[parent.index()][edge.index()])
}

/// The four oriented faces one grid step away from a cell holding `at`, in
/// the order +col, -row, -col, +row (the same order as [`Edge::ALL`]).
#[must_use]
#[inline]
pub fn child_rotations(at: OrientedFace) -> [OrientedFace; 4] {
    CHILD_ROTATIONS[at.face.index()][usize::from(at.rotation())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_face_borders_four_others() {
        for face in Face::ALL {
            for edge in Edge::ALL {
                let n = neighbor(face, edge);
                assert_ne!(n, face);
                assert_ne!(n, face.opposite());
                assert_eq!(edge_to(face, n), Some(edge));
            }
            assert_eq!(edge_to(face, face), None);
            assert_eq!(edge_to(face, face.opposite()), None);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in Face::ALL {
            for edge in Edge::ALL {
                let b = neighbor(a, edge);
                assert!(edge_to(b, a).is_some(), "{b} does not border {a}");
            }
        }
    }

    #[test]
    fn test_down_children_are_untwisted() {
        for face in [Face::Front, Face::Back, Face::Left, Face::Right] {
            assert_eq!(rotation_delta(Face::Down, face), Some(0));
        }
        assert_eq!(rotation_delta(Face::Down, Face::Top), None);
    }

    #[test]
    fn test_known_rotation_deltas() {
        assert_eq!(rotation_delta(Face::Top, Face::Right), Some(2));
        assert_eq!(rotation_delta(Face::Front, Face::Left), Some(1));
        assert_eq!(rotation_delta(Face::Left, Face::Front), Some(3));
        assert_eq!(rotation_delta(Face::Right, Face::Back), Some(3));
    }

    #[test]
    fn test_child_rotations_are_neighbors() {
        for face in Face::ALL {
            for rotation in 0..4 {
                let at = OrientedFace::new(face, rotation);
                let children = child_rotations(at);
                for child in children {
                    assert!(
                        edge_to(face, child.face).is_some(),
                        "{at}: {child} is not adjacent"
                    );
                }
                // The four grid steps reach the four distinct neighbors.
                let mut mask = 0u8;
                for child in children {
                    mask |= child.face.bit();
                }
                assert_eq!(mask.count_ones(), 4);
            }
        }
    }

    #[test]
    fn test_unrotated_steps_follow_local_edges() {
        // With no twist, step i crosses edge i.
        for face in Face::ALL {
            let children = child_rotations(OrientedFace::new(face, 0));
            for (edge, child) in Edge::ALL.into_iter().zip(children) {
                assert_eq!(child.face, neighbor(face, edge), "{face} {edge}");
            }
        }
    }
}
