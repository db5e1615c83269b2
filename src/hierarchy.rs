//! Attachment hierarchy of a net.
//!
//! [`resolve`] walks the net depth-first from the base cell, labels every
//! cell with the cube face it becomes, and records one [`Hinge`] per
//! parent/child attachment. The result is a plain description: renderers
//! build their own scene graph from it.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::error::{CubeNetError, InvalidNetReason};
use crate::net::{Cell, NetGrid, NET_CELLS};
use crate::topology::{
    child_rotations, edge_to, rotation_delta, Edge, Face, HingeAxis,
    OrientedFace,
};

/// One parent/child attachment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hinge {
    /// Face the child is attached to.
    pub parent: Face,
    /// Attached face.
    pub child: Face,
    /// Edge of the parent (in the parent's frame) the child hangs from.
    pub edge: Edge,
    /// Quarter turns of the child's frame about the parent's Y axis.
    pub rotation_delta: u8,
    /// Shift from the parent's center to the hinge line, and again from the
    /// hinge line to the child's center.
    pub offset: Vec3,
}

impl Hinge {
    fn between(parent: Face, child: Face) -> Result<Self, CubeNetError> {
        let not_adjacent = || InvalidNetReason::NotAdjacent { parent, child };
        let edge = edge_to(parent, child).ok_or_else(not_adjacent)?;
        let rotation_delta =
            rotation_delta(parent, child).ok_or_else(not_adjacent)?;
        Ok(Self {
            parent,
            child,
            edge,
            rotation_delta,
            offset: edge.hinge_offset(),
        })
    }

    /// Axis and folding direction of this hinge.
    #[must_use]
    pub fn axis(&self) -> HingeAxis {
        self.edge.hinge_axis()
    }

    /// Child transform in the parent's frame for a fold angle in radians
    /// (0 = flat, π/2 = folded).
    #[must_use]
    pub fn child_transform(&self, angle: f32) -> Mat4 {
        let to_hinge = Mat4::from_translation(self.offset);
        to_hinge
            * Mat4::from_quat(self.axis().rotation(angle))
            * to_hinge
            * Mat4::from_rotation_y(f32::from(self.rotation_delta) * FRAC_PI_2)
    }
}

/// Labelled net and its hinge list, rooted at the base face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hierarchy {
    root: OrientedFace,
    base_cell: Cell,
    /// Cell labels in visiting order; the first entry is the root.
    labels: Vec<(Cell, OrientedFace)>,
    /// Hinges in pre-order.
    hinges: Vec<Hinge>,
}

impl Hierarchy {
    /// The base face and its twist.
    #[must_use]
    pub fn root(&self) -> OrientedFace {
        self.root
    }

    /// Grid cell holding the base face.
    #[must_use]
    pub fn base_cell(&self) -> Cell {
        self.base_cell
    }

    /// Every occupied cell with the oriented face it folds into, in visiting
    /// order.
    #[must_use]
    pub fn labels(&self) -> &[(Cell, OrientedFace)] {
        &self.labels
    }

    /// Oriented face assigned to `cell`.
    #[must_use]
    pub fn label_at(&self, cell: Cell) -> Option<OrientedFace> {
        self.labels
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|&(_, label)| label)
    }

    /// The five hinges in pre-order: every parent appears before its
    /// children.
    #[must_use]
    pub fn hinges(&self) -> &[Hinge] {
        &self.hinges
    }

    /// Parent of `face`, or `None` for the root.
    #[must_use]
    pub fn parent_of(&self, face: Face) -> Option<Face> {
        self.hinges
            .iter()
            .find(|h| h.child == face)
            .map(|h| h.parent)
    }

    /// Hinges whose parent is `face`.
    pub fn children_of(&self, face: Face) -> impl Iterator<Item = &Hinge> {
        self.hinges.iter().filter(move |h| h.parent == face)
    }

    /// Transform of every face relative to the cube's center, given one
    /// fold angle per hinge (missing angles count as flat).
    ///
    /// The root sits where its face belongs on the closed cube; the returned
    /// list starts with the root and follows hinge order.
    #[must_use]
    pub fn face_transforms(&self, angles: &[f32]) -> Vec<(Face, Mat4)> {
        let root = self.root.face;
        let mut placed = [Mat4::IDENTITY; 6];
        placed[root.index()] = Mat4::from_rotation_translation(
            root.assembled_rotation(),
            root.assembled_position(),
        );
        let mut out = Vec::with_capacity(NET_CELLS);
        out.push((root, placed[root.index()]));
        for (i, hinge) in self.hinges.iter().enumerate() {
            let angle = angles.get(i).copied().unwrap_or(0.0);
            let m = placed[hinge.parent.index()] * hinge.child_transform(angle);
            placed[hinge.child.index()] = m;
            out.push((hinge.child, m));
        }
        out
    }
}

/// Derive the hierarchy of `grid` with the occupied cell `base_index`
/// holding `base`.
///
/// Fails if the base index is out of range, if fewer than six cells are
/// reachable, or if two cells fold onto the same face.
pub fn resolve(
    grid: &NetGrid,
    base_index: usize,
    base: OrientedFace,
) -> Result<Hierarchy, CubeNetError> {
    let base_cell = grid.base_cell(base_index)?;
    let mut walk = Traversal {
        grid,
        claimed: 0,
        labels: Vec::with_capacity(NET_CELLS),
        hinges: Vec::with_capacity(NET_CELLS - 1),
    };
    walk.visit(base_cell, base, None)?;
    if walk.labels.len() < NET_CELLS {
        return Err(InvalidNetReason::Disconnected {
            reached: walk.labels.len(),
        }
        .into());
    }
    Ok(Hierarchy {
        root: base,
        base_cell,
        labels: walk.labels,
        hinges: walk.hinges,
    })
}

struct Traversal<'a> {
    grid: &'a NetGrid,
    /// One bit per face already placed.
    claimed: u8,
    labels: Vec<(Cell, OrientedFace)>,
    hinges: Vec<Hinge>,
}

impl Traversal<'_> {
    fn is_visited(&self, cell: Cell) -> bool {
        self.labels.iter().any(|(c, _)| *c == cell)
    }

    fn visit(
        &mut self,
        cell: Cell,
        at: OrientedFace,
        parent: Option<Face>,
    ) -> Result<(), CubeNetError> {
        if self.claimed & at.face.bit() != 0 {
            return Err(
                InvalidNetReason::DuplicateFace { face: at.face, cell }.into()
            );
        }
        self.claimed |= at.face.bit();
        self.labels.push((cell, at));
        if let Some(parent) = parent {
            self.hinges.push(Hinge::between(parent, at.face)?);
        }

        // Grid steps run +col, -row, -col, +row.
        for (step, child) in Edge::ALL.into_iter().zip(child_rotations(at)) {
            let Some(next) = cell.step(step) else {
                continue;
            };
            if self.grid.is_occupied(next) && !self.is_visited(next) {
                self.visit(next, child, Some(at.face))?;
            }
        }
        Ok(())
    }
}
