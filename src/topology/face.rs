//! Face labels, local edge directions and hinge geometry.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Half the edge length of the unit cube.
pub const HALF_UNIT: f32 = 0.5;

/// One of the six faces of the cube, named by the world direction of its
/// outward normal when the cube is in the canonical pose.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum Face {
    /// +Y
    #[serde(rename = "T")]
    Top,
    /// -Y
    #[serde(rename = "D")]
    Down,
    /// +Z
    #[serde(rename = "F")]
    Front,
    /// -Z
    #[serde(rename = "B")]
    Back,
    /// -X
    #[serde(rename = "L")]
    Left,
    /// +X
    #[serde(rename = "R")]
    Right,
}

impl Face {
    /// All faces, in table order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Row index into the per-face tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-hot bit, used to track which faces a traversal has claimed.
    #[must_use]
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Single-letter symbol (`T`, `D`, `F`, `B`, `L`, `R`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Face::Top => 'T',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Parse a single-letter symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'T' => Some(Face::Top),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Down,
            Face::Down => Face::Top,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// Outward unit normal in the canonical pose.
    #[must_use]
    pub const fn normal(self) -> Vec3 {
        match self {
            Face::Top => Vec3::Y,
            Face::Down => Vec3::NEG_Y,
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
            Face::Left => Vec3::NEG_X,
            Face::Right => Vec3::X,
        }
    }

    /// Center of this face on the closed unit cube (cube centered at the
    /// origin).
    #[must_use]
    pub fn assembled_position(self) -> Vec3 {
        self.normal() * HALF_UNIT
    }

    /// Rotation taking a flat square lying in the XZ plane (facing -Y, like
    /// the base of a net) onto this face of the closed cube.
    #[must_use]
    pub fn assembled_rotation(self) -> Quat {
        match self {
            Face::Top => Quat::from_rotation_x(-PI),
            Face::Down => Quat::IDENTITY,
            Face::Front => Quat::from_rotation_x(-FRAC_PI_2),
            Face::Back => Quat::from_rotation_x(FRAC_PI_2),
            Face::Left => Quat::from_rotation_z(-FRAC_PI_2),
            Face::Right => Quat::from_rotation_z(FRAC_PI_2),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A face together with a quarter-turn count (0..=3) describing how its
/// local frame is twisted on the net, written `D0`, `R3`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrientedFace {
    /// The cube face.
    pub face: Face,
    rotation: u8,
}

impl OrientedFace {
    /// Oriented face; the rotation is reduced modulo four.
    #[must_use]
    #[inline]
    pub const fn new(face: Face, rotation: u8) -> Self {
        Self {
            face,
            rotation: rotation & 3,
        }
    }

    /// Quarter turns, always in `0..=3`.
    #[must_use]
    #[inline]
    pub const fn rotation(self) -> u8 {
        self.rotation
    }
}

impl fmt::Display for OrientedFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.rotation)
    }
}

impl FromStr for OrientedFace {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_symbol).ok_or(())?;
        let rotation = chars.next().and_then(|c| c.to_digit(4)).ok_or(())?;
        if chars.next().is_some() {
            return Err(());
        }
        Ok(Self::new(face, rotation as u8))
    }
}

/// One of the four edges of a face, named by the local axis direction that
/// points across it (`xp`, `zn`, `xn`, `zp`).
///
/// On the net grid the same order is +col, -row, -col, +row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// +X in the face's local frame; one column right on the grid.
    #[serde(rename = "xp")]
    XPos,
    /// -Z in the face's local frame; one row up on the grid.
    #[serde(rename = "zn")]
    ZNeg,
    /// -X in the face's local frame; one column left on the grid.
    #[serde(rename = "xn")]
    XNeg,
    /// +Z in the face's local frame; one row down on the grid.
    #[serde(rename = "zp")]
    ZPos,
}

impl Edge {
    /// All edges, in traversal order.
    pub const ALL: [Edge; 4] = [Edge::XPos, Edge::ZNeg, Edge::XNeg, Edge::ZPos];

    /// Column index into the per-edge tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name (`xp`, `zn`, `xn`, `zp`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Edge::XPos => "xp",
            Edge::ZNeg => "zn",
            Edge::XNeg => "xn",
            Edge::ZPos => "zp",
        }
    }

    /// Grid step `(d_row, d_col)` that crosses this edge on the net.
    #[must_use]
    pub const fn grid_step(self) -> (i8, i8) {
        match self {
            Edge::XPos => (0, 1),
            Edge::ZNeg => (-1, 0),
            Edge::XNeg => (0, -1),
            Edge::ZPos => (1, 0),
        }
    }

    /// Half-unit shift across this edge: from the parent's center to the
    /// hinge line, and from the hinge line to the child's center.
    #[must_use]
    pub const fn hinge_offset(self) -> Vec3 {
        match self {
            Edge::XPos => Vec3::new(HALF_UNIT, 0.0, 0.0),
            Edge::ZNeg => Vec3::new(0.0, 0.0, -HALF_UNIT),
            Edge::XNeg => Vec3::new(-HALF_UNIT, 0.0, 0.0),
            Edge::ZPos => Vec3::new(0.0, 0.0, HALF_UNIT),
        }
    }

    /// Axis and direction a child folds about when hinged on this edge.
    #[must_use]
    pub const fn hinge_axis(self) -> HingeAxis {
        match self {
            Edge::XPos => HingeAxis::new(Vec3::Z, 1.0),
            Edge::XNeg => HingeAxis::new(Vec3::Z, -1.0),
            Edge::ZPos => HingeAxis::new(Vec3::X, -1.0),
            Edge::ZNeg => HingeAxis::new(Vec3::X, 1.0),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Local rotation axis of a hinge and the sign of its folding direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeAxis {
    /// Unit axis in the parent face's local frame (X or Z).
    pub axis: Vec3,
    /// `+1.0` or `-1.0`: direction that folds the child up toward the cube.
    pub sign: f32,
}

impl HingeAxis {
    const fn new(axis: Vec3, sign: f32) -> Self {
        Self { axis, sign }
    }

    /// Signed angle for a fold magnitude in radians.
    #[must_use]
    #[inline]
    pub fn signed_angle(&self, angle: f32) -> f32 {
        self.sign * angle
    }

    /// Rotation of the child about the hinge for a fold magnitude in radians.
    #[must_use]
    pub fn rotation(&self, angle: f32) -> Quat {
        Quat::from_axis_angle(self.axis, self.signed_angle(angle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_symbols_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(Face::from_symbol('X'), None);
    }

    #[test]
    fn test_opposites_have_opposite_normals() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.normal(), -face.opposite().normal());
        }
    }

    #[test]
    fn test_assembled_rotation_points_base_normal_outward() {
        // A net square faces -Y; once assembled it must face outward.
        for face in Face::ALL {
            let n = face.assembled_rotation() * Vec3::NEG_Y;
            assert!(
                (n - face.normal()).length() < 1e-5,
                "{face}: {n:?} vs {:?}",
                face.normal()
            );
        }
    }

    #[test]
    fn test_oriented_face_parse() {
        let of: OrientedFace = "R3".parse().unwrap();
        assert_eq!(of, OrientedFace::new(Face::Right, 3));
        assert_eq!(of.to_string(), "R3");
        assert!("R4".parse::<OrientedFace>().is_err());
        assert!("Q0".parse::<OrientedFace>().is_err());
        assert!("D01".parse::<OrientedFace>().is_err());
    }

    #[test]
    fn test_oriented_face_rotation_wraps() {
        assert_eq!(OrientedFace::new(Face::Down, 5).rotation(), 1);
    }

    #[test]
    fn test_hinge_offsets_sit_on_the_edge() {
        for edge in Edge::ALL {
            let (dr, dc) = edge.grid_step();
            let offset = edge.hinge_offset();
            // Columns run along +X and rows along +Z on the net.
            assert_eq!(offset.x, f32::from(dc) * HALF_UNIT);
            assert_eq!(offset.z, f32::from(dr) * HALF_UNIT);
        }
    }

    #[test]
    fn test_hinge_rotation_folds_child_upward() {
        // A child square extending across the edge must swing up (+Y) when
        // folded by 90 degrees.
        for edge in Edge::ALL {
            let outward = edge.hinge_offset() * 2.0;
            let folded = edge.hinge_axis().rotation(FRAC_PI_2) * outward;
            assert!(folded.y > 0.99, "{edge}: {folded:?}");
        }
    }
}
