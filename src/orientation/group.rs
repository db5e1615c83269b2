//! The 24 rotational states of the cube and their quarter-turn transitions.

use std::f32::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use glam::Quat;
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::op::RotationOp;
use crate::error::CubeNetError;
use crate::topology::Face::{self, Back, Down, Front, Left, Right, Top};
use crate::topology::OrientedFace;

/// A rigid orientation of the cube, named by the face currently on top
/// followed by the face currently in front (`TF` is the canonical pose).
///
/// Only 24 of the 36 top/front pairs exist: a face and its opposite can never
/// be on top and in front at the same time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Orientation {
    #[default]
    Tf,
    Tl,
    Tb,
    Tr,
    Fd,
    Fl,
    Ft,
    Fr,
    Ld,
    Lb,
    Lt,
    Lf,
    Bd,
    Br,
    Bt,
    Bl,
    Rd,
    Rf,
    Rt,
    Rb,
    Db,
    Dl,
    Df,
    Dr,
}

use Orientation::{
    Bd, Bl, Br, Bt, Db, Df, Dl, Dr, Fd, Fl, Fr, Ft, Lb, Ld, Lf, Lt, Rb, Rd,
    Rf, Rt, Tb, Tf, Tl, Tr,
};

/// One row of the group table.
struct GroupEntry {
    top: Face,
    front: Face,
    /// Quaternion as `[x, y, z, w]`.
    quat: [f32; 4],
    /// Targets of `xp xn yp yn zp zn`.
    next: [Orientation; 6],
    /// Face resting on the table and its twist on the net.
    base: OrientedFace,
}

const S: f32 = FRAC_1_SQRT_2;
const H: f32 = 0.5;

const fn entry(
    top: Face,
    front: Face,
    quat: [f32; 4],
    next: [Orientation; 6],
    base: OrientedFace,
) -> GroupEntry {
    GroupEntry {
        top,
        front,
        quat,
        next,
        base,
    }
}

const fn of(face: Face, rotation: u8) -> OrientedFace {
    OrientedFace::new(face, rotation)
}

/// Indexed by `Orientation as usize`.
static GROUP: [GroupEntry; 24] = [
    entry(
        Top,
        Front,
        [0.0, 0.0, 0.0, 1.0],
        [Bt, Fd, Tl, Tr, Rf, Lf],
        of(Down, 0),
    ),
    entry(
        Top,
        Left,
        [0.0, -S, 0.0, -S],
        [Rt, Ld, Tb, Tf, Fl, Bl],
        of(Down, 1),
    ),
    entry(
        Top,
        Back,
        [0.0, -1.0, 0.0, 0.0],
        [Ft, Bd, Tr, Tl, Lb, Rb],
        of(Down, 2),
    ),
    entry(
        Top,
        Right,
        [0.0, -S, 0.0, S],
        [Lt, Rd, Tf, Tb, Br, Fr],
        of(Down, 3),
    ),
    entry(
        Front,
        Down,
        [-S, 0.0, 0.0, S],
        [Tf, Db, Fl, Fr, Rd, Ld],
        of(Back, 0),
    ),
    entry(
        Front,
        Left,
        [-H, H, H, H],
        [Rf, Lb, Ft, Fd, Dl, Tl],
        of(Back, 1),
    ),
    entry(
        Front,
        Top,
        [0.0, S, S, 0.0],
        [Df, Tb, Fr, Fl, Lt, Rt],
        of(Back, 2),
    ),
    entry(
        Front,
        Right,
        [H, H, H, -H],
        [Lf, Rb, Fd, Ft, Tr, Dr],
        of(Back, 3),
    ),
    entry(
        Left,
        Down,
        [H, -H, H, -H],
        [Tl, Dr, Lb, Lf, Fd, Bd],
        of(Right, 1),
    ),
    entry(
        Left,
        Back,
        [S, -S, 0.0, 0.0],
        [Fl, Br, Lt, Ld, Db, Tb],
        of(Right, 2),
    ),
    entry(
        Left,
        Top,
        [H, -H, -H, H],
        [Dl, Tr, Lf, Lb, Bt, Ft],
        of(Right, 3),
    ),
    entry(
        Left,
        Front,
        [0.0, 0.0, -S, S],
        [Bl, Fr, Ld, Lt, Tf, Df],
        of(Right, 0),
    ),
    entry(
        Back,
        Down,
        [0.0, -S, S, 0.0],
        [Tb, Df, Br, Bl, Ld, Rd],
        of(Front, 2),
    ),
    entry(
        Back,
        Right,
        [H, -H, H, H],
        [Lb, Rf, Bt, Bd, Dr, Tr],
        of(Front, 3),
    ),
    entry(
        Back,
        Top,
        [S, 0.0, 0.0, S],
        [Db, Tf, Bl, Br, Rt, Lt],
        of(Front, 0),
    ),
    entry(
        Back,
        Left,
        [H, H, -H, H],
        [Rb, Lf, Bd, Bt, Tl, Dl],
        of(Front, 1),
    ),
    entry(
        Right,
        Down,
        [-H, -H, H, H],
        [Tr, Dl, Rf, Rb, Bd, Fd],
        of(Left, 3),
    ),
    entry(
        Right,
        Front,
        [0.0, 0.0, S, S],
        [Br, Fl, Rt, Rd, Df, Tf],
        of(Left, 0),
    ),
    entry(
        Right,
        Top,
        [H, H, H, H],
        [Dr, Tl, Rb, Rf, Ft, Bt],
        of(Left, 1),
    ),
    entry(
        Right,
        Back,
        [S, S, 0.0, 0.0],
        [Fr, Bl, Rd, Rt, Tb, Db],
        of(Left, 2),
    ),
    entry(
        Down,
        Back,
        [-1.0, 0.0, 0.0, 0.0],
        [Fd, Bt, Dl, Dr, Rb, Lb],
        of(Top, 0),
    ),
    entry(
        Down,
        Left,
        [-S, 0.0, S, 0.0],
        [Rd, Lt, Df, Db, Bl, Fl],
        of(Top, 1),
    ),
    entry(
        Down,
        Front,
        [0.0, 0.0, 1.0, 0.0],
        [Bd, Ft, Dr, Dl, Lf, Rf],
        of(Top, 2),
    ),
    entry(
        Down,
        Right,
        [S, 0.0, S, 0.0],
        [Ld, Rt, Db, Df, Fr, Br],
        of(Top, 3),
    ),

];

impl Orientation {
    /// The canonical pose: Top up, Front facing the viewer.
    pub const CANONICAL: Orientation = Tf;

    /// All 24 orientations, in table order.
    pub const ALL: [Orientation; 24] = [
        Tf, Tl, Tb, Tr, Fd, Fl, Ft, Fr, Ld, Lb, Lt, Lf, Bd, Br, Bt, Bl, Rd,
        Rf, Rt, Rb, Db, Dl, Df, Dr,
    ];

    #[inline]
    fn entry(self) -> &'static GroupEntry {
        &GROUP[self as usize]
    }

    /// Orientation reached by applying a global quarter turn.
    #[must_use]
    #[inline]
    pub fn transition(self, op: RotationOp) -> Orientation {
        self.entry().next[op.index()]
    }

    /// The face resting on the table and its twist on the net grid.
    #[must_use]
    #[inline]
    pub fn base(self) -> OrientedFace {
        self.entry().base
    }

    /// World rotation placing the canonical cube in this orientation.
    #[must_use]
    pub fn rotation(self) -> Quat {
        Quat::from_array(self.entry().quat)
    }

    /// Face currently on top.
    #[must_use]
    pub fn top(self) -> Face {
        self.entry().top
    }

    /// Face currently facing the viewer.
    #[must_use]
    pub fn front(self) -> Face {
        self.entry().front
    }

    /// Whether this is the canonical `TF` pose.
    #[must_use]
    pub fn is_canonical(self) -> bool {
        self == Self::CANONICAL
    }

    /// Look up the orientation with the given top and front faces.
    #[must_use]
    pub fn from_faces(top: Face, front: Face) -> Option<Orientation> {
        Self::ALL
            .into_iter()
            .find(|o| o.top() == top && o.front() == front)
    }

    /// Uniformly random orientation.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.top(), self.front())
    }
}

impl FromStr for Orientation {
    type Err = CubeNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeNetError::InvalidOrientationKey(s.to_owned());
        let mut chars = s.chars();
        let top = chars.next().and_then(Face::from_symbol).ok_or_else(invalid)?;
        let front =
            chars.next().and_then(Face::from_symbol).ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        Self::from_faces(top, front).ok_or_else(invalid)
    }
}
