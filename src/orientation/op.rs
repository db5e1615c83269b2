//! Global quarter-turn operations.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::CubeNetError;

/// A 90° rotation of the whole cube about a world axis.
///
/// The positive direction follows the right-hand rule: `XPos` tips the top
/// face toward the viewer (+Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationOp {
    /// +90° about X ("rotate down").
    #[serde(rename = "xp")]
    XPos,
    /// -90° about X ("rotate up").
    #[serde(rename = "xn")]
    XNeg,
    /// +90° about Y ("rotate right").
    #[serde(rename = "yp")]
    YPos,
    /// -90° about Y ("rotate left").
    #[serde(rename = "yn")]
    YNeg,
    /// +90° about Z ("tilt left").
    #[serde(rename = "zp")]
    ZPos,
    /// -90° about Z ("tilt right").
    #[serde(rename = "zn")]
    ZNeg,
}

impl RotationOp {
    /// All six generators, in table order.
    pub const ALL: [RotationOp; 6] = [
        RotationOp::XPos,
        RotationOp::XNeg,
        RotationOp::YPos,
        RotationOp::YNeg,
        RotationOp::ZPos,
        RotationOp::ZNeg,
    ];

    /// Column index into the transition table.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name (`xp`, `xn`, `yp`, `yn`, `zp`, `zn`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RotationOp::XPos => "xp",
            RotationOp::XNeg => "xn",
            RotationOp::YPos => "yp",
            RotationOp::YNeg => "yn",
            RotationOp::ZPos => "zp",
            RotationOp::ZNeg => "zn",
        }
    }

    /// The operation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> RotationOp {
        match self {
            RotationOp::XPos => RotationOp::XNeg,
            RotationOp::XNeg => RotationOp::XPos,
            RotationOp::YPos => RotationOp::YNeg,
            RotationOp::YNeg => RotationOp::YPos,
            RotationOp::ZPos => RotationOp::ZNeg,
            RotationOp::ZNeg => RotationOp::ZPos,
        }
    }

    /// World axis of the rotation.
    #[must_use]
    pub const fn axis(self) -> Vec3 {
        match self {
            RotationOp::XPos | RotationOp::XNeg => Vec3::X,
            RotationOp::YPos | RotationOp::YNeg => Vec3::Y,
            RotationOp::ZPos | RotationOp::ZNeg => Vec3::Z,
        }
    }

    /// Signed angle in radians (±π/2).
    #[must_use]
    pub const fn angle(self) -> f32 {
        match self {
            RotationOp::XPos | RotationOp::YPos | RotationOp::ZPos => FRAC_PI_2,
            RotationOp::XNeg | RotationOp::YNeg | RotationOp::ZNeg => {
                -FRAC_PI_2
            }
        }
    }

    /// The rotation as a quaternion (applied on the left of a pose).
    #[must_use]
    pub fn quat(self) -> Quat {
        Quat::from_axis_angle(self.axis(), self.angle())
    }
}

impl fmt::Display for RotationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotationOp {
    type Err = CubeNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CubeNetError::InvalidRotationOp(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for op in RotationOp::ALL {
            assert_eq!(op.name().parse::<RotationOp>().unwrap(), op);
        }
        assert!(matches!(
            "xq".parse::<RotationOp>(),
            Err(CubeNetError::InvalidRotationOp(s)) if s == "xq"
        ));
    }

    #[test]
    fn test_inverse_quat_cancels() {
        for op in RotationOp::ALL {
            let q = op.inverse().quat() * op.quat();
            assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6), "{op}: {q:?}");
        }
    }

    #[test]
    fn test_xp_tips_top_toward_front() {
        let moved = RotationOp::XPos.quat() * Vec3::Y;
        assert!((moved - Vec3::Z).length() < 1e-6);
    }
}
