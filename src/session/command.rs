//! The session's complete input vocabulary.
//!
//! Every user-facing operation, whether triggered by a button, a slider or
//! a script, is represented as a [`CubeCommand`]. Consumers construct
//! commands and pass them to
//! [`CubeSession::execute`](super::CubeSession::execute).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::FoldMode;
use crate::error::CubeNetError;
use crate::net::NetGrid;
use crate::orientation::{Orientation, RotationOp};

/// A request to change the cube's pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationRequest {
    /// One global quarter turn.
    Turn(RotationOp),
    /// Jump to a named orientation.
    To(Orientation),
    /// Back to `TF`.
    Canonical,
    /// Any of the 24 orientations, uniformly.
    Random,
}

impl FromStr for RotationRequest {
    type Err = CubeNetError;

    /// Accepts `xp`..`zn`, an orientation key such as `TF`, `canonical` or
    /// `random`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(Self::Canonical),
            "random" => Ok(Self::Random),
            _ if s.starts_with(|c: char| c.is_ascii_uppercase()) => {
                s.parse().map(Self::To)
            }
            _ => s.parse().map(Self::Turn),
        }
    }
}

/// Every operation a [`CubeSession`](super::CubeSession) accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CubeCommand {
    // ── Net ─────────────────────────────────────────────────────────
    /// Select a catalog net by name code (`Cross-0`, `Bone-f-3`, ...).
    SelectNet {
        /// Catalog name code.
        name: String,
    },

    /// Select an arbitrary grid.
    SelectGrid {
        /// The net.
        grid: NetGrid,
    },

    /// Choose which occupied cell rests on the table.
    SelectBaseCell {
        /// Index among the occupied cells in row-major order.
        index: usize,
    },

    // ── Folding ─────────────────────────────────────────────────────
    /// Change how hinge angles follow the progress.
    SetAnimationMode {
        /// New mode.
        mode: FoldMode,
    },

    /// Set the fold progress (0 = flat, 100 = closed).
    SetProgress {
        /// Progress, clamped to `[0, 100]`.
        progress: f32,
    },

    /// Start or stop autoplay.
    SetAutoplay {
        /// Whether autoplay should run.
        enabled: bool,
    },

    // ── Pose ────────────────────────────────────────────────────────
    /// Rotate the assembled cube.
    Rotate {
        /// What to rotate to.
        request: RotationRequest,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests() {
        assert_eq!(
            "xp".parse::<RotationRequest>().unwrap(),
            RotationRequest::Turn(RotationOp::XPos)
        );
        assert_eq!(
            "DR".parse::<RotationRequest>().unwrap(),
            RotationRequest::To("DR".parse().unwrap())
        );
        assert_eq!(
            "canonical".parse::<RotationRequest>().unwrap(),
            RotationRequest::Canonical
        );
        assert_eq!(
            "random".parse::<RotationRequest>().unwrap(),
            RotationRequest::Random
        );
    }

    #[test]
    fn test_parse_errors_name_the_input() {
        assert!(matches!(
            "TD".parse::<RotationRequest>(),
            Err(CubeNetError::InvalidOrientationKey(k)) if k == "TD"
        ));
        assert!(matches!(
            "spin".parse::<RotationRequest>(),
            Err(CubeNetError::InvalidRotationOp(k)) if k == "spin"
        ));
    }

    #[test]
    fn test_request_serde() {
        let json =
            serde_json::to_string(&RotationRequest::Turn(RotationOp::YNeg))
                .unwrap();
        assert_eq!(json, r#"{"turn":"yn"}"#);
        let back: RotationRequest =
            serde_json::from_str(r#"{"to":"BR"}"#).unwrap();
        assert_eq!(back, RotationRequest::To("BR".parse().unwrap()));
    }
}
