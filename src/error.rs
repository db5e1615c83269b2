//! Crate-level error types.

use std::fmt;

use crate::net::Cell;
use crate::topology::Face;

/// Why a net was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNetReason {
    /// The grid does not hold exactly six occupied cells.
    CellCount(usize),
    /// The base index does not name one of the six occupied cells.
    BaseCellOutOfRange {
        /// Requested base index.
        index: usize,
    },
    /// Fewer than six cells are reachable from the base cell.
    Disconnected {
        /// Number of cells the traversal reached.
        reached: usize,
    },
    /// Two cells fold onto the same cube face.
    DuplicateFace {
        /// The face claimed twice.
        face: Face,
        /// The second cell that claimed it.
        cell: Cell,
    },
    /// The face tables placed a child on a face that does not border its
    /// parent.
    NotAdjacent {
        /// Parent face.
        parent: Face,
        /// Child face.
        child: Face,
    },
}

impl fmt::Display for InvalidNetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellCount(n) => {
                write!(f, "expected 6 occupied cells, found {n}")
            }
            Self::BaseCellOutOfRange { index } => {
                write!(f, "base cell index {index} is out of range 0..6")
            }
            Self::Disconnected { reached } => {
                write!(f, "only {reached} of 6 cells reachable from the base")
            }
            Self::DuplicateFace { face, cell } => {
                write!(f, "face {face} assigned twice (again at {cell})")
            }
            Self::NotAdjacent { parent, child } => {
                write!(f, "faces {parent} and {child} share no edge")
            }
        }
    }
}

/// Errors produced by the cubenet crate.
#[derive(Debug)]
pub enum CubeNetError {
    /// The net (or the base-cell choice on it) cannot fold into a cube.
    InvalidNet(InvalidNetReason),
    /// A rotation request named an orientation that does not exist.
    InvalidOrientationKey(String),
    /// A rotation request named an unknown quarter-turn operation.
    InvalidRotationOp(String),
    /// A net name code did not match any catalog entry.
    UnknownNet(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CubeNetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNet(reason) => write!(f, "invalid net: {reason}"),
            Self::InvalidOrientationKey(key) => {
                write!(f, "invalid orientation key: '{key}'")
            }
            Self::InvalidRotationOp(op) => {
                write!(f, "invalid rotation op: '{op}'")
            }
            Self::UnknownNet(name) => write!(f, "unknown net: '{name}'"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CubeNetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidNetReason> for CubeNetError {
    fn from(reason: InvalidNetReason) -> Self {
        Self::InvalidNet(reason)
    }
}

impl From<std::io::Error> for CubeNetError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
