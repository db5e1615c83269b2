//! The built-in catalog of hexomino nets.
//!
//! Each primitive shape is drawn once; its variants are the four quarter
//! turns of the drawing, followed by the four quarter turns of its mirror
//! image when the mirror is a different shape.

use std::fmt;

use super::grid::{NetGrid, GRID_SIZE};
use crate::error::CubeNetError;

/// A primitive net drawing.
#[derive(Debug)]
pub struct NetShape {
    /// Display name, e.g. `Pickaxe`.
    pub name: &'static str,
    /// One byte per row; the most significant bit is column 0.
    rows: [u8; GRID_SIZE],
    /// Whether the mirror image is a distinct shape.
    pub flippable: bool,
}

impl NetShape {
    /// The shape as a grid, before any flip or rotation.
    pub fn grid(&self) -> Result<NetGrid, CubeNetError> {
        NetGrid::from_cells(self.rows.map(|bits| {
            std::array::from_fn(|col| bits & (0x80 >> col) != 0)
        }))
    }

    fn variants(&'static self, valid: bool) -> impl Iterator<Item = NetVariant> {
        let flips: &[bool] = if self.flippable {
            &[false, true]
        } else {
            &[false]
        };
        flips.iter().flat_map(move |&flipped| {
            (0..4).map(move |quarter_turns| NetVariant {
                shape: self,
                valid,
                flipped,
                quarter_turns,
            })
        })
    }
}

/// One flip/rotation of a catalog shape.
#[derive(Debug, Clone, Copy)]
pub struct NetVariant {
    /// The primitive drawing.
    pub shape: &'static NetShape,
    /// Whether the shape folds into a cube.
    pub valid: bool,
    /// Mirrored before rotating.
    pub flipped: bool,
    /// Quarter turns applied after the mirror, `0..=3`.
    pub quarter_turns: u8,
}

impl NetVariant {
    /// `Name-r`, or `Name-f-r` for mirrored variants.
    #[must_use]
    pub fn name_code(&self) -> String {
        self.to_string()
    }

    /// The transformed grid.
    pub fn grid(&self) -> Result<NetGrid, CubeNetError> {
        Ok(self.shape.grid()?.transformed(self.flipped, self.quarter_turns))
    }
}

impl fmt::Display for NetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flip = if self.flipped { "-f-" } else { "-" };
        write!(f, "{}{flip}{}", self.shape.name, self.quarter_turns)
    }
}

impl PartialEq for NetVariant {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.shape, other.shape)
            && self.flipped == other.flipped
            && self.quarter_turns == other.quarter_turns
    }
}

impl Eq for NetVariant {}

/// The eleven shapes that fold into a cube.
pub static VALID_SHAPES: [NetShape; 11] = [
    NetShape {
        name: "Pickaxe",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0011_1100,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Pipe-Wrench",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0011_1100,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Pliers",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0011_1100,
            0b0000_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Ring-Spanner",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0011_1100,
            0b0000_0100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Cross",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0001_0000,
            0b0011_1100,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Bone",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0001_0000,
            0b0011_1100,
            0b0000_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Seahorse-1",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0011_0000,
            0b0001_1100,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Seahorse-2",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0011_0000,
            0b0001_1100,
            0b0000_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Seahorse-3",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0011_0000,
            0b0001_1100,
            0b0000_0100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Snake",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0111_0000,
            0b0001_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Stairs",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_0000,
            0b0001_1000,
            0b0000_1100,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
];

/// A selection of shapes that do not fold into a cube.
pub static INVALID_SHAPES: [NetShape; 16] = [
    NetShape {
        name: "Triangle",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0001_0000,
            0b0001_1000,
            0b0001_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Long-T",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0111_1100,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Table",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_1100,
            0b0010_0100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Fork",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0010_1000,
            0b0011_1000,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: false,
    },
    NetShape {
        name: "Trunk",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0111_1100,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Wide-L",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0011_1100,
            0b0010_0000,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "T-junction",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0011_1100,
            0b0001_0000,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Letter-F",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_1100,
            0b0001_0100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Chair",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_1000,
            0b0011_1000,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Waterfall",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_1000,
            0b0011_1000,
            0b0010_0000,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Swivel-Chair",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0010_0000,
            0b0011_1000,
            0b0001_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Spoon",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_0100,
            0b0001_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Long-L",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_1110,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "River",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0010_0000,
            0b0011_0000,
            0b0001_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Diving-Board",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0111_1000,
            0b0000_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
    NetShape {
        name: "Skis",
        rows: [
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0011_1000,
            0b0001_1100,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
        flippable: true,
    },
];

/// All 80 variants of the valid shapes, in catalog order.
#[must_use]
pub fn valid_nets() -> Vec<NetVariant> {
    VALID_SHAPES.iter().flat_map(|s| s.variants(true)).collect()
}

/// All 112 variants of the invalid shapes, in catalog order.
#[must_use]
pub fn invalid_nets() -> Vec<NetVariant> {
    INVALID_SHAPES.iter().flat_map(|s| s.variants(false)).collect()
}

/// Look up a variant by its name code (`Cross-0`, `Bone-f-3`, ...).
pub fn find(name_code: &str) -> Result<NetVariant, CubeNetError> {
    VALID_SHAPES
        .iter()
        .flat_map(|s| s.variants(true))
        .chain(INVALID_SHAPES.iter().flat_map(|s| s.variants(false)))
        .find(|v| v.to_string() == name_code)
        .ok_or_else(|| CubeNetError::UnknownNet(name_code.to_owned()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::net::Cell;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(valid_nets().len(), 80);
        assert_eq!(invalid_nets().len(), 112);
    }

    #[test]
    fn test_every_shape_has_six_cells() {
        for shape in VALID_SHAPES.iter().chain(&INVALID_SHAPES) {
            assert!(shape.grid().is_ok(), "{}", shape.name);
        }
    }

    #[test]
    fn test_name_codes_are_unique() {
        let all: Vec<String> = valid_nets()
            .iter()
            .chain(&invalid_nets())
            .map(NetVariant::name_code)
            .collect();
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_variant_order() {
        let codes: Vec<String> =
            valid_nets().iter().take(9).map(NetVariant::name_code).collect();
        assert_eq!(
            codes,
            [
                "Pickaxe-0",
                "Pickaxe-1",
                "Pickaxe-2",
                "Pickaxe-3",
                "Pipe-Wrench-0",
                "Pipe-Wrench-1",
                "Pipe-Wrench-2",
                "Pipe-Wrench-3",
                "Pipe-Wrench-f-0",
            ]
        );
    }

    #[test]
    fn test_find() {
        let v = find("Bone-f-3").unwrap();
        assert_eq!(v.shape.name, "Bone");
        assert!(v.valid && v.flipped);
        assert_eq!(v.quarter_turns, 3);
        assert!(!find("Skis-f-1").unwrap().valid);
        assert!(matches!(
            find("Pickaxe-f-0"),
            Err(CubeNetError::UnknownNet(_))
        ));
    }

    #[test]
    fn test_pickaxe_cells() {
        let grid = find("Pickaxe-0").unwrap().grid().unwrap();
        let expected = [(2, 2), (3, 2), (3, 3), (3, 4), (3, 5), (4, 2)]
            .map(|(r, c)| Cell::new(r, c));
        assert_eq!(grid.occupied_cells(), &expected);
    }

    #[test]
    fn test_rotated_variant_is_turned() {
        // One counter-clockwise turn moves the Pickaxe handle from row 3 to
        // column 3.
        let grid = find("Pickaxe-1").unwrap().grid().unwrap();
        for row in 2..6 {
            assert!(grid.is_occupied(Cell::new(row, 3)), "row {row}");
        }
    }
}
