//! The 8×8 occupancy grid a net is drawn on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CubeNetError, InvalidNetReason};
use crate::topology::Edge;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 8;

/// Number of occupied cells in a net (one per cube face).
pub const NET_CELLS: usize = 6;

const SIDE: u8 = 8;
const END: u8 = SIDE - 1;

/// A grid coordinate. Rows grow downward (+Z on the table), columns grow to
/// the right (+X).
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
)]
pub struct Cell {
    /// Row, `0..8`.
    pub row: u8,
    /// Column, `0..8`.
    pub col: u8,
}

impl Cell {
    /// Cell at `(row, col)`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell across `edge`, or `None` off the grid.
    #[must_use]
    pub fn step(self, edge: Edge) -> Option<Cell> {
        let (dr, dc) = edge.grid_step();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (usize::from(row) < GRID_SIZE && usize::from(col) < GRID_SIZE)
            .then_some(Cell { row, col })
    }

    /// Where this cell lands after mirroring columns (if `flip`) and then
    /// rotating the grid by `quarter_turns` counter-clockwise.
    #[must_use]
    pub const fn transformed(self, flip: bool, quarter_turns: u8) -> Cell {
        let (r, c) = if flip {
            (self.row, END - self.col)
        } else {
            (self.row, self.col)
        };
        match quarter_turns & 3 {
            0 => Cell::new(r, c),
            1 => Cell::new(END - c, r),
            2 => Cell::new(END - r, END - c),
            _ => Cell::new(c, END - r),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable 8×8 grid with exactly six occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
    /// Occupied cells in row-major order.
    occupied: [Cell; NET_CELLS],
}

impl NetGrid {
    /// Build from a 0/1 matrix; any nonzero entry counts as occupied.
    pub fn from_rows(
        rows: [[u8; GRID_SIZE]; GRID_SIZE],
    ) -> Result<Self, CubeNetError> {
        Self::from_cells(rows.map(|row| row.map(|v| v != 0)))
    }

    /// Build from a boolean matrix.
    ///
    /// Fails with [`InvalidNetReason::CellCount`] unless exactly six cells
    /// are occupied.
    pub fn from_cells(
        cells: [[bool; GRID_SIZE]; GRID_SIZE],
    ) -> Result<Self, CubeNetError> {
        let found: Vec<Cell> = (0..SIDE)
            .flat_map(|row| (0..SIDE).map(move |col| Cell::new(row, col)))
            .filter(|cell| cells[usize::from(cell.row)][usize::from(cell.col)])
            .collect();
        let occupied: [Cell; NET_CELLS] = found
            .try_into()
            .map_err(|v: Vec<Cell>| InvalidNetReason::CellCount(v.len()))?;
        Ok(Self { cells, occupied })
    }

    /// The six occupied cells in row-major order.
    #[must_use]
    pub const fn occupied_cells(&self) -> &[Cell; NET_CELLS] {
        &self.occupied
    }

    /// The occupied cell chosen by a base index.
    pub fn base_cell(&self, index: usize) -> Result<Cell, CubeNetError> {
        self.occupied
            .get(index)
            .copied()
            .ok_or_else(|| InvalidNetReason::BaseCellOutOfRange { index }.into())
    }

    /// Whether `cell` is part of the net.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells
            .get(usize::from(cell.row))
            .and_then(|row| row.get(usize::from(cell.col)))
            .copied()
            .unwrap_or(false)
    }

    /// The grid as a 0/1 matrix.
    #[must_use]
    pub fn rows(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|row| row.map(u8::from))
    }

    /// Mirror the columns (if `flip`), then rotate by `quarter_turns`.
    ///
    /// Rotation by one turn reads `out[i][j] = in[j][7 - i]`.
    #[must_use]
    pub fn transformed(&self, flip: bool, quarter_turns: u8) -> NetGrid {
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        let mut occupied =
            self.occupied.map(|cell| cell.transformed(flip, quarter_turns));
        for cell in occupied {
            cells[usize::from(cell.row)][usize::from(cell.col)] = true;
        }
        occupied.sort_unstable();
        NetGrid { cells, occupied }
    }
}

impl fmt::Display for NetGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &set in row {
                f.write_str(if set { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
