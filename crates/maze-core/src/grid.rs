//! Binary occupancy grid.
//!
//! [`Cell`] is either open or closed. [`Grid`] stores rows of cells in
//! row-major order. Rows may differ in length: every bounds check is done
//! against the length of the row being indexed.

use crate::error::{GridFault, MazeError};
use crate::geom::Coord;

/// Occupancy of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Cell {
    /// Walkable (`0`).
    #[default]
    Open,
    /// Wall (`1`).
    Closed,
}

impl Cell {
    /// Decode the integer encoding (`0` open, `1` closed).
    pub fn from_int(v: i64) -> Result<Self, MazeError> {
        match v {
            0 => Ok(Self::Open),
            1 => Ok(Self::Closed),
            _ => Err(MazeError::InvalidGrid(GridFault::NotBinary)),
        }
    }

    /// The integer encoding of this cell.
    pub const fn to_int(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The other state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = MazeError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_int(i64::from(v))
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> Self {
        c.to_int()
    }
}

/// A 2D grid of [`Cell`]s, indexed by [`Coord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a `rows` x `columns` grid with every cell open.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![Cell::Open; columns]; rows],
        }
    }

    /// Wrap already-typed rows.
    pub fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    /// Build a grid from integer rows, rejecting anything but 0 and 1.
    pub fn from_ints(rows: &[&[i64]]) -> Result<Self, MazeError> {
        let cells = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| Cell::from_int(v))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<Vec<Cell>>, _>>()?;
        Ok(Self { cells })
    }

    /// Fold a flat, row-major cell list into a `rows` x `columns` grid.
    ///
    /// Fails when `list.len() != rows * columns`.
    pub fn from_list(list: &[Cell], rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows.checked_mul(columns) != Some(list.len()) {
            return Err(MazeError::InvalidGrid(GridFault::ListLength));
        }
        if columns == 0 {
            return Ok(Self::new(rows, 0));
        }
        let cells = list.chunks(columns).map(<[Cell]>::to_vec).collect();
        Ok(Self { cells })
    }

    /// Flatten to a row-major cell list.
    pub fn to_list(&self) -> Vec<Cell> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the first row, which is the board width used for linear
    /// cell indices. Zero for an empty grid.
    #[inline]
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Length of a given row, or `None` if the row does not exist.
    #[inline]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.cells.get(row).map(Vec::len)
    }

    /// Whether `c` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.at(c).is_some()
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.cells.get(c.row)?.get(c.column).copied()
    }

    /// Whether `c` is in bounds and open.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_open)
    }

    /// Set the cell at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(c.row).and_then(|r| r.get_mut(c.column)) {
            *slot = cell;
        }
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// The raw rows.
    pub fn as_rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}
