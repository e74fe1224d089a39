//! Grid coordinates: [`Coord`] and path helpers.
//!
//! Coordinates are `(row, column)` pairs with row 0 at the top. Rows grow
//! downward, columns grow to the right.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position on the maze grid.
///
/// With the `serde` feature a `Coord` is encoded as a two-element array
/// `[row, column]`, the shape the board front-end exchanges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[usize; 2]", into = "[usize; 2]")
)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The cell one row up, or `None` on the top edge.
    #[inline]
    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.row.checked_sub(1)?, self.column))
    }

    /// The cell one column left, or `None` on the left edge.
    #[inline]
    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.column.checked_sub(1)?))
    }

    /// The cell one row down.
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.column)
    }

    /// The cell one column right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.column + 1)
    }

    /// The four orthogonal neighbours in exploration order: up, left, down,
    /// right. Neighbours that would have a negative component are `None`.
    ///
    /// Every solver walks neighbours in this order, which decides which of
    /// several equally long paths gets returned.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Self>; 4] {
        [self.up(), self.left(), Some(self.down()), Some(self.right())]
    }

    /// Whether `other` is exactly one step away along one axis.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }

    /// Linear cell index on a board `columns` wide (`row * columns + column`).
    #[inline]
    pub const fn to_index(self, columns: usize) -> usize {
        self.row * columns + self.column
    }

    /// Inverse of [`to_index`](Self::to_index).
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    #[inline]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        Self::new(index / columns, index % columns)
    }

    /// The coordinate as integer entries, the input shape of the maze
    /// setters.
    pub fn to_entries(self) -> [i64; 2] {
        let to_i64 = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        [to_i64(self.row), to_i64(self.column)]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, column]: [usize; 2]) -> Self {
        Self::new(row, column)
    }
}

impl From<Coord> for [usize; 2] {
    fn from(c: Coord) -> Self {
        [c.row, c.column]
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// The most recent coordinate of a (partial) path.
#[inline]
pub fn path_tail(path: &[Coord]) -> Option<Coord> {
    path.last().copied()
}

/// Whether `path` is a walk from `from` to `to` made of single orthogonal
/// steps that never revisits a cell. The empty path is not a walk.
pub fn is_walk(path: &[Coord], from: Coord, to: Coord) -> bool {
    let (Some(&first), Some(last)) = (path.first(), path_tail(path)) else {
        return false;
    };
    if first != from || last != to {
        return false;
    }
    if !path.windows(2).all(|w| w[0].is_adjacent(w[1])) {
        return false;
    }
    let mut seen: Vec<Coord> = path.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len() == path.len()
}
