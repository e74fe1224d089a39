//! Solver-private working copy of the maze grid.

use maze_core::{Cell, Coord, Grid};

/// State of a scratch cell during one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Open,
    Closed,
    Visited,
}

impl From<Cell> for Mark {
    fn from(c: Cell) -> Self {
        match c {
            Cell::Open => Self::Open,
            Cell::Closed => Self::Closed,
        }
    }
}

/// Copy of a [`Grid`] with a third "visited" state. Rebuilt from the maze
/// at the start of every solve; the maze itself is never written.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    marks: Vec<Vec<Mark>>,
}

impl Scratch {
    /// Overwrite the scratch grid with `grid`, reusing allocations.
    pub(crate) fn reset(&mut self, grid: &Grid) {
        let rows = grid.as_rows();
        self.marks.resize_with(rows.len(), Vec::new);
        for (dst, src) in self.marks.iter_mut().zip(rows) {
            dst.clear();
            dst.extend(src.iter().map(|&c| Mark::from(c)));
        }
    }

    #[inline]
    pub(crate) fn at(&self, c: Coord) -> Option<Mark> {
        self.marks.get(c.row)?.get(c.column).copied()
    }

    /// In bounds and neither closed nor visited.
    #[inline]
    pub(crate) fn is_open(&self, c: Coord) -> bool {
        self.at(c) == Some(Mark::Open)
    }

    /// Mark `c` visited. Out-of-bounds coordinates are ignored.
    #[inline]
    pub(crate) fn visit(&mut self, c: Coord) {
        if let Some(m) = self.marks.get_mut(c.row).and_then(|r| r.get_mut(c.column)) {
            *m = Mark::Visited;
        }
    }
}
