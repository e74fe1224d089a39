use std::fmt;

use maze_core::{Coord, MazeError};

/// Errors from reading or painting a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The cell count passed in was zero.
    InvalidCellCount,
    /// No element carries the given id.
    MissingCell(String),
    /// The coordinate lies outside the board.
    OutOfBounds(Coord),
    /// The grid or endpoints read from the board were rejected.
    Maze(MazeError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellCount => f.write_str("'numCells' must be a positive integer!"),
            Self::MissingCell(id) => write!(f, "board has no cell with id \u{201c}{id}\u{201d}"),
            Self::OutOfBounds(c) => write!(f, "cell {c} is outside the board"),
            Self::Maze(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MazeError> for BoardError {
    fn from(err: MazeError) -> Self {
        Self::Maze(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::GridFault;
    use std::error::Error;

    #[test]
    fn messages() {
        assert_eq!(
            BoardError::InvalidCellCount.to_string(),
            "'numCells' must be a positive integer!"
        );
        assert_eq!(
            BoardError::MissingCell("cell-9".into()).to_string(),
            "board has no cell with id \u{201c}cell-9\u{201d}"
        );
        assert_eq!(
            BoardError::OutOfBounds(Coord::new(0, 5)).to_string(),
            "cell [0, 5] is outside the board"
        );
        let wrapped = BoardError::from(MazeError::InvalidGrid(GridFault::ListLength));
        assert_eq!(
            wrapped.to_string(),
            "'list' length must be equivalent to the product of the 'numRows' & 'numColumns'!"
        );
        assert!(wrapped.source().is_some());
    }
}
