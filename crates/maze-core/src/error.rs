//! Error taxonomy for maze construction and solver dispatch.

use std::fmt;

/// Which endpoint a coordinate error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Finish,
}

impl Role {
    /// The field name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Finish => "finish",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a grid is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFault {
    /// The grid is not an array.
    NotArray,
    /// A row of the grid is not an array.
    RowNotArray,
    /// An entry is not an integer.
    NonInteger,
    /// An entry is an integer other than 0 or 1.
    NotBinary,
    /// A flat cell list does not match `rows * columns`.
    ListLength,
}

/// Reasons a start/finish coordinate is rejected, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordFault {
    NotArray,
    WrongLength,
    NonInteger,
    Negative,
    RowOutOfBounds,
    ColumnOutOfBounds,
    ClosedCell,
}

/// Errors raised while building or mutating a [`Maze`](crate::Maze), or
/// while dispatching a solver by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidGrid(GridFault),
    InvalidCoordinate { role: Role, fault: CoordFault },
    /// A traversal tag outside the known set.
    InvalidAlgorithmKind(String),
}

impl MazeError {
    pub(crate) const fn coord(role: Role, fault: CoordFault) -> Self {
        Self::InvalidCoordinate { role, fault }
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(fault) => match fault {
                GridFault::NotArray => f.write_str("'grid' must be an array!"),
                GridFault::RowNotArray => f.write_str("'grid' rows must be arrays!"),
                GridFault::NonInteger => f.write_str("'grid' entries must be integers!"),
                GridFault::NotBinary => {
                    f.write_str("'grid' entries must only contain 0's and 1's!")
                }
                GridFault::ListLength => f.write_str(
                    "'list' length must be equivalent to the product of the 'numRows' & 'numColumns'!",
                ),
            },
            Self::InvalidCoordinate { role, fault } => match fault {
                CoordFault::NotArray => write!(f, "'{role}' must be an array!"),
                CoordFault::WrongLength => write!(f, "'{role}' must be an array of length 2!"),
                CoordFault::NonInteger => write!(f, "'{role}' entries must be integers!"),
                CoordFault::Negative => write!(f, "'{role}' entries cannot be negative!"),
                CoordFault::RowOutOfBounds => write!(
                    f,
                    "'{role}' first entry cannot exceed the number of rows in 'grid'!"
                ),
                CoordFault::ColumnOutOfBounds => write!(
                    f,
                    "'{role}' second entry cannot exceed the number of columns in 'grid'!"
                ),
                CoordFault::ClosedCell => {
                    write!(f, "'{role}' cannot be located on a closed cell!")
                }
            },
            Self::InvalidAlgorithmKind(_) => {
                f.write_str("The provided algorithm must be either 'bfs' or 'dfs'!")
            }
        }
    }
}

impl std::error::Error for MazeError {}
