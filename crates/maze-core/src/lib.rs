//! **maze-core** - the data model for grid maze solvers.
//!
//! This crate provides the types shared across the *maze* workspace:
//! coordinates, the binary occupancy [`Grid`], input validation with stable
//! error messages, and the [`Maze`] model that owns a grid together with its
//! start and finish points.

pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;
pub mod validate;

pub use error::{CoordFault, GridFault, MazeError, Role};
pub use geom::{Coord, is_walk, path_tail};
pub use grid::{Cell, Grid};
pub use maze::Maze;
