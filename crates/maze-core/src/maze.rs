//! The [`Maze`] model: an occupancy grid plus validated start and finish.

use serde_json::Value;

use crate::error::{MazeError, Role};
use crate::geom::Coord;
use crate::grid::Grid;
use crate::validate::{
    is_endpoint, validate_coordinate, validate_coordinate_json, validate_grid,
};

/// A maze: grid, start and finish.
///
/// Construction validates all three together and keeps nothing on failure.
/// Setters re-validate their argument against the current grid and leave
/// the previous value in place when they fail.
///
/// Replacing the grid does not re-check start and finish. Use
/// [`endpoints_valid`](Self::endpoints_valid) to find out whether they
/// still sit on open cells; solvers treat stale endpoints as unsolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Maze {
    grid: Grid,
    start: Coord,
    finish: Coord,
}

impl Maze {
    /// Build a maze from a typed grid and integer coordinates.
    pub fn new(grid: Grid, start: &[i64], finish: &[i64]) -> Result<Self, MazeError> {
        let start = validate_coordinate(Role::Start, start, &grid)?;
        let finish = validate_coordinate(Role::Finish, finish, &grid)?;
        Ok(Self {
            grid,
            start,
            finish,
        })
    }

    /// Build a maze from raw JSON values, the shape the board front-end
    /// sends: `[[0, 1, ...], ...]`, `[row, column]`, `[row, column]`.
    pub fn from_json(grid: &Value, start: &Value, finish: &Value) -> Result<Self, MazeError> {
        let grid = validate_grid(grid)?;
        let start = validate_coordinate_json(Role::Start, start, &grid)?;
        let finish = validate_coordinate_json(Role::Finish, finish, &grid)?;
        Ok(Self {
            grid,
            start,
            finish,
        })
    }

    // -----------------------------------------------------------------------
    // Modifiers
    // -----------------------------------------------------------------------

    /// Replace the grid. Start and finish are kept as they are.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Replace the grid from raw JSON, validating it first.
    pub fn set_grid_json(&mut self, grid: &Value) -> Result<(), MazeError> {
        self.grid = validate_grid(grid)?;
        Ok(())
    }

    /// Move the start point.
    pub fn set_start(&mut self, start: &[i64]) -> Result<(), MazeError> {
        self.start = validate_coordinate(Role::Start, start, &self.grid)?;
        Ok(())
    }

    /// Move the start point from a raw JSON coordinate.
    pub fn set_start_json(&mut self, start: &Value) -> Result<(), MazeError> {
        self.start = validate_coordinate_json(Role::Start, start, &self.grid)?;
        Ok(())
    }

    /// Move the finish point.
    pub fn set_finish(&mut self, finish: &[i64]) -> Result<(), MazeError> {
        self.finish = validate_coordinate(Role::Finish, finish, &self.grid)?;
        Ok(())
    }

    /// Move the finish point from a raw JSON coordinate.
    pub fn set_finish_json(&mut self, finish: &Value) -> Result<(), MazeError> {
        self.finish = validate_coordinate_json(Role::Finish, finish, &self.grid)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Live access to the grid for painting cells in place.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Whether start and finish are still open cells of the current grid.
    pub fn endpoints_valid(&self) -> bool {
        is_endpoint(&self.grid, self.start) && is_endpoint(&self.grid, self.finish)
    }
}
