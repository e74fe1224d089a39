use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use maze_core::{Coord, Maze, MazeError};

use crate::neighbors::Neighbors;
use crate::scratch::Scratch;
use crate::trace::{NoTrace, TraceHook};

// ---------------------------------------------------------------------------
// Algorithm / Frontier
// ---------------------------------------------------------------------------

/// Worklist discipline of the unified breadth/depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frontier {
    /// First in, first out: breadth-first search.
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Queue,
    /// Last in, first out: depth-first search.
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    Stack,
}

impl Frontier {
    /// Take the next entry off `worklist` according to this discipline.
    #[inline]
    pub fn pop<T>(self, worklist: &mut VecDeque<T>) -> Option<T> {
        match self {
            Self::Queue => worklist.pop_front(),
            Self::Stack => worklist.pop_back(),
        }
    }

    /// Short tag: `bfs` or `dfs`.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Queue => "bfs",
            Self::Stack => "dfs",
        }
    }
}

impl FromStr for Frontier {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Queue),
            "dfs" => Ok(Self::Stack),
            other => Err(MazeError::InvalidAlgorithmKind(other.to_string())),
        }
    }
}

/// The available maze solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Algorithm {
    /// Recursive backtracking (depth-first, path built while unwinding).
    Backtracking,
    /// Breadth-first search; returns a shortest path.
    Bfs,
    /// Depth-first search over partial paths.
    Dfs,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::Backtracking, Self::Bfs, Self::Dfs];

    /// The short name used by front-ends (`backtracking`, `bfs`, `dfs`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Backtracking => "backtracking",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl From<Frontier> for Algorithm {
    fn from(f: Frontier) -> Self {
        match f {
            Frontier::Queue => Self::Bfs,
            Frontier::Stack => Self::Dfs,
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "backtracking" {
            return Ok(Self::Backtracking);
        }
        s.parse::<Frontier>().map(Self::from)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs the maze solvers.
///
/// `Solver` owns the scratch grid and neighbour buffer so that repeated
/// solves reuse their allocations. The scratch grid is rebuilt from the maze
/// on every call, so results never depend on earlier calls.
///
/// All solvers explore neighbours up, left, down, right. An empty path means
/// the finish cannot be reached from the start.
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) scratch: Scratch,
    pub(crate) nbuf: Neighbors,
    pub(crate) visited: usize,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells reported as visited by the last solve.
    #[inline]
    pub fn last_visited(&self) -> usize {
        self.visited
    }

    /// Solve with the given algorithm.
    pub fn solve(&mut self, maze: &Maze, algorithm: Algorithm) -> Vec<Coord> {
        self.solve_traced(maze, algorithm, &mut NoTrace)
    }

    /// Solve with the given algorithm, reporting each visited cell to
    /// `hook`.
    pub fn solve_traced(
        &mut self,
        maze: &Maze,
        algorithm: Algorithm,
        hook: &mut impl TraceHook,
    ) -> Vec<Coord> {
        match algorithm {
            Algorithm::Backtracking => self.backtracking_traced(maze, hook),
            Algorithm::Bfs => self.traverse(maze, Frontier::Queue, hook),
            Algorithm::Dfs => self.traverse(maze, Frontier::Stack, hook),
        }
    }

    /// Solve by name (`backtracking`, `bfs` or `dfs`).
    pub fn solve_named(&mut self, maze: &Maze, name: &str) -> Result<Vec<Coord>, MazeError> {
        let algorithm = name.parse::<Algorithm>()?;
        Ok(self.solve(maze, algorithm))
    }

    pub fn backtracking(&mut self, maze: &Maze) -> Vec<Coord> {
        self.backtracking_traced(maze, &mut NoTrace)
    }

    pub fn bfs(&mut self, maze: &Maze) -> Vec<Coord> {
        self.traverse(maze, Frontier::Queue, &mut NoTrace)
    }

    pub fn bfs_traced(&mut self, maze: &Maze, hook: &mut impl TraceHook) -> Vec<Coord> {
        self.traverse(maze, Frontier::Queue, hook)
    }

    pub fn dfs(&mut self, maze: &Maze) -> Vec<Coord> {
        self.traverse(maze, Frontier::Stack, &mut NoTrace)
    }

    pub fn dfs_traced(&mut self, maze: &Maze, hook: &mut impl TraceHook) -> Vec<Coord> {
        self.traverse(maze, Frontier::Stack, hook)
    }

    /// Load the maze into the scratch grid and snapshot its endpoints.
    ///
    /// Returns `None` if the start or finish no longer sit on open cells,
    /// which can happen after the grid was replaced without re-validating
    /// them.
    pub(crate) fn prepare(&mut self, maze: &Maze, what: &str) -> Option<(Coord, Coord)> {
        self.visited = 0;
        self.scratch.reset(maze.grid());
        let (start, finish) = (maze.start(), maze.finish());
        if !maze.endpoints_valid() {
            log::warn!(
                "{what}: start {start} or finish {finish} is not an open cell of the grid; \
                 treating maze as unsolvable"
            );
            return None;
        }
        log::debug!(
            "{what}: solving {}x{} maze from {start} to {finish}",
            maze.grid().rows(),
            maze.grid().columns()
        );
        Some((start, finish))
    }

    /// Report a newly visited cell, skipping the endpoints.
    #[inline]
    pub(crate) fn report(
        &mut self,
        cell: Coord,
        start: Coord,
        finish: Coord,
        hook: &mut impl TraceHook,
    ) {
        if cell == start || cell == finish {
            return;
        }
        self.visited += 1;
        log::trace!("visit {cell}");
        hook.visit(cell);
    }
}
