//! Maze solving algorithms for binary grids.
//!
//! This crate finds a route from a maze's start to its finish through open
//! cells, moving only up, down, left and right:
//!
//! - **Recursive backtracking** ([`Solver::backtracking`]): depth-first,
//!   returns the first branch that reaches the finish
//! - **Breadth-first search** ([`Solver::bfs`]): returns a shortest path
//! - **Depth-first search** ([`Solver::dfs`]): stack-ordered search over
//!   partial paths
//!
//! Every solver explores neighbours in the same order (up, left, down,
//! right), so results are deterministic. An empty path means the finish is
//! unreachable.
//!
//! All algorithms run through [`Solver`], which owns and reuses its scratch
//! grid between solves. The `*_traced` variants report each newly visited
//! cell to a [`TraceHook`] for step-by-step visualisation.

mod backtrack;
mod neighbors;
mod scratch;
mod solver;
mod trace;
mod xfs;

pub use neighbors::Neighbors;
pub use solver::{Algorithm, Frontier, Solver};
pub use trace::{NoTrace, TraceHook, VisitLog};

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Coord, Grid, Maze, MazeError, is_walk};

    fn ten_by_ten() -> Maze {
        let rows: [&[i64]; 10] = [
            &[0, 0, 0, 1, 0, 1, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 1, 1, 0, 0, 1],
            &[0, 1, 1, 1, 0, 0, 1, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            &[0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0, 1, 1, 0, 1, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0],
            &[0, 1, 0, 1, 0, 0, 0, 0, 0, 0],
            &[0, 1, 0, 0, 1, 0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
        ];
        Maze::new(Grid::from_ints(&rows).unwrap(), &[0, 0], &[9, 9]).unwrap()
    }

    #[test]
    fn every_result_is_a_walk() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        for a in Algorithm::ALL {
            let path = solver.solve(&m, a);
            assert!(is_walk(&path, m.start(), m.finish()), "{a}: {path:?}");
            assert!(path.iter().all(|&c| m.grid().is_open(c)), "{a}");
        }
    }

    #[test]
    fn bfs_is_never_longer() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        let bfs = solver.bfs(&m).len();
        assert_eq!(bfs, 19);
        assert!(bfs <= solver.dfs(&m).len());
        assert_eq!(solver.backtracking(&m).len(), 53);
    }

    #[test]
    fn repeated_solves_are_identical() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        for a in Algorithm::ALL {
            let mut first = VisitLog::default();
            let mut second = VisitLog::default();
            let p1 = solver.solve_traced(&m, a, &mut first);
            let p2 = solver.solve_traced(&m, a, &mut second);
            assert_eq!(p1, p2, "{a}");
            assert_eq!(first, second, "{a}");
        }
        // The maze is only read.
        assert_eq!(m, ten_by_ten());
    }

    #[test]
    fn trace_cells_are_distinct_and_open() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        for a in Algorithm::ALL {
            let mut visits = VisitLog::default();
            solver.solve_traced(&m, a, &mut visits);
            let mut sorted = visits.cells.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), visits.cells.len(), "{a}");
            assert!(visits.cells.iter().all(|&c| m.grid().is_open(c)));
            assert!(!visits.cells.contains(&m.start()));
            assert!(!visits.cells.contains(&m.finish()));
        }
    }

    #[test]
    fn solve_by_name() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        assert_eq!(solver.solve_named(&m, "bfs").unwrap().len(), 19);
        assert_eq!(
            solver.solve_named(&m, "invalid input"),
            Err(MazeError::InvalidAlgorithmKind("invalid input".into()))
        );
    }

    #[test]
    fn stale_endpoints_give_no_path() {
        let mut m = ten_by_ten();
        let mut walled = Grid::new(10, 10);
        walled.set(Coord::new(9, 9), maze_core::Cell::Closed);
        m.set_grid(walled);
        assert!(!m.endpoints_valid());
        let mut solver = Solver::new();
        for a in Algorithm::ALL {
            assert!(solver.solve(&m, a).is_empty(), "{a}");
        }

        m.set_grid(Grid::new(3, 3));
        assert!(solver.bfs(&m).is_empty());
    }

    #[test]
    fn closure_hook_sees_every_visit() {
        let m = ten_by_ten();
        let mut solver = Solver::new();
        let mut count = 0usize;
        solver.dfs_traced(&m, &mut |_: Coord| count += 1);
        assert_eq!(count, solver.last_visited());
        assert!(count > 0);
    }
}
