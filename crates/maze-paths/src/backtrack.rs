//! Recursive backtracking.

use maze_core::{Coord, Maze};

use crate::Solver;
use crate::trace::TraceHook;

/// One level of the backtracking recursion: the cell being expanded and the
/// index of the next direction to try.
struct Frame {
    at: Coord,
    next_dir: usize,
}

impl Solver {
    /// Solve with recursive backtracking and report visits to `hook`.
    ///
    /// Each cell is marked visited on entry. From the finish the search
    /// unwinds; elsewhere it descends into the neighbours in order and stops
    /// at the first one that reaches the finish. The path is every cell on
    /// the successful branch, start first.
    ///
    /// The recursion runs on an explicit stack of frames, so deep mazes
    /// cannot overflow the thread stack. Visit order and result match the
    /// recursive formulation exactly.
    pub fn backtracking_traced(&mut self, maze: &Maze, hook: &mut impl TraceHook) -> Vec<Coord> {
        let Some((start, finish)) = self.prepare(maze, "backtracking") else {
            return Vec::new();
        };

        self.scratch.visit(start);
        if start == finish {
            return vec![start];
        }

        let mut stack = vec![Frame {
            at: start,
            next_dir: 0,
        }];

        while let Some(top) = stack.last_mut() {
            let neighbors = top.at.neighbors_4();
            let Some(&candidate) = neighbors.get(top.next_dir) else {
                // All four directions failed: unwind.
                stack.pop();
                continue;
            };
            top.next_dir += 1;

            let Some(n) = candidate else {
                continue;
            };
            if !self.scratch.is_open(n) {
                continue;
            }

            self.scratch.visit(n);
            self.report(n, start, finish, hook);

            if n == finish {
                let mut path: Vec<Coord> = stack.iter().map(|f| f.at).collect();
                path.push(n);
                log::debug!(
                    "backtracking: found path of {} cells after {} visits",
                    path.len(),
                    self.visited
                );
                return path;
            }
            stack.push(Frame { at: n, next_dir: 0 });
        }

        log::debug!("backtracking: no path after {} visits", self.visited);
        Vec::new()
    }
}
