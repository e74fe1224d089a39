use std::collections::VecDeque;

use maze_core::{Coord, Maze, path_tail};

use crate::Solver;
use crate::solver::Frontier;
use crate::trace::TraceHook;

impl Solver {
    /// Unified breadth-first / depth-first search over partial paths.
    ///
    /// The worklist holds whole paths, seeded with `[start]`. Each round
    /// pops a path according to `frontier` (front for [`Frontier::Queue`],
    /// back for [`Frontier::Stack`]) and returns it if it ends at the
    /// finish. Otherwise every open neighbour of its last cell is marked
    /// visited right away, so no cell is queued twice, and the extended
    /// path is pushed to the back.
    ///
    /// With a queue the result is a shortest path. Returns an empty vector
    /// when the worklist runs dry.
    pub fn traverse(
        &mut self,
        maze: &Maze,
        frontier: Frontier,
        hook: &mut impl TraceHook,
    ) -> Vec<Coord> {
        let what = frontier.tag();
        let Some((start, finish)) = self.prepare(maze, what) else {
            return Vec::new();
        };

        self.scratch.visit(start);
        let mut worklist: VecDeque<Vec<Coord>> = VecDeque::from([vec![start]]);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expansions = 0usize;

        let found = loop {
            let Some(path) = frontier.pop(&mut worklist) else {
                break None;
            };
            let Some(current) = path_tail(&path) else {
                continue;
            };
            if current == finish {
                break Some(path);
            }
            expansions += 1;

            let open = nbuf.cardinal(current, |n| self.scratch.is_open(n));
            for &n in open {
                self.scratch.visit(n);
                self.report(n, start, finish, hook);
                let mut next = Vec::with_capacity(path.len() + 1);
                next.extend_from_slice(&path);
                next.push(n);
                worklist.push_back(next);
            }
        };

        self.nbuf = nbuf;

        match found {
            Some(path) => {
                log::debug!(
                    "{what}: found path of {} cells after {expansions} expansions, {} visits",
                    path.len(),
                    self.visited
                );
                path
            }
            None => {
                log::debug!(
                    "{what}: no path after {expansions} expansions, {} visits",
                    self.visited
                );
                Vec::new()
            }
        }
    }
}
