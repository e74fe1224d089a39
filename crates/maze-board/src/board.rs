use maze_core::{Cell, Coord, Grid, Maze, Role};
use maze_paths::{Algorithm, Solver};
use rand::Rng;

use crate::config::BoardConfig;
use crate::document::{CellDocument, ClassBoard};
use crate::error::BoardError;
use crate::layout::{default_finish, default_start};
use crate::paint;
use crate::trace::DocumentTrace;

/// A maze board session: a cell document of fixed size together with the
/// current start and finish.
///
/// This is the state behind an interactive maze page. Edits go straight to
/// the document; [`solve`](Self::solve) reads the grid back, animates the
/// search through [`DocumentTrace`] and paints the resulting path.
pub struct Board<D> {
    doc: D,
    rows: usize,
    columns: usize,
    start: Coord,
    finish: Coord,
    cfg: BoardConfig,
    solver: Solver,
}

impl Board<ClassBoard> {
    /// An in-memory board laid out by [`ClassBoard::new`].
    pub fn headless(rows: usize, columns: usize, cfg: BoardConfig) -> Self {
        let doc = ClassBoard::new(rows, columns, &cfg);
        Self::new(doc, rows, columns, cfg)
    }
}

impl<D: CellDocument> Board<D> {
    /// Wrap a document already laid out with the start and finish at their
    /// default positions.
    pub fn new(doc: D, rows: usize, columns: usize, cfg: BoardConfig) -> Self {
        Self {
            doc,
            rows,
            columns,
            start: default_start(columns, rows),
            finish: default_finish(columns, rows),
            cfg,
            solver: Solver::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn config(&self) -> &BoardConfig {
        &self.cfg
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.rows * self.columns
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Row-major index of `c`, or [`BoardError::OutOfBounds`].
    fn index(&self, c: Coord) -> Result<usize, BoardError> {
        if c.row >= self.rows || c.column >= self.columns {
            return Err(BoardError::OutOfBounds(c));
        }
        Ok(c.to_index(self.columns))
    }

    /// Flip a wall. See [`paint::toggle_cell`].
    pub fn toggle(&mut self, c: Coord) -> Result<Option<Cell>, BoardError> {
        let index = self.index(c)?;
        paint::toggle_cell(&mut self.doc, index, &self.cfg)
    }

    /// Move the start marker to `to`. Returns `false` if `to` is already
    /// an endpoint.
    pub fn move_start(&mut self, to: Coord) -> Result<bool, BoardError> {
        self.index(to)?;
        let moved = paint::move_endpoint(
            &mut self.doc,
            Role::Start,
            self.start,
            to,
            self.columns,
            &self.cfg,
        )?;
        if moved {
            self.start = to;
        }
        Ok(moved)
    }

    /// Move the finish marker to `to`. Returns `false` if `to` is already
    /// an endpoint.
    pub fn move_finish(&mut self, to: Coord) -> Result<bool, BoardError> {
        self.index(to)?;
        let moved = paint::move_endpoint(
            &mut self.doc,
            Role::Finish,
            self.finish,
            to,
            self.columns,
            &self.cfg,
        )?;
        if moved {
            self.finish = to;
        }
        Ok(moved)
    }

    pub fn clear_path(&mut self) -> Result<(), BoardError> {
        let n = self.num_cells();
        paint::clear_path(&mut self.doc, n, &self.cfg)
    }

    pub fn clear_maze(&mut self) -> Result<(), BoardError> {
        let n = self.num_cells();
        paint::clear_maze(&mut self.doc, n, &self.cfg)
    }

    /// Random walls. Returns the number placed.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Result<usize, BoardError> {
        let n = self.num_cells();
        paint::generate_maze(&mut self.doc, n, rng, &self.cfg)
    }

    /// The current walls as a [`Grid`].
    pub fn read_grid(&mut self) -> Result<Grid, BoardError> {
        paint::read_grid(&mut self.doc, self.rows, self.columns, &self.cfg)
    }

    /// Solve the board as drawn.
    ///
    /// Clears any previous result, reads the grid, runs `algorithm` with
    /// visited cells painted as they are reached, then marks the path. An
    /// empty path means the maze is unsolvable; nothing is marked then.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<Vec<Coord>, BoardError> {
        self.clear_path()?;
        let grid = self.read_grid()?;
        let maze = Maze::new(grid, &self.start.to_entries(), &self.finish.to_entries())?;

        let mut hook = DocumentTrace::new(&mut self.doc, self.columns, &self.cfg);
        let path = self.solver.solve_traced(&maze, algorithm, &mut hook);
        let painted = hook.painted();

        if path.is_empty() {
            log::info!("{algorithm}: maze is unsolvable ({painted} cells explored)");
            return Ok(path);
        }
        paint::mark_path(&mut self.doc, &path, self.columns, &self.cfg)?;
        log::debug!(
            "{algorithm}: path of {} cells, {painted} cells explored",
            path.len()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CellElement;
    use maze_core::{CoordFault, MazeError, is_walk};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> Board<ClassBoard> {
        // 5x5: start at (2, 1), finish at (2, 3).
        Board::headless(5, 5, BoardConfig::instant())
    }

    #[test]
    fn default_endpoints() {
        let b = board();
        assert_eq!(b.start(), Coord::new(2, 1));
        assert_eq!(b.finish(), Coord::new(2, 3));
        assert_eq!(b.num_cells(), 25);
    }

    #[test]
    fn solve_marks_path_and_visits() {
        let mut b = board();
        b.toggle(Coord::new(2, 2)).unwrap();
        let path = b.solve(Algorithm::Bfs).unwrap();
        assert_eq!(
            path,
            [
                Coord::new(2, 1),
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(1, 3),
                Coord::new(2, 3),
            ]
        );
        let cfg = b.config().clone();
        let doc = b.document();
        let mut marked = doc.cells_with(&cfg.path_class);
        marked.sort_unstable();
        let mut expected = path.clone();
        expected.sort_unstable();
        assert_eq!(marked, expected);
        assert!(!doc.cells_with(&cfg.visited_class).is_empty());
        assert!(
            doc.cells_with(&cfg.visited_class)
                .iter()
                .all(|&c| c != b.start() && c != b.finish())
        );
    }

    #[test]
    fn resolving_clears_previous_marks() {
        let mut b = board();
        for a in Algorithm::ALL {
            let path = b.solve(a).unwrap();
            assert!(is_walk(&path, b.start(), b.finish()), "{a}");
            assert_eq!(b.document().cells_with(&b.config().path_class).len(), path.len());
        }
    }

    #[test]
    fn edits_past_the_edge_are_rejected() {
        let mut b = board();
        let right = Coord::new(0, 5);
        let below = Coord::new(5, 0);
        assert_eq!(b.toggle(right), Err(BoardError::OutOfBounds(right)));
        assert_eq!(b.toggle(below), Err(BoardError::OutOfBounds(below)));
        assert!(b.document().cells_with(&b.config().closed_class).is_empty());

        let far = Coord::new(0, 7);
        assert_eq!(b.move_start(far), Err(BoardError::OutOfBounds(far)));
        assert_eq!(b.move_finish(below), Err(BoardError::OutOfBounds(below)));
        assert_eq!(b.start(), Coord::new(2, 1));
        assert_eq!(b.finish(), Coord::new(2, 3));
        assert_eq!(
            b.document().cells_with(&b.config().start_class),
            [Coord::new(2, 1)]
        );

        // The board is still consistent and solvable.
        assert_eq!(b.solve(Algorithm::Bfs).unwrap().len(), 3);
    }

    #[test]
    fn session_edits_and_clears() {
        let mut b = board();
        assert_eq!(b.toggle(Coord::new(0, 0)), Ok(Some(Cell::Closed)));
        assert_eq!(b.toggle(b.start()), Ok(None));
        b.solve(Algorithm::Dfs).unwrap();
        b.clear_path().unwrap();
        let cfg = b.config().clone();
        assert!(b.document().cells_with(&cfg.path_class).is_empty());
        assert!(b.document().cells_with(&cfg.visited_class).is_empty());
        assert_eq!(b.read_grid().unwrap().count(Cell::Closed), 1);
        b.clear_maze().unwrap();
        assert_eq!(b.read_grid().unwrap().count(Cell::Closed), 0);
    }

    #[test]
    fn walled_in_finish_is_unsolvable() {
        let mut b = board();
        for c in [(1, 3), (2, 2), (2, 4), (3, 3)] {
            b.toggle(Coord::from(c)).unwrap();
        }
        let path = b.solve(Algorithm::Dfs).unwrap();
        assert!(path.is_empty());
        assert!(b.document().cells_with(&b.config().path_class).is_empty());
    }

    #[test]
    fn moved_endpoints_are_used() {
        let mut b = board();
        assert!(b.move_start(Coord::ORIGIN).unwrap());
        assert!(b.move_finish(Coord::new(4, 4)).unwrap());
        assert!(!b.move_start(Coord::new(4, 4)).unwrap());
        assert_eq!(b.start(), Coord::ORIGIN);

        let path = b.solve(Algorithm::Bfs).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&Coord::ORIGIN));
        assert_eq!(path.last(), Some(&Coord::new(4, 4)));
    }

    #[test]
    fn generated_board_solves_or_reports_empty() {
        let mut b = board();
        let mut rng = StdRng::seed_from_u64(3);
        b.generate(&mut rng).unwrap();
        let grid = b.read_grid().unwrap();
        assert!(grid.is_open(b.start()));
        assert!(grid.is_open(b.finish()));
        let path = b.solve(Algorithm::Backtracking).unwrap();
        assert!(path.is_empty() || is_walk(&path, b.start(), b.finish()));

        b.clear_maze().unwrap();
        assert_eq!(b.read_grid().unwrap().count(Cell::Closed), 0);
    }

    #[test]
    fn endpoint_off_the_board_is_a_maze_error() {
        let mut b = board();
        // Session start below the last row.
        b.start = Coord::new(9, 0);
        let err = b.solve(Algorithm::Bfs).unwrap_err();
        assert_eq!(
            err,
            BoardError::Maze(MazeError::InvalidCoordinate {
                role: Role::Start,
                fault: CoordFault::RowOutOfBounds,
            })
        );
    }

    #[test]
    fn document_access() {
        let mut b = board();
        b.document_mut()
            .element_by_id("cell-0")
            .unwrap()
            .add_class("highlight");
        assert!(b.document().cell(Coord::ORIGIN).unwrap().has_class("highlight"));
    }
}
