use std::thread;

use maze_core::Coord;
use maze_paths::TraceHook;

use crate::config::BoardConfig;
use crate::document::{CellDocument, CellElement};

/// [`TraceHook`] that paints each visited cell on a document.
///
/// Every reported cell gets the visited class, then the hook sleeps for the
/// configured delay so the search can be watched. Cells carrying the start
/// or finish class are left alone. A cell missing from the document is
/// logged and skipped.
pub struct DocumentTrace<'d, D> {
    doc: &'d mut D,
    columns: usize,
    cfg: &'d BoardConfig,
    painted: usize,
}

impl<'d, D: CellDocument> DocumentTrace<'d, D> {
    pub fn new(doc: &'d mut D, columns: usize, cfg: &'d BoardConfig) -> Self {
        Self {
            doc,
            columns,
            cfg,
            painted: 0,
        }
    }

    /// Number of cells painted so far.
    pub fn painted(&self) -> usize {
        self.painted
    }
}

impl<D: CellDocument> TraceHook for DocumentTrace<'_, D> {
    fn visit(&mut self, cell: Coord) {
        let id = self.cfg.cell_id(cell.to_index(self.columns));
        let Some(el) = self.doc.element_by_id(&id) else {
            log::warn!("trace: no element {id} for visited cell {cell}");
            return;
        };
        if el.has_class(&self.cfg.start_class) || el.has_class(&self.cfg.finish_class) {
            return;
        }
        el.add_class(&self.cfg.visited_class);
        self.painted += 1;

        let delay = self.cfg.trace_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ClassBoard;

    #[test]
    fn paints_visited_cells() {
        let cfg = BoardConfig::instant();
        let mut board = ClassBoard::new(3, 5, &cfg);
        let mut hook = DocumentTrace::new(&mut board, 5, &cfg);
        hook.visit(Coord::new(0, 0));
        hook.visit(Coord::new(2, 4));
        assert_eq!(hook.painted(), 2);
        assert_eq!(
            board.cells_with(&cfg.visited_class),
            [Coord::new(0, 0), Coord::new(2, 4)]
        );
    }

    #[test]
    fn skips_endpoints_and_missing_cells() {
        let cfg = BoardConfig::instant();
        let mut board = ClassBoard::new(3, 5, &cfg);
        let mut hook = DocumentTrace::new(&mut board, 5, &cfg);
        // (1, 1) is the default start, (1, 3) the default finish.
        hook.visit(Coord::new(1, 1));
        hook.visit(Coord::new(1, 3));
        hook.visit(Coord::new(7, 0));
        assert_eq!(hook.painted(), 0);
        assert!(board.cells_with(&cfg.visited_class).is_empty());
    }
}
