use maze_core::Coord;

/// Observer for cells as a solver visits them.
///
/// `visit` is called once for every cell that goes from open to visited in
/// the solver's scratch grid, in visiting order. Start and finish are never
/// reported. The solver does not continue until `visit` returns, so an
/// implementation may draw the cell and pause to animate the search.
pub trait TraceHook {
    fn visit(&mut self, cell: Coord);
}

/// A hook that ignores every visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceHook for NoTrace {
    #[inline]
    fn visit(&mut self, _cell: Coord) {}
}

impl<F: FnMut(Coord)> TraceHook for F {
    #[inline]
    fn visit(&mut self, cell: Coord) {
        self(cell);
    }
}

/// Collects visited cells in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitLog {
    pub cells: Vec<Coord>,
}

impl TraceHook for VisitLog {
    fn visit(&mut self, cell: Coord) {
        self.cells.push(cell);
    }
}
