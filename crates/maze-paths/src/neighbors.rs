use maze_core::Coord;

/// Scratch list of the open cells next to a maze cell.
///
/// Filled in exploration order (up, left, down, right). The buffer is kept
/// between calls so a solve allocates it once.
#[derive(Debug, Default)]
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Neighbors {
    /// An empty buffer with room for one cell's four neighbours.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbours of `c` for which `keep` returns
    /// `true`. Neighbours off the top or left edge are never offered to
    /// `keep`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4().into_iter().flatten() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
