use maze_core::Coord;

/// Default start: on the middle row, a fifth of the width in from the left
/// edge.
pub fn default_start(columns: usize, rows: usize) -> Coord {
    Coord::new(rows / 2, columns / 5)
}

/// Default finish: on the middle row, a fifth of the width in from the
/// right edge.
pub fn default_finish(columns: usize, rows: usize) -> Coord {
    Coord::new(rows / 2, columns.saturating_sub(1 + columns / 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_mirror_each_other() {
        assert_eq!(default_start(40, 20), Coord::new(10, 8));
        assert_eq!(default_finish(40, 20), Coord::new(10, 31));
        assert_eq!(default_start(3, 3), Coord::new(1, 0));
        assert_eq!(default_finish(3, 3), Coord::new(1, 2));
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(default_start(1, 1), Coord::ORIGIN);
        assert_eq!(default_finish(1, 1), Coord::ORIGIN);
        assert_eq!(default_finish(0, 0), Coord::ORIGIN);
    }
}
