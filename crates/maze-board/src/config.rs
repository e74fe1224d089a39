use std::time::Duration;

/// Class names and tuning used when reading and painting a board.
///
/// The defaults match the stock maze page: cells are buttons with ids
/// `cell-0`, `cell-1`, ... in row-major order, and state is carried by the
/// class list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BoardConfig {
    /// Prefix of cell element ids; the row-major index follows it.
    pub id_prefix: String,
    pub open_class: String,
    pub closed_class: String,
    pub start_class: String,
    pub finish_class: String,
    /// Added to cells reported by a traced solve.
    pub visited_class: String,
    /// Added to cells of the final path.
    pub path_class: String,
    /// Pause after each traced visit, in milliseconds. Zero disables it.
    pub trace_delay_ms: u64,
    /// Probability that [`generate_maze`](crate::generate_maze) closes a
    /// cell.
    pub wall_density: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_prefix: "cell-".to_string(),
            open_class: "maze-cell-open".to_string(),
            closed_class: "maze-cell-closed".to_string(),
            start_class: "maze-cell-start".to_string(),
            finish_class: "maze-cell-finish".to_string(),
            visited_class: "maze-cell-visited".to_string(),
            path_class: "cell-path".to_string(),
            trace_delay_ms: 10,
            wall_density: 0.3,
        }
    }
}

impl BoardConfig {
    /// A config with the default classes and no trace delay. Handy for
    /// headless runs.
    pub fn instant() -> Self {
        Self {
            trace_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Element id of the cell at row-major `index`.
    pub fn cell_id(&self, index: usize) -> String {
        format!("{}{index}", self.id_prefix)
    }

    /// The trace delay as a [`Duration`].
    pub fn trace_delay(&self) -> Duration {
        Duration::from_millis(self.trace_delay_ms)
    }
}
