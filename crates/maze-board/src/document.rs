//! The cell document a board is drawn on.
//!
//! A board is a set of elements addressed by id, each carrying a list of
//! class names. [`CellDocument`] and [`CellElement`] abstract over where
//! those elements live (a browser page, a terminal widget, a test
//! fixture). [`ClassBoard`] is the in-memory implementation.

use std::collections::BTreeSet;

use maze_core::Coord;

use crate::config::BoardConfig;
use crate::layout::{default_finish, default_start};

/// An element whose state is carried by class names.
pub trait CellElement {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// A collection of cell elements addressed by id.
pub trait CellDocument {
    type Element: CellElement;

    /// The element with the given id, if any.
    fn element_by_id(&mut self, id: &str) -> Option<&mut Self::Element>;
}

/// A cell of a [`ClassBoard`]: a sorted set of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassCell {
    classes: BTreeSet<String>,
}

impl ClassCell {
    pub fn with_class(class: &str) -> Self {
        let mut cell = Self::default();
        cell.add_class(class);
        cell
    }

    /// Class names in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl CellElement for ClassCell {
    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

/// Headless board of `rows x columns` [`ClassCell`]s.
///
/// Ids follow the configured prefix and the row-major cell index, so with
/// the default config the cell at `(r, c)` is `cell-{r * columns + c}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBoard {
    prefix: String,
    rows: usize,
    columns: usize,
    cells: Vec<ClassCell>,
}

impl ClassBoard {
    /// Lay out a fresh board: every cell open except the default start and
    /// finish, which carry the start and finish classes instead. On boards
    /// too narrow to separate them, one cell carries both.
    pub fn new(rows: usize, columns: usize, cfg: &BoardConfig) -> Self {
        let start = default_start(columns, rows).to_index(columns);
        let finish = default_finish(columns, rows).to_index(columns);
        let cells = (0..rows * columns)
            .map(|i| {
                if i != start && i != finish {
                    return ClassCell::with_class(&cfg.open_class);
                }
                let mut cell = ClassCell::default();
                if i == start {
                    cell.add_class(&cfg.start_class);
                }
                if i == finish {
                    cell.add_class(&cfg.finish_class);
                }
                cell
            })
            .collect();
        log::debug!("laid out {rows}x{columns} board");
        Self {
            prefix: cfg.id_prefix.clone(),
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `c`, or `None` if out of bounds.
    pub fn cell(&self, c: Coord) -> Option<&ClassCell> {
        if c.column >= self.columns {
            return None;
        }
        self.cells.get(c.to_index(self.columns))
    }

    /// Coordinates of every cell carrying `class`, in row-major order.
    pub fn cells_with(&self, class: &str) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.has_class(class))
            .map(|(i, _)| Coord::from_index(i, self.columns))
            .collect()
    }
}

impl CellDocument for ClassBoard {
    type Element = ClassCell;

    fn element_by_id(&mut self, id: &str) -> Option<&mut ClassCell> {
        let index = id.strip_prefix(self.prefix.as_str())?.parse::<usize>().ok()?;
        self.cells.get_mut(index)
    }
}
