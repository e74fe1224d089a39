//! Reading the maze off a board and painting results back onto it.
//!
//! Every function here addresses cells by row-major index through
//! [`BoardConfig::cell_id`]. A cell is closed when it carries the closed
//! class; anything else (open, start, finish, visited, path) reads as open.

use maze_core::{Cell, Coord, Grid, Role};
use rand::Rng;

use crate::config::BoardConfig;
use crate::document::{CellDocument, CellElement};
use crate::error::BoardError;

fn element<'a, D: CellDocument>(
    doc: &'a mut D,
    index: usize,
    cfg: &BoardConfig,
) -> Result<&'a mut D::Element, BoardError> {
    let id = cfg.cell_id(index);
    match doc.element_by_id(&id) {
        Some(el) => Ok(el),
        None => Err(BoardError::MissingCell(id)),
    }
}

/// Row-major index of `c` on a board `columns` wide, or
/// [`BoardError::OutOfBounds`] for a column past the right edge.
fn index_of(c: Coord, columns: usize) -> Result<usize, BoardError> {
    if c.column >= columns {
        return Err(BoardError::OutOfBounds(c));
    }
    Ok(c.to_index(columns))
}

fn is_endpoint(el: &impl CellElement, cfg: &BoardConfig) -> bool {
    el.has_class(&cfg.start_class) || el.has_class(&cfg.finish_class)
}

fn set_state(el: &mut impl CellElement, cell: Cell, cfg: &BoardConfig) {
    match cell {
        Cell::Open => {
            el.remove_class(&cfg.closed_class);
            el.add_class(&cfg.open_class);
        }
        Cell::Closed => {
            el.remove_class(&cfg.open_class);
            el.add_class(&cfg.closed_class);
        }
    }
}

/// Read cells `0..num_cells` as a flat, row-major cell list.
pub fn linear_grid<D: CellDocument>(
    doc: &mut D,
    num_cells: usize,
    cfg: &BoardConfig,
) -> Result<Vec<Cell>, BoardError> {
    if num_cells == 0 {
        return Err(BoardError::InvalidCellCount);
    }
    (0..num_cells)
        .map(|i| {
            let el = element(doc, i, cfg)?;
            Ok(if el.has_class(&cfg.closed_class) {
                Cell::Closed
            } else {
                Cell::Open
            })
        })
        .collect()
}

/// Read a `rows x columns` board into a [`Grid`].
pub fn read_grid<D: CellDocument>(
    doc: &mut D,
    rows: usize,
    columns: usize,
    cfg: &BoardConfig,
) -> Result<Grid, BoardError> {
    let list = linear_grid(doc, rows * columns, cfg)?;
    Ok(Grid::from_list(&list, rows, columns)?)
}

/// Paint `path` on the board: each cell loses the open class and gains the
/// path class.
pub fn mark_path<D: CellDocument>(
    doc: &mut D,
    path: &[Coord],
    columns: usize,
    cfg: &BoardConfig,
) -> Result<(), BoardError> {
    for &c in path {
        let el = element(doc, index_of(c, columns)?, cfg)?;
        el.remove_class(&cfg.open_class);
        el.add_class(&cfg.path_class);
    }
    log::debug!("marked path of {} cells", path.len());
    Ok(())
}

/// Remove the path and visited marks left by a solve. Non-endpoint cells
/// that carried them become open again.
pub fn clear_path<D: CellDocument>(
    doc: &mut D,
    num_cells: usize,
    cfg: &BoardConfig,
) -> Result<(), BoardError> {
    for i in 0..num_cells {
        let el = element(doc, i, cfg)?;
        if !el.has_class(&cfg.path_class) && !el.has_class(&cfg.visited_class) {
            continue;
        }
        el.remove_class(&cfg.path_class);
        el.remove_class(&cfg.visited_class);
        if !is_endpoint(el, cfg) {
            el.add_class(&cfg.open_class);
        }
    }
    Ok(())
}

/// Clear the path, then open every closed cell.
pub fn clear_maze<D: CellDocument>(
    doc: &mut D,
    num_cells: usize,
    cfg: &BoardConfig,
) -> Result<(), BoardError> {
    clear_path(doc, num_cells, cfg)?;
    for i in 0..num_cells {
        let el = element(doc, i, cfg)?;
        if el.has_class(&cfg.closed_class) {
            set_state(el, Cell::Open, cfg);
        }
    }
    Ok(())
}

/// Fill the board with random walls.
///
/// The path is cleared first. Then every cell except the start and finish
/// is closed with probability `cfg.wall_density` and opened otherwise.
/// Returns the number of walls placed.
pub fn generate_maze<D: CellDocument>(
    doc: &mut D,
    num_cells: usize,
    rng: &mut impl Rng,
    cfg: &BoardConfig,
) -> Result<usize, BoardError> {
    clear_path(doc, num_cells, cfg)?;
    let mut walls = 0;
    for i in 0..num_cells {
        let el = element(doc, i, cfg)?;
        if is_endpoint(el, cfg) {
            continue;
        }
        if rng.random::<f64>() < cfg.wall_density {
            set_state(el, Cell::Closed, cfg);
            walls += 1;
        } else {
            set_state(el, Cell::Open, cfg);
        }
    }
    log::debug!(
        "generated maze: {walls} walls in {num_cells} cells (density {})",
        cfg.wall_density
    );
    Ok(walls)
}

/// Flip the cell at `index` between open and closed. Start and finish
/// cells are left alone. Returns the new state, or `None` for an endpoint.
pub fn toggle_cell<D: CellDocument>(
    doc: &mut D,
    index: usize,
    cfg: &BoardConfig,
) -> Result<Option<Cell>, BoardError> {
    let el = element(doc, index, cfg)?;
    if is_endpoint(el, cfg) {
        return Ok(None);
    }
    let current = if el.has_class(&cfg.closed_class) {
        Cell::Closed
    } else {
        Cell::Open
    };
    let next = current.toggled();
    set_state(el, next, cfg);
    Ok(Some(next))
}

/// Move the start or finish marker from `from` to `to`.
///
/// The old cell becomes open unless it still carries the other endpoint.
/// Fails softly, returning `false`, when `to` already holds the start or
/// finish.
pub fn move_endpoint<D: CellDocument>(
    doc: &mut D,
    role: Role,
    from: Coord,
    to: Coord,
    columns: usize,
    cfg: &BoardConfig,
) -> Result<bool, BoardError> {
    let class = match role {
        Role::Start => &cfg.start_class,
        Role::Finish => &cfg.finish_class,
    };

    let (from_index, to_index) = (index_of(from, columns)?, index_of(to, columns)?);
    element(doc, from_index, cfg)?;

    let target = element(doc, to_index, cfg)?;
    if is_endpoint(target, cfg) {
        return Ok(false);
    }
    target.remove_class(&cfg.open_class);
    target.remove_class(&cfg.closed_class);
    target.add_class(class);

    let old = element(doc, from_index, cfg)?;
    old.remove_class(class);
    if !is_endpoint(old, cfg) {
        old.add_class(&cfg.open_class);
    }
    log::debug!("moved {role} from {from} to {to}");
    Ok(true)
}
