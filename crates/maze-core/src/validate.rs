//! Input validation for grids and start/finish coordinates.
//!
//! Coordinate checks run in a fixed order and the first failing check is
//! the one reported:
//!
//! 1. shape (the value is an array)
//! 2. length (exactly two entries)
//! 3. entries are integers
//! 4. entries are non-negative
//! 5. row is below the number of rows
//! 6. column is below the length of that row
//! 7. the cell is not closed
//!
//! Typed callers start at step 2; JSON callers start at step 1.

use serde_json::Value;

use crate::error::{CoordFault, GridFault, MazeError, Role};
use crate::geom::Coord;
use crate::grid::{Cell, Grid};

/// Validate a raw JSON grid: an array of arrays of the integers 0 and 1.
pub fn validate_grid(value: &Value) -> Result<Grid, MazeError> {
    let Value::Array(rows) = value else {
        return Err(MazeError::InvalidGrid(GridFault::NotArray));
    };
    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        let Value::Array(entries) = row else {
            return Err(MazeError::InvalidGrid(GridFault::RowNotArray));
        };
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let v = json_int(entry).ok_or(MazeError::InvalidGrid(GridFault::NonInteger))?;
            out.push(Cell::from_int(v)?);
        }
        cells.push(out);
    }
    Ok(Grid::from_rows(cells))
}

/// Validate integer coordinate entries against `grid`.
pub fn validate_coordinate(role: Role, entries: &[i64], grid: &Grid) -> Result<Coord, MazeError> {
    let &[row, column] = entries else {
        return Err(MazeError::coord(role, CoordFault::WrongLength));
    };
    if row < 0 || column < 0 {
        return Err(MazeError::coord(role, CoordFault::Negative));
    }
    // Non-negative i64 always fits a u64; saturate on narrower targets.
    let row = usize::try_from(row).unwrap_or(usize::MAX);
    let column = usize::try_from(column).unwrap_or(usize::MAX);
    let Some(row_len) = grid.row_len(row) else {
        return Err(MazeError::coord(role, CoordFault::RowOutOfBounds));
    };
    if column >= row_len {
        return Err(MazeError::coord(role, CoordFault::ColumnOutOfBounds));
    }
    let c = Coord::new(row, column);
    if grid.at(c) == Some(Cell::Closed) {
        return Err(MazeError::coord(role, CoordFault::ClosedCell));
    }
    Ok(c)
}

/// Validate a raw JSON coordinate (`[row, column]`) against `grid`.
pub fn validate_coordinate_json(
    role: Role,
    value: &Value,
    grid: &Grid,
) -> Result<Coord, MazeError> {
    let Value::Array(entries) = value else {
        return Err(MazeError::coord(role, CoordFault::NotArray));
    };
    if entries.len() != 2 {
        return Err(MazeError::coord(role, CoordFault::WrongLength));
    }
    let ints = entries
        .iter()
        .map(json_int)
        .collect::<Option<Vec<i64>>>()
        .ok_or(MazeError::coord(role, CoordFault::NonInteger))?;
    validate_coordinate(role, &ints, grid)
}

/// Whether the coordinate is a usable endpoint of `grid` (in bounds, open).
pub fn is_endpoint(grid: &Grid, c: Coord) -> bool {
    grid.is_open(c)
}

/// Interpret a JSON number as an integer. Floats with no fractional part
/// count as integers; values beyond `i64` saturate.
fn json_int(v: &Value) -> Option<i64> {
    let Value::Number(n) = v else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if let Some(u) = n.as_u64() {
        return Some(i64::try_from(u).unwrap_or(i64::MAX));
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        return Some(f as i64);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_by_three() -> Grid {
        validate_grid(&json!([[0, 0, 1], [0, 0, 1], [0, 0, 0]])).unwrap()
    }

    fn msg(r: Result<Coord, MazeError>) -> String {
        r.unwrap_err().to_string()
    }

    #[test]
    fn grid_shape_and_entries() {
        assert_eq!(
            validate_grid(&json!(2)).unwrap_err().to_string(),
            "'grid' must be an array!"
        );
        assert_eq!(
            validate_grid(&json!([[0, 0, 1], [0, "word", 1], [0, 0, 0]]))
                .unwrap_err()
                .to_string(),
            "'grid' entries must be integers!"
        );
        assert_eq!(
            validate_grid(&json!([[1, 0, 1], [0, 0, 1], [5, 0, 0]]))
                .unwrap_err()
                .to_string(),
            "'grid' entries must only contain 0's and 1's!"
        );
        assert_eq!(
            validate_grid(&json!([[0, 0], 7])).unwrap_err(),
            MazeError::InvalidGrid(GridFault::RowNotArray)
        );
    }

    #[test]
    fn grid_reports_first_bad_entry_in_row_major_order() {
        // (0, 1) is out of range and comes before the string at (1, 0).
        let err = validate_grid(&json!([[0, 2], ["x", 0]])).unwrap_err();
        assert_eq!(err, MazeError::InvalidGrid(GridFault::NotBinary));
    }

    #[test]
    fn grid_accepts_integral_floats() {
        let g = validate_grid(&json!([[0.0, 1.0]])).unwrap();
        assert_eq!(g.at(Coord::new(0, 1)), Some(Cell::Closed));
        assert!(validate_grid(&json!([[0.5]])).is_err());
    }

    #[test]
    fn coordinate_messages_in_order() {
        let g = three_by_three();
        let s = Role::Start;
        assert_eq!(msg(validate_coordinate_json(s, &json!(2), &g)), "'start' must be an array!");
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([1, 0, 1]), &g)),
            "'start' must be an array of length 2!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([1, "word"]), &g)),
            "'start' entries must be integers!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([-1, 1]), &g)),
            "'start' entries cannot be negative!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([1, -1]), &g)),
            "'start' entries cannot be negative!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([3, 2]), &g)),
            "'start' first entry cannot exceed the number of rows in 'grid'!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([2, 3]), &g)),
            "'start' second entry cannot exceed the number of columns in 'grid'!"
        );
        assert_eq!(
            msg(validate_coordinate_json(s, &json!([0, 2]), &g)),
            "'start' cannot be located on a closed cell!"
        );
    }

    #[test]
    fn first_failing_check_wins() {
        let g = three_by_three();
        let f = Role::Finish;
        // wrong length beats non-integer entries
        assert_eq!(
            validate_coordinate_json(f, &json!(["a", "b", "c"]), &g).unwrap_err(),
            MazeError::coord(f, CoordFault::WrongLength)
        );
        // non-integer beats negative
        assert_eq!(
            validate_coordinate_json(f, &json!([-1, 0.5]), &g).unwrap_err(),
            MazeError::coord(f, CoordFault::NonInteger)
        );
        // negative beats out of bounds
        assert_eq!(
            validate_coordinate(f, &[-1, 99], &g).unwrap_err(),
            MazeError::coord(f, CoordFault::Negative)
        );
        // row bound beats column bound
        assert_eq!(
            validate_coordinate(f, &[9, 9], &g).unwrap_err(),
            MazeError::coord(f, CoordFault::RowOutOfBounds)
        );
    }

    #[test]
    fn column_bound_uses_the_coordinates_own_row() {
        let g = Grid::from_ints(&[&[0], &[0, 0, 0]]).unwrap();
        assert_eq!(
            validate_coordinate(Role::Finish, &[1, 2], &g).unwrap(),
            Coord::new(1, 2)
        );
        assert_eq!(
            validate_coordinate(Role::Finish, &[0, 2], &g).unwrap_err(),
            MazeError::coord(Role::Finish, CoordFault::ColumnOutOfBounds)
        );
    }

    #[test]
    fn accepts_open_cell() {
        let g = three_by_three();
        assert_eq!(
            validate_coordinate_json(Role::Finish, &json!([2, 2]), &g).unwrap(),
            Coord::new(2, 2)
        );
        assert!(is_endpoint(&g, Coord::new(2, 2)));
        assert!(!is_endpoint(&g, Coord::new(0, 2)));
        assert!(!is_endpoint(&g, Coord::new(3, 0)));
    }

    #[test]
    fn empty_grid_rejects_every_coordinate() {
        let g = validate_grid(&json!([])).unwrap();
        assert_eq!(
            validate_coordinate(Role::Start, &[0, 0], &g).unwrap_err(),
            MazeError::coord(Role::Start, CoordFault::RowOutOfBounds)
        );
        let g = validate_grid(&json!([[]])).unwrap();
        assert_eq!(
            validate_coordinate(Role::Start, &[0, 0], &g).unwrap_err(),
            MazeError::coord(Role::Start, CoordFault::ColumnOutOfBounds)
        );
    }
}
