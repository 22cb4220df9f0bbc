use fleetcheck::{Grid, GridError};

#[test]
fn test_parse_dimensions_and_cells() {
    let grid = Grid::parse("*-\n-*\n--").unwrap();
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 2);
    assert_eq!(grid.get(0, 0), Some(true));
    assert_eq!(grid.get(0, 1), Some(false));
    assert_eq!(grid.get(1, 1), Some(true));
    assert_eq!(grid.get(3, 0), None);
    assert!(!grid.is_occupied(9, 9));
    assert_eq!(grid.count_occupied(), 2);
}

#[test]
fn test_parse_rejects_unknown_symbol() {
    let err = Grid::parse("*-x-").unwrap_err();
    assert_eq!(
        err,
        GridError::UnknownSymbol {
            row: 0,
            col: 2,
            symbol: 'x'
        }
    );
}

#[test]
fn test_parse_rejects_ragged_rows() {
    let err = Grid::parse("***\n**").unwrap_err();
    assert_eq!(
        err,
        GridError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_parse_accepts_crlf_lines() {
    let grid = Grid::parse("*-\r\n-*\r\n").unwrap();
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
}

#[test]
fn test_parse_empty_input() {
    let grid = Grid::parse("").unwrap();
    assert_eq!(grid.rows(), 0);
    assert_eq!(grid.cols(), 0);
    assert_eq!(grid.count_occupied(), 0);
}

#[test]
fn test_transpose_swaps_axes() {
    let grid = Grid::parse("*--\n-*-").unwrap();
    let flipped = grid.transposed();
    assert_eq!(flipped.rows(), 3);
    assert_eq!(flipped.cols(), 2);
    assert_eq!(flipped.to_string(), "*-\n-*\n--");
}

#[test]
fn test_from_positions_matches_parsed_text() {
    let grid = Grid::from_positions(2, 3, [(0, 0), (1, 2)]).unwrap();
    assert_eq!(grid, Grid::parse("*--\n--*").unwrap());

    let err = Grid::from_positions(2, 3, [(2, 0)]).unwrap_err();
    assert_eq!(err, GridError::OutOfBounds { row: 2, col: 0 });
}

#[test]
fn test_occupied_cells_row_major_order() {
    let grid = Grid::parse("-*\n*-").unwrap();
    let cells: Vec<_> = grid.occupied_cells().collect();
    assert_eq!(cells, vec![(0, 1), (1, 0)]);
}

#[test]
fn test_display_renders_markers() {
    let text = "*--\n-*-\n--*";
    let grid = Grid::parse(text).unwrap();
    assert_eq!(grid.to_string(), text);
}
