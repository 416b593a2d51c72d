use super::*;
use crate::error::MoveError;
use pretty_assertions::assert_eq;

#[test]
fn test_side_other_and_mark() {
    assert_eq!(Side::PlayerA.other(), Side::PlayerB);
    assert_eq!(Side::PlayerB.other(), Side::PlayerA);
    assert_eq!(Side::PlayerA.mark(), Cell::PlayerA);
    assert_eq!(Side::PlayerB.mark(), Cell::PlayerB);
    assert_eq!(Cell::PlayerB.side(), Some(Side::PlayerB));
    assert_eq!(Cell::Empty.side(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 2); // Center
    assert_eq!(pos.to_index(), 12);
    assert_eq!(Pos::from_index(12), pos);
    assert_eq!(CENTER, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(4, 4));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(5, 0));
    assert!(!Pos::is_valid(0, 5));
    assert_eq!(Pos::try_new(5, 1), Err(MoveError::OutOfBounds { row: 5, col: 1 }));
    assert_eq!(Pos::try_new(4, 0), Ok(Pos::new(4, 0)));
}

#[test]
fn test_pos_offset_clips_at_edges() {
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(4, 4).offset(0, 1), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 4) < Pos::new(1, 0));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board, Board::default());
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS);
    for (_, cell) in board.all_cells() {
        assert_eq!(cell, Cell::Empty);
    }
}

#[test]
fn test_cell_at_bounds() {
    let board = Board::new();
    assert_eq!(board.cell_at(4, 4), Ok(Cell::Empty));
    assert_eq!(board.cell_at(5, 0), Err(MoveError::OutOfBounds { row: 5, col: 0 }));
    assert_eq!(board.cell_at(0, 7), Err(MoveError::OutOfBounds { row: 0, col: 7 }));
}

#[test]
fn test_set_cell_overwrites_and_clears() {
    let mut board = Board::new();
    board.set_cell(1, 3, Cell::PlayerA).unwrap();
    assert_eq!(board.cell_at(1, 3), Ok(Cell::PlayerA));
    assert!(!board.is_empty_at(1, 3));

    board.set_cell(1, 3, Cell::PlayerB).unwrap();
    assert_eq!(board.cell_at(1, 3), Ok(Cell::PlayerB));
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 1);

    board.set_cell(1, 3, Cell::Empty).unwrap();
    assert!(board.is_empty_at(1, 3));
    assert_eq!(board, Board::new());

    assert_eq!(
        board.set_cell(9, 9, Cell::PlayerA),
        Err(MoveError::OutOfBounds { row: 9, col: 9 })
    );
}

#[test]
fn test_empty_cells_skip_marks_in_row_major_order() {
    let mut board = Board::new();
    board.set_cell(0, 0, Cell::PlayerA).unwrap();
    board.set_cell(0, 2, Cell::PlayerB).unwrap();
    let first: Vec<Pos> = board.empty_cells().take(3).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 3), Pos::new(0, 4)]);
}

#[test]
fn test_is_empty_at_off_board() {
    let board = Board::new();
    assert!(!board.is_empty_at(5, 5));
}

#[test]
fn test_all_cells_is_row_major_and_restartable() {
    let mut board = Board::new();
    board.set_cell(0, 1, Cell::PlayerB).unwrap();

    let first: Vec<(Pos, Cell)> = board.all_cells().take(3).collect();
    assert_eq!(
        first,
        vec![
            (Pos::new(0, 0), Cell::Empty),
            (Pos::new(0, 1), Cell::PlayerB),
            (Pos::new(0, 2), Cell::Empty),
        ]
    );

    assert_eq!(board.all_cells().len(), TOTAL_CELLS);
    assert_eq!(board.all_cells().last(), Some((Pos::new(4, 4), Cell::Empty)));
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for (i, (pos, _)) in Board::new().all_cells().enumerate() {
        assert!(!board.is_full());
        let mark = if i % 2 == 0 { Cell::PlayerA } else { Cell::PlayerB };
        board.set_cell(pos.row as usize, pos.col as usize, mark).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
    let marks: Vec<Cell> = board.all_cells().map(|(_, cell)| cell).collect();
    assert_eq!(marks.iter().filter(|&&c| c == Cell::PlayerA).count(), 13);
    assert_eq!(marks.iter().filter(|&&c| c == Cell::PlayerB).count(), 12);
}
