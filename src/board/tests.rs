use super::*;
use crate::error::CheckersError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Red.opponent(), Player::Blue);
    assert_eq!(Player::Blue.opponent(), Player::Red);
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::RedMan.owner(), Some(Player::Red));
    assert_eq!(Cell::RedKing.owner(), Some(Player::Red));
    assert_eq!(Cell::BlueMan.owner(), Some(Player::Blue));
    assert_eq!(Cell::BlueKing.owner(), Some(Player::Blue));
    assert!(Cell::RedKing.is_king());
    assert!(!Cell::BlueMan.is_king());
}

#[test]
fn test_promotion_rule() {
    assert_eq!(Cell::RedMan.promoted(0), Cell::RedKing);
    assert_eq!(Cell::BlueMan.promoted(7), Cell::BlueKing);

    // Wrong back rank: no promotion
    assert_eq!(Cell::RedMan.promoted(7), Cell::RedMan);
    assert_eq!(Cell::BlueMan.promoted(0), Cell::BlueMan);
    assert_eq!(Cell::RedMan.promoted(3), Cell::RedMan);

    // Kings stay kings
    assert_eq!(Cell::RedKing.promoted(0), Cell::RedKing);
    assert_eq!(Cell::BlueKing.promoted(7), Cell::BlueKing);
    assert_eq!(Cell::Empty.promoted(0), Cell::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));

    assert!(Pos::try_new(2, 3).is_ok());
    assert!(matches!(
        Pos::try_new(8, 1),
        Err(CheckersError::InvalidCoordinate { row: 8, col: 1 })
    ));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(1, 1);
    assert_eq!(pos.offset(-1, -1, 1), Some(Pos::new(0, 0)));
    assert_eq!(pos.offset(1, 1, 2), Some(Pos::new(3, 3)));
    assert_eq!(pos.offset(-1, 1, 2), None);
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.count(Player::Red), 12);
    assert_eq!(board.count(Player::Blue), 12);
    assert_eq!(board.piece_count(), 24);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = board.at(row, col);
            if (row + col) % 2 == 0 || (3..=4).contains(&row) {
                assert_eq!(cell, Cell::Empty, "({row}, {col}) should be empty");
            } else if row <= 2 {
                assert_eq!(cell, Cell::BlueMan);
            } else {
                assert_eq!(cell, Cell::RedMan);
            }
        }
    }
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new();
    let pos = Pos::new(4, 3);
    assert!(board.is_empty(pos));

    board.set(pos, Cell::BlueKing);
    assert_eq!(board.get(pos), Cell::BlueKing);
    assert!(board.has_pieces(Player::Blue));
    assert!(!board.has_pieces(Player::Red));

    board.clear(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_board_try_at() {
    let board = Board::initial();
    assert_eq!(board.try_at(0, 1).unwrap(), Cell::BlueMan);
    assert!(board.try_at(-1, 3).is_err());
    assert!(board.try_at(2, 8).is_err());
}

#[test]
fn test_board_is_value() {
    let original = Board::initial();
    let mut copy = original;
    copy.clear(Pos::new(5, 0));
    assert_ne!(original, copy);
    assert_eq!(original.get(Pos::new(5, 0)), Cell::RedMan);
}

#[test]
fn test_pieces_row_major() {
    let mut board = Board::new();
    board.set(Pos::new(6, 1), Cell::RedMan);
    board.set(Pos::new(2, 3), Cell::RedKing);
    board.set(Pos::new(2, 5), Cell::BlueMan);

    let red: Vec<Pos> = board.pieces(Player::Red).map(|(pos, _)| pos).collect();
    assert_eq!(red, vec![Pos::new(2, 3), Pos::new(6, 1)]);
}
