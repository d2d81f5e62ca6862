use super::*;
use crate::error::{InvalidMove, ParseError};

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_stone_parse() {
    assert_eq!("white".parse::<Stone>(), Ok(Stone::White));
    assert_eq!("B".parse::<Stone>(), Ok(Stone::Black));
    assert_eq!("red".parse::<Stone>(), Err(ParseError::UnknownStone("red".to_string())));
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.row, 7);
    assert_eq!(pos.col, 7);
    assert_eq!(Pos::center(), pos);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), Some(7 * 15 + 7));
    assert_eq!(pos.to_index(), Some(112));

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, Pos::new(7, 7));
    assert_eq!(Pos::new(-1, 3).to_index(), None);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::new(0, 0).is_valid());
    assert!(Pos::new(14, 14).is_valid());
    assert!(Pos::new(7, 7).is_valid());
    assert!(!Pos::new(-1, 0).is_valid());
    assert!(!Pos::new(0, -1).is_valid());
    assert!(!Pos::new(15, 0).is_valid());
    assert!(!Pos::new(0, 15).is_valid());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), Some(0));
    assert_eq!(Pos::new(0, 14).to_index(), Some(14));
    assert_eq!(Pos::new(14, 0).to_index(), Some(210));
    assert_eq!(Pos::new(14, 14).to_index(), Some(224));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.get(Pos::new(7, 7)), None);
}

#[test]
fn test_place_returns_new_board() {
    let board = Board::new();
    let next = board.place(Pos::new(3, 4), Stone::White).unwrap();

    assert_eq!(next.get(Pos::new(3, 4)), Some(Stone::White));
    assert_eq!(next.stone_count(), 1);
    // Original untouched
    assert_eq!(board, Board::new());
    assert_eq!(board.get(Pos::new(3, 4)), None);
}

#[test]
fn test_place_never_mutates_input() {
    let board = Board::new()
        .place(Pos::new(7, 7), Stone::White)
        .unwrap()
        .place(Pos::new(7, 8), Stone::Black)
        .unwrap();
    let snapshot = Board::replay(&[Pos::new(7, 7), Pos::new(7, 8)], Stone::White).unwrap();

    let _ = board.place(Pos::new(0, 0), Stone::White);
    let _ = board.place(Pos::new(7, 7), Stone::Black);
    let _ = board.place(Pos::new(-3, 20), Stone::Black);

    assert_eq!(board, snapshot);
}

#[test]
fn test_place_out_of_bounds() {
    let board = Board::new();
    let off_board = [
        Pos::new(-1, 0),
        Pos::new(0, -1),
        Pos::new(15, 0),
        Pos::new(0, 15),
        Pos::new(99, -99),
    ];
    for pos in off_board {
        assert!(!pos.is_valid());
        assert_eq!(
            board.place(pos, Stone::White),
            Err(InvalidMove::OutOfBounds { row: pos.row, col: pos.col })
        );
    }
}

#[test]
fn test_place_on_occupied_cell() {
    let board = Board::new().place(Pos::new(5, 5), Stone::Black).unwrap();
    let before = board;

    assert_eq!(
        board.place(Pos::new(5, 5), Stone::White),
        Err(InvalidMove::Occupied { row: 5, col: 5 })
    );
    assert_eq!(
        board.place(Pos::new(5, 5), Stone::Black),
        Err(InvalidMove::Occupied { row: 5, col: 5 })
    );
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(5, 5)), Some(Stone::Black));
}

#[test]
fn test_board_full_after_alternating_fill() {
    let mut board = Board::new();
    let mut color = Stone::White;
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        board = board.place(Pos::from_index(idx), color).unwrap();
        color = color.opponent();
    }
    assert!(board.is_full());
    assert_eq!(board.stone_count() as usize, TOTAL_CELLS);
}

#[test]
fn test_replay_matches_incremental_build() {
    let moves = [
        Pos::new(7, 7),
        Pos::new(7, 8),
        Pos::new(8, 8),
        Pos::new(6, 6),
        Pos::new(9, 9),
        Pos::new(0, 14),
    ];

    let mut cached = Vec::new();
    let mut board = Board::new();
    let mut color = Stone::White;
    for &pos in &moves {
        board = board.place(pos, color).unwrap();
        cached.push(board);
        color = color.opponent();
    }

    for n in 1..=moves.len() {
        let replayed = Board::replay(&moves[..n], Stone::White).unwrap();
        assert_eq!(replayed, cached[n - 1]);
    }
}

#[test]
fn test_replay_rejects_repeated_cell() {
    let moves = [Pos::new(1, 1), Pos::new(1, 1)];
    assert_eq!(
        Board::replay(&moves, Stone::White),
        Err(InvalidMove::Occupied { row: 1, col: 1 })
    );
}

#[test]
fn test_bitboard_iter_row_major() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(4, 0));
    bb.set(Pos::new(-1, 2)); // ignored
    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 3), Pos::new(4, 0), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_display_marks_stones() {
    let board = Board::new()
        .place(Pos::new(0, 0), Stone::White)
        .unwrap()
        .place(Pos::new(0, 1), Stone::Black)
        .unwrap();
    let text = board.to_string();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.contains('O'));
    assert!(first_row.contains('X'));
}
