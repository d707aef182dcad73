use draughtsman::{Board, Cell, Move, MoveError, MoveSeq, Player, Square};

fn board(rows: [&str; 8]) -> Board {
    let mut cells = [[Cell::Unplayable; 8]; 8];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                '.' => Cell::Empty,
                'w' => Cell::White,
                'b' => Cell::Black,
                '-' => Cell::Unplayable,
                _ => panic!("bad cell char {ch:?}"),
            };
        }
    }
    Board::from_cells(cells)
}

fn step(from: (u8, u8), to: (u8, u8)) -> Move {
    Move {
        from: Square::new(from.0, from.1),
        to: Square::new(to.0, to.1),
        captured: None,
    }
}

fn jump(from: (u8, u8), over: (u8, u8), to: (u8, u8)) -> Move {
    Move {
        from: Square::new(from.0, from.1),
        to: Square::new(to.0, to.1),
        captured: Some(Square::new(over.0, over.1)),
    }
}

#[test]
fn starting_position_has_twelve_pieces_per_side() {
    let board = Board::new();
    assert_eq!(board.white_pieces(), 12);
    assert_eq!(board.black_pieces(), 12);
    assert!(!board.game_complete());

    assert_eq!(board.get(Square::new(0, 0)), Cell::White);
    assert_eq!(board.get(Square::new(2, 6)), Cell::White);
    assert_eq!(board.get(Square::new(5, 1)), Cell::Black);
    assert_eq!(board.get(Square::new(7, 7)), Cell::Black);
    assert_eq!(board.get(Square::new(4, 0)), Cell::Empty);
    assert_eq!(board.get(Square::new(0, 1)), Cell::Unplayable);
}

#[test]
fn an_empty_board_counts_as_complete() {
    let board = Board::empty();
    assert_eq!(board.white_pieces(), 0);
    assert_eq!(board.black_pieces(), 0);
    assert!(board.game_complete());
    assert_eq!(board.get(Square::new(4, 4)), Cell::Empty);
    assert_eq!(board.get(Square::new(4, 5)), Cell::Unplayable);
}

#[test]
fn from_cells_derives_the_counters() {
    let board = board([
        ".-.-.-.-",
        "-.-.-.-.",
        ".-w-.-.-",
        "-.-b-.-.",
        ".-.-b-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
    ]);
    assert_eq!(board.white_pieces(), 1);
    assert_eq!(board.black_pieces(), 2);
    assert_eq!(board.pieces(Player::White), 1);
    assert_eq!(board.pieces(Player::Black), 2);
}

#[test]
fn a_capture_clears_the_victim_and_its_counter() {
    let mut board = board([
        ".-.-.-.-",
        "-.-.-.-.",
        ".-w-.-.-",
        "-.-b-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
    ]);
    board
        .apply_white_move(jump((2, 2), (3, 3), (4, 4)))
        .expect("legal capture");

    assert_eq!(board.get(Square::new(2, 2)), Cell::Empty);
    assert_eq!(board.get(Square::new(3, 3)), Cell::Empty);
    assert_eq!(board.get(Square::new(4, 4)), Cell::White);
    assert_eq!(board.black_pieces(), 0);
    assert_eq!(board.white_pieces(), 1);
    assert!(board.game_complete(), "last piece captured ends the game");
}

#[test]
fn moving_from_an_empty_square_is_refused() {
    let mut board = Board::new();
    let err = board
        .apply_white_move(step((4, 0), (5, 1)))
        .expect_err("no piece there");
    assert_eq!(
        err,
        MoveError::WrongPiece {
            side: Player::White,
            from: Square::new(4, 0)
        }
    );
}

#[test]
fn moving_the_wrong_colour_is_refused() {
    let mut board = Board::new();
    let err = board
        .apply_white_move(step((5, 1), (4, 0)))
        .expect_err("that piece is Black");
    assert!(matches!(err, MoveError::WrongPiece { .. }));
}

#[test]
fn occupied_and_unplayable_destinations_are_refused() {
    let mut board = Board::new();
    let err = board
        .apply_white_move(step((1, 1), (2, 2)))
        .expect_err("destination holds a piece");
    assert_eq!(
        err,
        MoveError::BadDestination {
            to: Square::new(2, 2)
        }
    );

    let err = board
        .apply_white_move(step((2, 0), (3, 0)))
        .expect_err("destination off the checkered pattern");
    assert_eq!(
        err,
        MoveError::BadDestination {
            to: Square::new(3, 0)
        }
    );
}

#[test]
fn capturing_thin_air_is_refused() {
    let mut board = board([
        ".-.-.-.-",
        "-.-.-.-.",
        ".-w-.-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
    ]);
    let err = board
        .apply_white_move(jump((2, 2), (3, 3), (4, 4)))
        .expect_err("nothing to capture");
    assert_eq!(
        err,
        MoveError::NothingToCapture {
            victim: Player::Black,
            over: Square::new(3, 3)
        }
    );
}

#[test]
fn a_failing_sequence_keeps_its_earlier_relocations() {
    let mut board = board([
        ".-.-.-.-",
        "-.-.-.-.",
        ".-w-.-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
        ".-.-.-.-",
        "-.-.-.-.",
    ]);
    let seq = MoveSeq::single(step((2, 2), (3, 3))).extended(step((5, 5), (6, 6)));
    board
        .apply_sequence(Player::White, &seq)
        .expect_err("second relocation starts on an empty square");

    assert_eq!(board.get(Square::new(2, 2)), Cell::Empty);
    assert_eq!(board.get(Square::new(3, 3)), Cell::White);
}

#[test]
fn clones_do_not_share_state() {
    let original = Board::new();
    let mut child = original.clone();
    child
        .apply_white_move(step((2, 0), (3, 1)))
        .expect("legal step");

    assert_eq!(original.get(Square::new(2, 0)), Cell::White);
    assert_eq!(original.get(Square::new(3, 1)), Cell::Empty);
    assert_eq!(child.get(Square::new(2, 0)), Cell::Empty);
    assert_eq!(child.get(Square::new(3, 1)), Cell::White);
    assert_ne!(original, child);
}

#[test]
fn display_draws_the_full_grid() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9, "header plus eight rows");
    assert!(lines[0].contains("0 1 2 3 4 5 6 7"));
    assert_eq!(text.matches('w').count(), 12);
    assert_eq!(text.matches('b').count(), 12);
}
