use crate::board::Board;
use crate::moves::Move;
use crate::types::{Cell, Player, Square, SIZE};

// Column deltas of the two forward diagonals, lower column first. Every
// generator scans squares row-major and diagonals in this order, so move
// lists come out in a stable, reproducible order.
const DIAGONALS: [i8; 2] = [-1, 1];

/// All single-square forward steps for `side` onto empty squares.
pub fn ordinary_moves(board: &Board, side: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let from = Square::new(row, col);
            if board.get(from) != side.cell() {
                continue;
            }
            for dc in DIAGONALS {
                let Some(to) = from.offset(side.forward(), dc) else {
                    continue;
                };
                if board.get(to) == Cell::Empty {
                    moves.push(Move {
                        from,
                        to,
                        captured: None,
                    });
                }
            }
        }
    }
    moves
}

/// All capturing jumps for `side` anywhere on the board.
pub fn forced_moves(board: &Board, side: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let from = Square::new(row, col);
            if board.get(from) == side.cell() {
                push_jumps(board, side, from, &mut moves);
            }
        }
    }
    moves
}

/// Capturing jumps available to the piece standing on `from`. Used to grow
/// capture chains from a landing square; empty if no piece of `side` is there.
pub fn forced_moves_from(board: &Board, side: Player, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    if board.get(from) == side.cell() {
        push_jumps(board, side, from, &mut moves);
    }
    moves
}

/// Whether `side` can move at all. A side with pieces but no legal turn is
/// stuck, which the game treats as a draw.
#[inline]
pub fn side_has_turn(board: &Board, side: Player) -> bool {
    !forced_moves(board, side).is_empty() || !ordinary_moves(board, side).is_empty()
}

fn push_jumps(board: &Board, side: Player, from: Square, out: &mut Vec<Move>) {
    let enemy = side.other().cell();
    for dc in DIAGONALS {
        let Some(over) = from.offset(side.forward(), dc) else {
            continue;
        };
        let Some(to) = from.offset(2 * side.forward(), 2 * dc) else {
            continue;
        };
        if board.get(over) == enemy && board.get(to) == Cell::Empty {
            out.push(Move {
                from,
                to,
                captured: Some(over),
            });
        }
    }
}
