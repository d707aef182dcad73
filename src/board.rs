use std::fmt;

use thiserror::Error;

use crate::moves::{Move, MoveSeq};
use crate::types::{Cell, Player, Square, SIZE};

/// A move that does not fit the board it is being applied to.
///
/// Moves produced by the generator always fit the board they were generated
/// for, so seeing one of these means a move was replayed against the wrong
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no {side} piece on {from}")]
    WrongPiece { side: Player, from: Square },
    #[error("destination {to} is not an empty playable square")]
    BadDestination { to: Square },
    #[error("no {victim} piece to capture on {over}")]
    NothingToCapture { victim: Player, over: Square },
}

/// The 8x8 draughts board with per-side piece counters.
///
/// Only squares whose coordinates sum to an even number are playable; the
/// rest stay [`Cell::Unplayable`] for the whole game. Cloning a board yields
/// a fully independent position, which is how the search derives child
/// positions without disturbing their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Row-major; cells[row][col].
    cells: [[Cell; SIZE as usize]; SIZE as usize],
    white_pieces: u8,
    black_pieces: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: twelve White pieces on rows 0..=2, twelve
    /// Black pieces on rows 5..=7.
    pub fn new() -> Self {
        let mut cells = empty_grid();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let sq = Square::new(row, col);
                if !sq.is_playable() {
                    continue;
                }
                if row <= 2 {
                    cells[row as usize][col as usize] = Cell::White;
                } else if row >= 5 {
                    cells[row as usize][col as usize] = Cell::Black;
                }
            }
        }
        Board {
            cells,
            white_pieces: 12,
            black_pieces: 12,
        }
    }

    /// A board with every playable square empty.
    pub fn empty() -> Self {
        Board {
            cells: empty_grid(),
            white_pieces: 0,
            black_pieces: 0,
        }
    }

    /// Build a board from an explicit grid; piece counters are derived by
    /// scanning it. The grid must keep pieces off unplayable squares.
    pub fn from_cells(cells: [[Cell; SIZE as usize]; SIZE as usize]) -> Self {
        let mut white_pieces = 0;
        let mut black_pieces = 0;
        for (row, cols) in cells.iter().enumerate() {
            for (col, cell) in cols.iter().enumerate() {
                match cell.piece() {
                    Some(Player::White) => white_pieces += 1,
                    Some(Player::Black) => black_pieces += 1,
                    None => continue,
                }
                debug_assert!(
                    Square::new(row as u8, col as u8).is_playable(),
                    "piece on unplayable square ({row},{col})"
                );
            }
        }
        Board {
            cells,
            white_pieces,
            black_pieces,
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row as usize][sq.col as usize]
    }

    #[inline]
    fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row as usize][sq.col as usize] = cell;
    }

    #[inline]
    pub fn white_pieces(&self) -> u8 {
        self.white_pieces
    }

    #[inline]
    pub fn black_pieces(&self) -> u8 {
        self.black_pieces
    }

    #[inline]
    pub fn pieces(&self, side: Player) -> u8 {
        match side {
            Player::White => self.white_pieces,
            Player::Black => self.black_pieces,
        }
    }

    /// The game is over as soon as either side has no pieces left.
    #[inline]
    pub fn game_complete(&self) -> bool {
        self.white_pieces == 0 || self.black_pieces == 0
    }

    /// Play one White relocation. Captured Black pieces leave the board and
    /// the Black counter drops with them.
    pub fn apply_white_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_for(Player::White, mv)
    }

    /// Play one Black relocation, the mirror of [`Board::apply_white_move`].
    pub fn apply_black_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply_for(Player::Black, mv)
    }

    /// Side-dispatching wrapper over the two per-side primitives.
    #[inline]
    pub fn apply_move(&mut self, side: Player, mv: Move) -> Result<(), MoveError> {
        match side {
            Player::White => self.apply_white_move(mv),
            Player::Black => self.apply_black_move(mv),
        }
    }

    /// Play a full turn, one relocation at a time. On error the board is left
    /// as of the last relocation that succeeded.
    pub fn apply_sequence(&mut self, side: Player, seq: &MoveSeq) -> Result<(), MoveError> {
        for mv in seq.moves() {
            self.apply_move(side, *mv)?;
        }
        Ok(())
    }

    fn apply_for(&mut self, side: Player, mv: Move) -> Result<(), MoveError> {
        if self.get(mv.from) != side.cell() {
            return Err(MoveError::WrongPiece {
                side,
                from: mv.from,
            });
        }
        if self.get(mv.to) != Cell::Empty {
            return Err(MoveError::BadDestination { to: mv.to });
        }
        if let Some(over) = mv.captured {
            let victim = side.other();
            if self.get(over) != victim.cell() {
                return Err(MoveError::NothingToCapture { victim, over });
            }
            self.set(over, Cell::Empty);
            match victim {
                Player::White => self.white_pieces -= 1,
                Player::Black => self.black_pieces -= 1,
            }
        }
        self.set(mv.from, Cell::Empty);
        self.set(mv.to, side.cell());
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..SIZE {
            write!(f, "{row} ")?;
            for col in 0..SIZE {
                let glyph = match self.cells[row as usize][col as usize] {
                    Cell::Empty => '.',
                    Cell::White => 'w',
                    Cell::Black => 'b',
                    Cell::Unplayable => ' ',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn empty_grid() -> [[Cell; SIZE as usize]; SIZE as usize] {
    let mut cells = [[Cell::Unplayable; SIZE as usize]; SIZE as usize];
    for row in 0..SIZE {
        for col in 0..SIZE {
            if Square::new(row, col).is_playable() {
                cells[row as usize][col as usize] = Cell::Empty;
            }
        }
    }
    cells
}
