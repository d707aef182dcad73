use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;
use crate::types::{Cell, Player, Square, SIZE};

/// On-disk position: eight rows of eight characters plus the side to move.
/// `'.'` is an empty playable square, `'w'` and `'b'` are pieces, `'-'` marks
/// the unplayable squares off the checkered pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionFile {
    pub board: Vec<String>,
    pub to_move: Player,
}

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("failed to read position file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse position JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} characters, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("invalid character {ch:?} at row {row}, column {col}")]
    BadCell { ch: char, row: usize, col: usize },
}

/// Read and validate a position file.
pub fn load_position<P: AsRef<Path>>(path: P) -> Result<(Board, Player), PositionError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let pos: PositionFile = serde_json::from_reader(reader)?;
    board_from_file(&pos)
}

/// Parse a position from JSON text. Same validation as [`load_position`].
pub fn parse_position(text: &str) -> Result<(Board, Player), PositionError> {
    let pos: PositionFile = serde_json::from_str(text)?;
    board_from_file(&pos)
}

fn board_from_file(pos: &PositionFile) -> Result<(Board, Player), PositionError> {
    if pos.board.len() != SIZE as usize {
        return Err(PositionError::RowCount(pos.board.len()));
    }
    let mut cells = [[Cell::Unplayable; SIZE as usize]; SIZE as usize];
    for (row, line) in pos.board.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != SIZE as usize {
            return Err(PositionError::RowLength {
                row,
                len: chars.len(),
            });
        }
        for (col, &ch) in chars.iter().enumerate() {
            let playable = Square::new(row as u8, col as u8).is_playable();
            cells[row][col] = match (ch, playable) {
                ('-', false) => Cell::Unplayable,
                ('.', true) => Cell::Empty,
                ('w', true) => Cell::White,
                ('b', true) => Cell::Black,
                _ => return Err(PositionError::BadCell { ch, row, col }),
            };
        }
    }
    Ok((Board::from_cells(cells), pos.to_move))
}
