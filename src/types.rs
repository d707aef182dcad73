use serde::{Deserialize, Serialize};
use std::fmt;

/// Board side length. Squares are addressed `(row, col)` with both in `0..SIZE`.
pub const SIZE: u8 = 8;

/// The two sides. White occupies the low rows and advances toward higher
/// row numbers; Black occupies the high rows and advances toward lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward step for this side.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The cell occupied by one of this side's pieces.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one board square. Squares off the checkered pattern are
/// permanently `Unplayable` and never hold a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    White,
    Black,
    Unplayable,
}

impl Cell {
    /// The side whose piece sits here, if any.
    #[inline]
    pub fn piece(self) -> Option<Player> {
        match self {
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
            Cell::Empty | Cell::Unplayable => None,
        }
    }
}

/// A board coordinate. Construction does not check bounds; use [`Square::offset`]
/// to derive neighbours safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    /// Pieces only ever stand on squares whose coordinates sum to an even number.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// The square `dr` rows and `dc` columns away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = u8::try_from(i16::from(self.row) + i16::from(dr)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(dc)).ok()?;
        if row < SIZE && col < SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
