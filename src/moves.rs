use serde::Serialize;
use std::fmt;

use crate::types::Square;

/// One piece relocation: a diagonal step onto an empty square, or a jump
/// together with the enemy square it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "->" };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// A complete turn for one piece: either a single ordinary step, or a chain
/// of one or more jumps where each jump starts on the previous landing square.
///
/// Sequences are never empty and never grow in place; extending one during
/// chain search yields a fresh sequence, so siblings in the search tree cannot
/// observe each other's tails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSeq {
    moves: Vec<Move>,
}

impl MoveSeq {
    #[inline]
    pub fn single(mv: Move) -> Self {
        MoveSeq { moves: vec![mv] }
    }

    /// A new sequence equal to `self` with one further jump appended.
    #[inline]
    pub fn extended(&self, mv: Move) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);
        MoveSeq { moves }
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// First relocation of the turn.
    #[inline]
    pub fn first(&self) -> Move {
        self.moves[0]
    }

    /// Last relocation of the turn; its `to` is where the piece ends up.
    #[inline]
    pub fn last(&self) -> Move {
        self.moves[self.moves.len() - 1]
    }

    /// The squares the piece visits, starting square included.
    pub fn path(&self) -> Vec<Square> {
        let mut path = Vec::with_capacity(self.moves.len() + 1);
        path.push(self.first().from);
        path.extend(self.moves.iter().map(|mv| mv.to));
        path
    }
}

impl fmt::Display for MoveSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first().from)?;
        for mv in &self.moves {
            let sep = if mv.is_capture() { "x" } else { "->" };
            write!(f, "{sep}{}", mv.to)?;
        }
        Ok(())
    }
}
