use thiserror::Error;

use crate::board::{Board, MoveError};
use crate::engine::movegen;
use crate::moves::MoveSeq;
use crate::search::{expand, BestTurn, SearchError, Searcher};
use crate::types::Player;

/// Who supplies a side's turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Robot,
}

/// How a finished game ended. A side that still has pieces but cannot move
/// draws the game; wiping the opponent out wins it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("not a legal turn for {side}: {seq}")]
    IllegalTurn { side: Player, seq: MoveSeq },
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A game in progress: board, whose turn it is, and how each side is driven.
///
/// The struct only advances state; rendering and input belong to the caller.
/// White always moves first.
#[derive(Debug)]
pub struct Game {
    board: Board,
    white: Controller,
    black: Controller,
    to_move: Player,
    moves_played: u32,
    outcome: Option<Outcome>,
}

impl Game {
    pub fn new(white: Controller, black: Controller) -> Self {
        Game::from_position(Board::new(), Player::White, white, black)
    }

    /// Resume from an arbitrary position, as when loaded from a file.
    pub fn from_position(
        board: Board,
        to_move: Player,
        white: Controller,
        black: Controller,
    ) -> Self {
        Game {
            board,
            white,
            black,
            to_move,
            moves_played: 0,
            outcome: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn controller(&self, side: Player) -> Controller {
        match side {
            Player::White => self.white,
            Player::Black => self.black,
        }
    }

    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every turn the side to move may legally play.
    pub fn legal_turns(&self) -> Result<Vec<MoveSeq>, MoveError> {
        expand(&self.board, self.to_move)
    }

    /// Pre-turn bookkeeping: a wiped-out side has already lost, and a side
    /// that still has pieces but no turn draws the game on the spot.
    /// Returns the outcome if the game is (now) over.
    pub fn pre_turn_outcome(&mut self) -> Option<Outcome> {
        if self.outcome.is_none() {
            if self.board.game_complete() {
                let winner = if self.board.white_pieces() > 0 {
                    Player::White
                } else {
                    Player::Black
                };
                self.outcome = Some(Outcome::Win(winner));
            } else if !movegen::side_has_turn(&self.board, self.to_move) {
                self.outcome = Some(Outcome::Draw);
            }
        }
        self.outcome
    }

    /// Play `seq` for the side to move, validating it against the legal
    /// turns first. Used for human input.
    pub fn play_turn(&mut self, seq: &MoveSeq) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        let side = self.to_move;
        let legal = self.legal_turns()?;
        if !legal.contains(seq) {
            return Err(GameError::IllegalTurn {
                side,
                seq: seq.clone(),
            });
        }
        self.commit(seq)?;
        Ok(())
    }

    /// Let the searcher choose and play a turn for the side to move.
    ///
    /// Returns the turn it played, or `None` when the side is stuck, in
    /// which case the game is recorded as drawn.
    pub fn play_robot_turn(
        &mut self,
        searcher: &Searcher<'_>,
    ) -> Result<Option<BestTurn>, GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        match searcher.best_turn(&self.board, self.to_move)? {
            None => {
                self.outcome = Some(Outcome::Draw);
                Ok(None)
            }
            Some(turn) => {
                self.commit(&turn.seq)?;
                Ok(Some(turn))
            }
        }
    }

    fn commit(&mut self, seq: &MoveSeq) -> Result<(), MoveError> {
        let side = self.to_move;
        self.board.apply_sequence(side, seq)?;
        self.moves_played += 1;
        if self.board.game_complete() {
            self.outcome = Some(Outcome::Win(side));
        }
        self.to_move = side.other();
        Ok(())
    }
}
