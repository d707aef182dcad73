//! The sequential alpha-beta core.
//!
//! White maximizes and tightens `alpha`, Black minimizes and tightens `beta`,
//! and a branch is abandoned once `alpha` exceeds `beta`. Updates are strict:
//! a child merely equalling the running bound does not displace the move
//! recorded so far, so among equally good turns the first in expansion order
//! wins. The chosen turn is materialized only at the root; interior nodes
//! hand back values alone.

use crate::board::{Board, MoveError};
use crate::engine::movegen;
use crate::moves::MoveSeq;
use crate::types::Player;

use super::{SearchError, SearchStats, Searcher};

impl Searcher<'_> {
    /// Full-window search with `side` to move. Returns the minimax value of
    /// the position, the turn that attains it (for non-leaf roots), and the
    /// node counters.
    pub fn search(
        &self,
        board: &Board,
        side: Player,
    ) -> Result<(i32, Option<MoveSeq>, SearchStats), SearchError> {
        let mut stats = SearchStats::default();
        let (value, best) = self.alpha_beta(board, side, 0, i32::MIN, i32::MAX, &mut stats)?;
        Ok((value, best, stats))
    }

    /// One node of the recursion. `depth` counts plies from the root; the
    /// recursion stops at `max_depth`, at a finished game, or when the side
    /// to move is stuck, and scores such leaves from the point of view of
    /// `side` itself.
    pub(crate) fn alpha_beta(
        &self,
        board: &Board,
        side: Player,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Result<(i32, Option<MoveSeq>), MoveError> {
        stats.nodes += 1;
        if self.is_leaf(board, side, depth) {
            stats.leaf_evals += 1;
            return Ok((self.evaluator.score(board, side), None));
        }

        let candidates = super::expand(board, side)?;
        let mut best: Option<usize> = None;
        match side {
            Player::White => {
                for (i, seq) in candidates.iter().enumerate() {
                    let mut child = board.clone();
                    child.apply_sequence(side, seq)?;
                    let (value, _) =
                        self.alpha_beta(&child, side.other(), depth + 1, alpha, beta, stats)?;
                    if value > alpha {
                        alpha = value;
                        best = Some(i);
                    }
                    if alpha > beta {
                        break;
                    }
                }
                Ok((alpha, take_at_root(depth, candidates, best)))
            }
            Player::Black => {
                for (i, seq) in candidates.iter().enumerate() {
                    let mut child = board.clone();
                    child.apply_sequence(side, seq)?;
                    let (value, _) =
                        self.alpha_beta(&child, side.other(), depth + 1, alpha, beta, stats)?;
                    if value < beta {
                        beta = value;
                        best = Some(i);
                    }
                    if alpha > beta {
                        break;
                    }
                }
                Ok((beta, take_at_root(depth, candidates, best)))
            }
        }
    }

    fn is_leaf(&self, board: &Board, side: Player, depth: u8) -> bool {
        depth >= self.max_depth
            || board.game_complete()
            || !movegen::side_has_turn(board, side)
    }
}

/// Hand the chosen turn out only at depth 0; interior nodes drop it.
#[inline]
fn take_at_root(depth: u8, mut candidates: Vec<MoveSeq>, best: Option<usize>) -> Option<MoveSeq> {
    if depth == 0 {
        best.map(|i| candidates.swap_remove(i))
    } else {
        None
    }
}
