//! The parallel root: one worker per candidate turn, no shared state.
//!
//! Each root candidate is played onto its own copy of the board and searched
//! to completion with a fresh full window; workers never exchange bounds and
//! none is cancelled early. Results come back in candidate order and the
//! reduction keeps the maximum with ties going to the later candidate, which
//! differs deliberately from the strict first-wins rule inside the core.

use rayon::prelude::*;

use crate::board::{Board, MoveError};
use crate::moves::MoveSeq;
use crate::types::Player;

use super::{BestTurn, SearchError, SearchStats, Searcher};

impl Searcher<'_> {
    /// Pick a turn for `side` by searching every root candidate in parallel.
    ///
    /// `Ok(None)` means `side` has no legal turn, which the game scores as a
    /// draw rather than a loss. A worker that fails to replay its candidate
    /// surfaces as [`SearchError::Worker`]; its score is never substituted.
    pub fn best_turn(
        &self,
        board: &Board,
        side: Player,
    ) -> Result<Option<BestTurn>, SearchError> {
        let mut candidates = super::expand(board, side)?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let results: Vec<(i32, SearchStats)> = candidates
            .par_iter()
            .enumerate()
            .map(|(candidate, seq)| {
                self.evaluate_candidate(board, side, seq)
                    .map_err(|source| SearchError::Worker { candidate, source })
            })
            .collect::<Result<_, _>>()?;

        // Max regardless of side; `>=` lets later candidates take ties.
        let mut best = 0;
        let mut value = i32::MIN;
        let mut stats = SearchStats::default();
        for (i, &(candidate_value, candidate_stats)) in results.iter().enumerate() {
            stats.add(candidate_stats);
            if candidate_value >= value {
                value = candidate_value;
                best = i;
            }
        }

        Ok(Some(BestTurn {
            seq: candidates.swap_remove(best),
            value,
            stats,
        }))
    }

    /// Worker body: play the candidate on a private board and search the
    /// answering position one ply down with the full window.
    fn evaluate_candidate(
        &self,
        board: &Board,
        side: Player,
        seq: &MoveSeq,
    ) -> Result<(i32, SearchStats), MoveError> {
        let mut child = board.clone();
        child.apply_sequence(side, seq)?;
        let mut stats = SearchStats::default();
        let (value, _) =
            self.alpha_beta(&child, side.other(), 1, i32::MIN, i32::MAX, &mut stats)?;
        Ok((value, stats))
    }
}
