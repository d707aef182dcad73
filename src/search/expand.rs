//! Turn expansion: from a position to every complete turn a side may play.
//!
//! Captures are compulsory. When any jump exists, only capture chains are
//! produced and every chain is extended until its piece has no further jump
//! from the square it landed on. Only when no jump exists anywhere do the
//! ordinary one-step moves appear, each as a sequence of length one.

use crate::board::{Board, MoveError};
use crate::engine::movegen;
use crate::moves::MoveSeq;
use crate::types::Player;

/// Every complete legal turn for `side` on `board`, in deterministic order:
/// pieces row-major, lower-column diagonal first, chain continuations
/// depth-first in the same diagonal order.
pub fn expand(board: &Board, side: Player) -> Result<Vec<MoveSeq>, MoveError> {
    let forced = movegen::forced_moves(board, side);
    if forced.is_empty() {
        let steps = movegen::ordinary_moves(board, side);
        return Ok(steps.into_iter().map(MoveSeq::single).collect());
    }
    let mut seqs = Vec::new();
    for mv in forced {
        let mut child = board.clone();
        child.apply_move(side, mv)?;
        extend_chain(&child, side, MoveSeq::single(mv), &mut seqs)?;
    }
    Ok(seqs)
}

/// Grow `chain` from its landing square. A chain is emitted exactly when the
/// piece has no further jump; otherwise each continuation is explored on its
/// own copy of the board and of the chain.
fn extend_chain(
    board: &Board,
    side: Player,
    chain: MoveSeq,
    out: &mut Vec<MoveSeq>,
) -> Result<(), MoveError> {
    let landing = chain.last().to;
    let continuations = movegen::forced_moves_from(board, side, landing);
    if continuations.is_empty() {
        out.push(chain);
        return Ok(());
    }
    for mv in continuations {
        let mut child = board.clone();
        child.apply_move(side, mv)?;
        extend_chain(&child, side, chain.extended(mv), out)?;
    }
    Ok(())
}
