use thiserror::Error;

use crate::board::MoveError;
use crate::engine::eval::Evaluator;
use crate::moves::MoveSeq;

mod alphabeta;
pub mod expand;
mod parallel;

pub use expand::expand;

/// Ply budget the engine has always played at.
pub const DEFAULT_MAX_DEPTH: u8 = 6;

/// Node and leaf counters threaded through a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions entered, leaves included.
    pub nodes: u64,
    /// Leaves handed to the evaluator.
    pub leaf_evals: u64,
}

impl SearchStats {
    /// Fold another counter set into this one, as when merging per-worker
    /// totals after a parallel root.
    #[inline]
    pub fn add(&mut self, other: SearchStats) {
        self.nodes = self.nodes.saturating_add(other.nodes);
        self.leaf_evals = self.leaf_evals.saturating_add(other.leaf_evals);
    }
}

/// Failure inside a search. Both variants wrap a move that would not replay
/// onto the board it was generated from; a healthy engine never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A root worker failed. The candidate index identifies which root turn
    /// was being explored.
    #[error("worker for root candidate {candidate} failed: {source}")]
    Worker {
        candidate: usize,
        #[source]
        source: MoveError,
    },
    /// The sequential search replayed a move the board rejected.
    #[error("search replayed a move the board rejected: {0}")]
    Invariant(#[from] MoveError),
}

/// The turn a search settled on, with its minimax value and counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestTurn {
    pub seq: MoveSeq,
    pub value: i32,
    pub stats: SearchStats,
}

/// Depth-capped alpha-beta searcher over full turns.
///
/// White is the maximizing side and Black the minimizing side, whatever side
/// the search is asked to move first. Scoring at the depth cap comes from the
/// injected [`Evaluator`], taken from the point of view of the side to move
/// at the leaf.
pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    max_depth: u8,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a dyn Evaluator, max_depth: u8) -> Self {
        Searcher {
            evaluator,
            max_depth,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}
