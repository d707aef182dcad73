use crate::board::Board;
use crate::types::Player;

/// Static position scoring from one side's point of view.
///
/// The search calls this once per leaf, concurrently from the root workers,
/// so implementations must be pure and `Sync`. Higher is better for
/// `perspective`.
pub trait Evaluator: Sync {
    fn score(&self, board: &Board, perspective: Player) -> i32;
}

/// Plain material count: own pieces minus enemy pieces.
#[derive(Debug, Default, Clone, Copy)]
pub struct Material;

impl Evaluator for Material {
    #[inline]
    fn score(&self, board: &Board, perspective: Player) -> i32 {
        i32::from(board.pieces(perspective)) - i32::from(board.pieces(perspective.other()))
    }
}
