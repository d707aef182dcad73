use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::Board;
use crate::types::{Cell, Player, Square, SIZE};

/// Deterministic RNG factory for a given (seed, stream) pair.
///
/// Derives a 64-bit seed as `seed ^ stream` and feeds it to a PCG 64-bit
/// generator, so equal inputs reproduce the same sequence across runs.
/// Benches key the stream by position index; tests by case number.
#[inline]
pub fn rng_for_stream(seed: u64, stream: u64) -> impl Rng {
    Pcg64::seed_from_u64(seed ^ stream)
}

/// Scatter `pieces_per_side` pieces of each colour over distinct playable
/// squares, anywhere on the board. Positions come out mid-game-like rather
/// than reachable-by-play, which is what benches and randomized tests want.
pub fn random_board<R: Rng>(rng: &mut R, pieces_per_side: u8) -> Board {
    debug_assert!(u16::from(pieces_per_side) * 2 <= 32, "more pieces than playable squares");
    let mut playable: Vec<Square> = Vec::with_capacity(32);
    for row in 0..SIZE {
        for col in 0..SIZE {
            let sq = Square::new(row, col);
            if sq.is_playable() {
                playable.push(sq);
            }
        }
    }
    playable.shuffle(rng);

    let mut cells = [[Cell::Unplayable; SIZE as usize]; SIZE as usize];
    for sq in &playable {
        cells[sq.row as usize][sq.col as usize] = Cell::Empty;
    }
    let n = pieces_per_side as usize;
    for (i, sq) in playable.iter().take(n * 2).enumerate() {
        let side = if i < n { Player::White } else { Player::Black };
        cells[sq.row as usize][sq.col as usize] = side.cell();
    }
    Board::from_cells(cells)
}
