use rand::Rng;

use draughtsman::{random_board, rng_for_stream, Cell, Square};

fn sample(seq_len: usize, seed: u64, stream: u64) -> Vec<u64> {
    let mut rng = rng_for_stream(seed, stream);
    (0..seq_len).map(|_| rng.gen::<u64>()).collect()
}

#[test]
fn rng_stability_same_pair() {
    let a = sample(16, 0xDEAD_BEEF, 7);
    let b = sample(16, 0xDEAD_BEEF, 7);
    assert_eq!(
        a, b,
        "rng_for_stream must produce stable sequences for identical (seed, stream)"
    );
}

#[test]
fn rng_diff_for_different_pairs() {
    let base_seed: u64 = 0x00C0_FFEE;
    let s1 = sample(16, base_seed, 3);
    let s2 = sample(16, base_seed, 4);
    let s3 = sample(16, base_seed.wrapping_add(1), 3);
    assert_ne!(s1, s2, "changing stream should alter sequence");
    assert_ne!(s1, s3, "changing seed should alter sequence");
}

#[test]
fn random_boards_respect_counts_and_the_checkered_pattern() {
    for case in 0..8u64 {
        let mut rng = rng_for_stream(9, case);
        let board = random_board(&mut rng, 5);
        assert_eq!(board.white_pieces(), 5, "case {case}");
        assert_eq!(board.black_pieces(), 5, "case {case}");

        let mut white = 0;
        let mut black = 0;
        for row in 0..8u8 {
            for col in 0..8u8 {
                let sq = Square::new(row, col);
                match board.get(sq) {
                    Cell::White => white += 1,
                    Cell::Black => black += 1,
                    Cell::Empty => assert!(sq.is_playable(), "empty off pattern at {sq}"),
                    Cell::Unplayable => {
                        assert!(!sq.is_playable(), "unplayable on pattern at {sq}");
                    }
                }
                if board.get(sq).piece().is_some() {
                    assert!(sq.is_playable(), "piece off pattern at {sq}");
                }
            }
        }
        assert_eq!((white, black), (5, 5), "counters match the grid");
    }
}

#[test]
fn random_boards_vary_across_streams() {
    let mut rng_a = rng_for_stream(42, 0);
    let mut rng_b = rng_for_stream(42, 1);
    let a = random_board(&mut rng_a, 8);
    let b = random_board(&mut rng_b, 8);
    assert_ne!(a, b, "different streams should scatter differently");
}

#[test]
fn random_boards_are_reproducible() {
    let mut rng_a = rng_for_stream(7, 7);
    let mut rng_b = rng_for_stream(7, 7);
    assert_eq!(random_board(&mut rng_a, 6), random_board(&mut rng_b, 6));
}

#[test]
fn full_strength_random_boards_fit() {
    let mut rng = rng_for_stream(1, 1);
    let board = random_board(&mut rng, 12);
    assert_eq!(board.white_pieces(), 12);
    assert_eq!(board.black_pieces(), 12);
}
