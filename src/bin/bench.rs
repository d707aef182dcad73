use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use draughtsman::{random_board, rng_for_stream, Material, Player, Searcher, DEFAULT_MAX_DEPTH};

#[derive(Debug, Parser)]
#[command(name = "bench", about = "Time the searcher over random mid-game positions")]
struct Args {
    /// Number of positions to search
    #[arg(long, default_value_t = 20)]
    positions: u64,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Pieces per side in the generated positions
    #[arg(long, default_value_t = 8)]
    pieces: u8,

    /// Base RNG seed; position i draws from stream i
    #[arg(long, default_value_t = 0xD1CE)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let evaluator = Material;
    let searcher = Searcher::new(&evaluator, args.depth);

    let pb = ProgressBar::new(args.positions);
    pb.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}",
    )?);

    let mut total_nodes = 0u64;
    let mut total_leaves = 0u64;
    let mut total_time = Duration::ZERO;
    let mut slowest = Duration::ZERO;
    let mut stuck = 0u64;

    for i in 0..args.positions {
        let mut rng = rng_for_stream(args.seed, i);
        let board = random_board(&mut rng, args.pieces);
        let side = if i % 2 == 0 { Player::White } else { Player::Black };

        let turn_start = Instant::now();
        match searcher.best_turn(&board, side)? {
            Some(turn) => {
                let elapsed = turn_start.elapsed();
                total_nodes += turn.stats.nodes;
                total_leaves += turn.stats.leaf_evals;
                total_time += elapsed;
                slowest = slowest.max(elapsed);
            }
            None => stuck += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let searched = args.positions - stuck;
    println!(
        "[bench] positions={searched} stuck={stuck} depth={} pieces={}",
        args.depth, args.pieces
    );
    println!("[bench] nodes={total_nodes} leaf_evals={total_leaves}");
    if searched > 0 && !total_time.is_zero() {
        let nodes_per_sec = total_nodes as f64 / total_time.as_secs_f64();
        println!(
            "[bench] search time={:.3?} mean={:.3?} max={:.3?} nodes/s={nodes_per_sec:.0}",
            total_time,
            total_time / searched as u32,
            slowest
        );
    }

    Ok(())
}
