use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use draughtsman::{load_position, Material, MoveSeq, Player, Searcher, DEFAULT_MAX_DEPTH};

#[derive(Debug, Parser)]
#[command(name = "analyze", about = "Search one draughts position and report the best turn")]
struct Args {
    /// Position JSON file: eight rows of '.', 'w', 'b', '-' plus to_move
    #[arg(long)]
    position: PathBuf,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,

    /// Emit a single JSON object instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    side: Player,
    depth: u8,
    turn: Option<MoveSeq>,
    value: Option<i32>,
    nodes: u64,
    leaf_evals: u64,
    elapsed_ms: u128,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (board, side) = load_position(&args.position)?;

    let evaluator = Material;
    let searcher = Searcher::new(&evaluator, args.depth);

    let start = Instant::now();
    let best = searcher.best_turn(&board, side)?;
    let elapsed = start.elapsed();

    if args.json {
        let report = match &best {
            Some(turn) => Report {
                side,
                depth: args.depth,
                turn: Some(turn.seq.clone()),
                value: Some(turn.value),
                nodes: turn.stats.nodes,
                leaf_evals: turn.stats.leaf_evals,
                elapsed_ms: elapsed.as_millis(),
            },
            None => Report {
                side,
                depth: args.depth,
                turn: None,
                value: None,
                nodes: 0,
                leaf_evals: 0,
                elapsed_ms: elapsed.as_millis(),
            },
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("{board}");
    match best {
        Some(turn) => {
            println!("[analyze] {side} best turn: {}", turn.seq);
            println!(
                "[analyze] value={} nodes={} leaf_evals={} in {:.3?}",
                turn.value, turn.stats.nodes, turn.stats.leaf_evals, elapsed
            );
        }
        None => println!("[analyze] {side} has no legal turn (draw)"),
    }

    Ok(())
}
