use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::{Parser, ValueEnum};

use draughtsman::{
    Controller, Game, Material, MoveSeq, Outcome, Player, Searcher, Square, DEFAULT_MAX_DEPTH,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerOpt {
    Human,
    Robot,
}

impl From<ControllerOpt> for Controller {
    fn from(opt: ControllerOpt) -> Self {
        match opt {
            ControllerOpt::Human => Controller::Human,
            ControllerOpt::Robot => Controller::Robot,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Console draughts, human or engine on either side")]
struct Args {
    /// Who plays White; prompted interactively when omitted
    #[arg(long, value_enum)]
    white: Option<ControllerOpt>,

    /// Who plays Black; prompted interactively when omitted
    #[arg(long, value_enum)]
    black: Option<ControllerOpt>,

    /// Robot search depth in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let (white, black) = match (args.white, args.black) {
        (Some(w), Some(b)) => (w.into(), b.into()),
        _ => prompt_sides(&mut lines)?,
    };

    let evaluator = Material;
    let searcher = Searcher::new(&evaluator, args.depth);
    let mut game = Game::new(white, black);
    let start = Instant::now();

    let outcome = loop {
        if let Some(outcome) = game.pre_turn_outcome() {
            break outcome;
        }
        println!("{}", game.board());
        let side = game.to_move();
        match game.controller(side) {
            Controller::Robot => {
                let turn_start = Instant::now();
                if let Some(turn) = game.play_robot_turn(&searcher)? {
                    println!(
                        "[play] {side} plays {} (value {}, {} nodes, {:.3?})",
                        turn.seq,
                        turn.value,
                        turn.stats.nodes,
                        turn_start.elapsed()
                    );
                }
            }
            Controller::Human => {
                let seq = read_turn(&mut lines, &game, side)?;
                game.play_turn(&seq)?;
                println!("[play] {side} plays {seq}");
            }
        }
    };

    println!("{}", game.board());
    match outcome {
        Outcome::Win(side) => println!("[play] {side} wins"),
        Outcome::Draw => println!("[play] draw: {} cannot move", game.to_move()),
    }
    println!(
        "[play] {} moves in {:.3?}",
        game.moves_played(),
        start.elapsed()
    );

    Ok(())
}

fn prompt_sides(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(Controller, Controller), Box<dyn std::error::Error>> {
    loop {
        print!("Humans play [w]hite, [b]lack, [a]ll, or [n]one? ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err("input ended before the game did".into());
        };
        match line?.trim().to_ascii_lowercase().as_str() {
            "w" => return Ok((Controller::Human, Controller::Robot)),
            "b" => return Ok((Controller::Robot, Controller::Human)),
            "a" => return Ok((Controller::Human, Controller::Human)),
            "n" => return Ok((Controller::Robot, Controller::Robot)),
            _ => println!("[play] answer w, b, a, or n"),
        }
    }
}

/// Prompt until the line names a legal turn. Input is the squares the piece
/// visits, like "2,1 3,0", with every landing square listed for captures.
fn read_turn(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    game: &Game,
    side: Player,
) -> Result<MoveSeq, Box<dyn std::error::Error>> {
    let legal = game.legal_turns()?;
    loop {
        print!("{side} to move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err("input ended before the game did".into());
        };
        let line = line?;
        match parse_path(&line) {
            Some(path) => {
                if let Some(seq) = legal.iter().find(|seq| seq.path() == path) {
                    return Ok(seq.clone());
                }
                println!("[play] not a legal turn; choose one of:");
                for seq in &legal {
                    println!("[play]   {seq}");
                }
            }
            None => println!("[play] could not read that; give row,col pairs separated by spaces"),
        }
    }
}

fn parse_path(line: &str) -> Option<Vec<Square>> {
    let mut path = Vec::new();
    for token in line.split_whitespace() {
        let (row, col) = token.split_once(',')?;
        path.push(Square::new(
            row.trim().parse().ok()?,
            col.trim().parse().ok()?,
        ));
    }
    if path.len() >= 2 {
        Some(path)
    } else {
        None
    }
}
