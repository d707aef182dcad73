#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod moves;
pub mod board;
pub mod position;
pub mod rng;
pub mod game;

pub mod engine {
    pub mod eval;
    pub mod movegen;
}

pub mod search;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, MoveError};
pub use crate::engine::eval::{Evaluator, Material};
pub use crate::game::{Controller, Game, GameError, Outcome};
pub use crate::moves::{Move, MoveSeq};
pub use crate::position::{load_position, parse_position, PositionError, PositionFile};
pub use crate::rng::{random_board, rng_for_stream};
pub use crate::search::{
    expand, BestTurn, SearchError, SearchStats, Searcher, DEFAULT_MAX_DEPTH,
};
pub use crate::types::{Cell, Player, Square};
