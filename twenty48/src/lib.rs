//! Deterministic 2048 game engine.
//!
//! [`Board`] is the lock-free game state, [`SharedBoard`] wraps it for use
//! from several threads. Solvers and user interfaces drive a board through
//! [`Board::apply`] and read it back through snapshots.

mod board;
mod error;
mod grid;
mod r#move; // r# to allow reserved keyword as name
#[cfg(feature = "notation")]
pub mod notation;
pub mod perf;
pub mod row;
mod shared;
mod spawner;
mod state;
mod stats;
mod status;
pub mod utils;

pub use board::{Board, WINNING_TILE};
#[cfg(feature = "notation")]
pub use error::NotationError;
pub use error::{MoveParseError, MoveSignal};
pub use grid::{Grid, CELLS, SIZE};
pub use r#move::Move; // r# to allow reserved keyword as name
pub use shared::SharedBoard;
pub use spawner::spawn;
pub use state::State;
pub use stats::Stats;
pub use status::GameStatus;

/// Value of a single cell, zero for an empty one.
pub type Cell = u32;
pub type Score = u32;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;
