//! Self-play benchmark.
//!
//! Plays many seeded games in parallel with a fixed direction schedule. The
//! schedule is only a driver for measuring the engine, it does not try to
//! play well.

use std::time::{Duration, Instant};

use log::info;
use rayon::{
  prelude::{IntoParallelIterator, ParallelIterator},
  ThreadPoolBuildError, ThreadPoolBuilder,
};

use super::{board::Board, r#move::Move, stats::Stats, utils::format_duration};

/// Directions cycled through by every benchmark game.
const SCHEDULE: [Move; 6] = [
  Move::Left,
  Move::Down,
  Move::Right,
  Move::Down,
  Move::Up,
  Move::Down,
];

#[derive(Debug, Clone, Copy)]
pub struct PerfConfig {
  /// Number of games to play
  pub games: u32,
  /// Number of worker threads
  pub threads: usize,
  /// Seed of the first game, game `i` uses `first_seed + i` (wrapping)
  pub first_seed: i64,
  /// Moves after which an unfinished game is stopped
  pub max_moves: u32,
}

impl Default for PerfConfig {
  fn default() -> Self {
    PerfConfig {
      games: 1000,
      threads: 1,
      first_seed: 0,
      max_moves: 100_000,
    }
  }
}

/// Result of a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct PerfReport {
  pub stats: Stats,
  pub elapsed: Duration,
}

impl PerfReport {
  /// Moves per second over the whole run.
  #[allow(clippy::cast_precision_loss)]
  pub fn moves_per_second(&self) -> f32 {
    let secs = self.elapsed.as_secs_f32();

    if secs > 0.0 {
      self.stats.moves as f32 / secs
    } else {
      0.0
    }
  }
}

/// Play a single game until it ends or `max_moves` is reached.
pub fn play_game(seed: i64, max_moves: u32) -> Stats {
  let mut board = Board::new(seed);

  for direction in SCHEDULE.iter().cycle() {
    if board.moves() >= max_moves {
      break;
    }

    if let Err(signal) = board.apply(*direction) {
      if signal.is_terminal() {
        break;
      }
    }
  }

  let mut stats = Stats::new();
  stats.record(&board);
  stats
}

/// Play all configured games on a dedicated thread pool.
///
/// # Errors
/// Returns an error if the thread pool can't be created.
pub fn run(config: &PerfConfig) -> Result<PerfReport, ThreadPoolBuildError> {
  let pool = ThreadPoolBuilder::new()
    .num_threads(config.threads)
    .thread_name(|index| format!("game-{index}"))
    .build()?;

  let start = Instant::now();

  let stats: Stats = pool.install(|| {
    (0..config.games)
      .into_par_iter()
      .map(|i| play_game(config.first_seed.wrapping_add(i64::from(i)), config.max_moves))
      .sum()
  });

  let report = PerfReport {
    stats,
    elapsed: start.elapsed(),
  };

  info!(
    "played {} games on {} threads in {}",
    stats.games,
    config.threads,
    format_duration(report.elapsed)
  );

  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_play_game_finishes() {
    let stats = play_game(11, 100_000);

    assert_eq!(stats.games, 1);
    assert_eq!(stats.wins + stats.losses, 1);
    assert!(stats.moves > 0);
    assert!(stats.highest_tile >= 4);
  }

  #[test]
  fn test_play_game_respects_max_moves() {
    let stats = play_game(11, 3);

    assert_eq!(stats.games, 1);
    assert_eq!(stats.moves, 3);
    assert_eq!(stats.wins + stats.losses, 0);
  }

  #[test]
  fn test_run_is_deterministic() {
    let config = PerfConfig {
      games: 16,
      threads: 4,
      first_seed: 100,
      ..PerfConfig::default()
    };

    let a = run(&config).unwrap();
    let b = run(&PerfConfig { threads: 1, ..config }).unwrap();

    assert_eq!(a.stats.games, 16);
    assert_eq!(a.stats, b.stats);

    let sequential: Stats = (100..116).map(|seed| play_game(seed, config.max_moves)).sum();
    assert_eq!(a.stats, sequential);
  }
}
