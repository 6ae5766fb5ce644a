use std::{
  fmt,
  iter::Sum,
  ops::{Add, AddAssign},
};

use super::{board::Board, utils::format_number, Cell, Score};

/// Aggregated results of finished games.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stats {
  pub games: u32,
  pub wins: u32,
  pub losses: u32,
  pub moves: u64,
  pub best_score: Score,
  pub highest_tile: Cell,
}
impl Stats {
  pub fn new() -> Stats {
    Stats::default()
  }

  /// Record the outcome of one game.
  pub fn record(&mut self, board: &Board) {
    let state = board.state();

    self.games += 1;
    self.wins += u32::from(state.is_win());
    self.losses += u32::from(state.is_lose());
    self.moves += u64::from(board.moves());
    self.best_score = self.best_score.max(board.score());
    self.highest_tile = self.highest_tile.max(board.grid().highest());
  }

  /// Ratio of won games, zero if no game was played.
  #[allow(clippy::cast_precision_loss)]
  pub fn win_rate(&self) -> f32 {
    if self.games == 0 {
      0.0
    } else {
      self.wins as f32 / self.games as f32
    }
  }
}
impl fmt::Display for Stats {
  #[allow(clippy::cast_precision_loss)]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "Games played: {} ({} won, {} lost, {:.1}% win rate)",
      self.games,
      self.wins,
      self.losses,
      self.win_rate() * 100.0
    )?;
    writeln!(
      f,
      "Moves made: {} ({})",
      self.moves,
      format_number(self.moves as f32)
    )?;
    write!(
      f,
      "Best score: {}, highest tile: {}",
      self.best_score, self.highest_tile
    )
  }
}
impl Add for Stats {
  type Output = Stats;

  fn add(self, other: Stats) -> Self::Output {
    Stats {
      games: self.games + other.games,
      wins: self.wins + other.wins,
      losses: self.losses + other.losses,
      moves: self.moves + other.moves,
      best_score: self.best_score.max(other.best_score),
      highest_tile: self.highest_tile.max(other.highest_tile),
    }
  }
}
impl AddAssign for Stats {
  fn add_assign(&mut self, other: Stats) {
    *self = *self + other;
  }
}
impl Sum for Stats {
  fn sum<I: Iterator<Item = Stats>>(iter: I) -> Self {
    iter.fold(Stats::new(), Add::add)
  }
}
