use std::fmt;

use super::{state::State, Score};

/// Point-in-time snapshot of a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct GameStatus {
  /// Game finished
  pub over: bool,
  /// Game won, implies `over`
  pub won: bool,
  /// Current score
  pub score: Score,
  /// Moves made
  pub moves: u32,
}

impl GameStatus {
  pub(crate) fn new(state: State, score: Score, moves: u32) -> Self {
    GameStatus {
      over: state.is_end(),
      won: state.is_win(),
      score,
      moves,
    }
  }

  pub fn state(&self) -> State {
    match (self.over, self.won) {
      (true, true) => State::Won,
      (true, false) => State::Lost,
      _ => State::Playing,
    }
  }
}

impl fmt::Display for GameStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} (score: {}, moves: {})",
      self.state(),
      self.score,
      self.moves
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_state_round_trip() {
    for state in [State::Playing, State::Won, State::Lost] {
      let status = GameStatus::new(state, 0, 0);
      assert_eq!(status.state(), state);
      assert!(!status.won || status.over);
    }
  }

  #[test]
  fn test_display() {
    let status = GameStatus::new(State::Lost, 1234, 97);
    assert_eq!(status.to_string(), "Lost (score: 1234, moves: 97)");
  }
}
