use std::{
  fmt,
  sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::{
  board::Board, error::MoveSignal, grid::CELLS, r#move::Move, status::GameStatus, Cell, Score,
};

/// Thread-safe handle to a [`Board`].
///
/// Moves take the write lock for their whole duration, every accessor takes
/// the read lock and returns an owned copy, so readers never see a half
/// applied move. Cloning the handle shares the same board.
#[derive(Clone)]
pub struct SharedBoard {
  inner: Arc<RwLock<Board>>,
}

impl SharedBoard {
  /// Create a shared board with two initial tiles placed.
  pub fn new(seed: i64) -> Self {
    SharedBoard::from(Board::new(seed))
  }

  fn read(&self) -> RwLockReadGuard<'_, Board> {
    // a move never panics halfway, so the board behind a poisoned lock is
    // still consistent
    self.inner.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Board> {
    self.inner.write().unwrap_or_else(PoisonError::into_inner)
  }

  /// Perform one move, see [`Board::apply`].
  ///
  /// # Errors
  /// Same signals as [`Board::apply`].
  pub fn apply(&self, direction: Move) -> Result<(), MoveSignal> {
    self.write().apply(direction)
  }

  pub fn status(&self) -> GameStatus {
    self.read().status()
  }

  pub fn values(&self) -> [Cell; CELLS] {
    self.read().values()
  }

  pub fn score(&self) -> Score {
    self.read().score()
  }

  pub fn moves(&self) -> u32 {
    self.read().moves()
  }

  /// Human readable dump of the grid.
  pub fn to_display_string(&self) -> String {
    self.read().to_string()
  }

  /// Owned copy of the whole board, including its random state.
  pub fn snapshot(&self) -> Board {
    self.read().clone()
  }
}

impl From<Board> for SharedBoard {
  fn from(board: Board) -> Self {
    SharedBoard {
      inner: Arc::new(RwLock::new(board)),
    }
  }
}

impl fmt::Debug for SharedBoard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Shared{:?}", *self.read())
  }
}

impl fmt::Display for SharedBoard {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", *self.read())
  }
}

#[cfg(test)]
mod tests {
  use std::thread;

  use super::*;
  use crate::grid::Grid;

  #[test]
  fn test_matches_plain_board() {
    let shared = SharedBoard::new(99);
    let mut plain = Board::new(99);

    for direction in Move::ALL.iter().cycle().take(64) {
      assert_eq!(shared.apply(*direction), plain.apply(*direction));
      assert_eq!(shared.values(), plain.values());
      assert_eq!(shared.status(), plain.status());
    }

    assert_eq!(shared.to_display_string(), plain.to_string());
    assert_eq!(shared.to_string(), plain.to_string());
  }

  #[test]
  fn test_values_are_copies() {
    let shared = SharedBoard::new(5);

    let mut values = shared.values();
    values.iter_mut().for_each(|v| *v = 2048);

    assert_ne!(shared.values(), values);
    assert_eq!(shared.status(), GameStatus::default());
  }

  #[test]
  fn test_clones_share_board() {
    let a = SharedBoard::from(Board::from_grid(Grid::new([2; CELLS]), 0));
    let b = a.clone();

    assert_eq!(a.apply(Move::Left), Ok(()));
    assert_eq!(b.moves(), 1);
    assert_eq!(b.score(), 32);
    assert_eq!(b.snapshot().values(), a.values());
  }

  #[test]
  fn test_readers_never_see_torn_moves() {
    let shared = SharedBoard::new(2024);

    thread::scope(|scope| {
      for _ in 0..4 {
        let reader = shared.clone();
        scope.spawn(move || {
          let mut last = GameStatus::default();

          for _ in 0..2_000 {
            let status = reader.status();

            assert!(status.moves >= last.moves);
            assert!(status.score >= last.score);
            assert!(!status.won || status.over);
            assert!(reader.values().iter().any(|&v| v != 0));

            last = status;
          }
        });
      }

      let writer = shared.clone();
      scope.spawn(move || {
        for direction in Move::ALL.iter().cycle().take(500) {
          if let Err(MoveSignal::EndOfGame | MoveSignal::WinGame) = writer.apply(*direction) {
            break;
          }
        }
      });
    });

    let status = shared.status();
    assert!(status.moves > 0);
  }
}
