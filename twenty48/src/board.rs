use std::fmt;

use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
  error::MoveSignal,
  grid::{Grid, CELLS},
  r#move::Move,
  spawner::spawn,
  state::State,
  status::GameStatus,
  Cell, Score,
};

/// Tile value that wins the game.
pub const WINNING_TILE: Cell = 2048;

/// A 2048 game board and its state.
///
/// This is a plain value type. Use [`SharedBoard`](crate::SharedBoard) to
/// share a board between threads.
#[derive(Clone)]
pub struct Board {
  grid: Grid,
  score: Score,
  moves: u32,
  state: State,
  rng: ChaCha8Rng,
}

impl Board {
  /// Create a board with two initial tiles placed.
  ///
  /// The seed drives every random choice, so the same seed and the same
  /// sequence of moves always replay the same game.
  pub fn new(seed: i64) -> Board {
    let mut board = Board::from_grid(Grid::EMPTY, seed);

    for _ in 0..2 {
      let placed = spawn(&mut board.grid, &mut board.rng);
      debug_assert!(placed.is_ok(), "an empty grid has room for two tiles");
    }

    board
  }

  /// Create a board from an existing grid, without placing any tile.
  #[allow(clippy::cast_sign_loss)]
  pub fn from_grid(grid: Grid, seed: i64) -> Board {
    Board {
      grid,
      score: 0,
      moves: 0,
      state: State::Playing,
      // bit-preserving, negative seeds are distinct from positive ones
      rng: ChaCha8Rng::seed_from_u64(seed as u64),
    }
  }

  /// Perform one move and place a new tile on a random empty cell.
  ///
  /// # Errors
  /// - [`MoveSignal::NoFreeCell`] if no cell was free for the new tile, but a
  ///   merge is still possible.
  /// - [`MoveSignal::WinGame`] if the winning tile was reached, or the game
  ///   was already won.
  /// - [`MoveSignal::EndOfGame`] if the board is full and nothing can merge,
  ///   or the game was already lost.
  pub fn apply(&mut self, direction: Move) -> Result<(), MoveSignal> {
    match self.state {
      State::Won => return Err(MoveSignal::WinGame),
      State::Lost => return Err(MoveSignal::EndOfGame),
      State::Playing => {}
    }

    self.moves += 1;

    let gained = self.shift(direction);
    self.score += gained;
    trace!("move {} {direction}: +{gained}", self.moves);

    if self.grid.contains(WINNING_TILE) {
      self.state = State::Won;
      info!("game won after {} moves, score {}", self.moves, self.score);
      return Err(MoveSignal::WinGame);
    }

    let spawned = spawn(&mut self.grid, &mut self.rng);

    if !self.grid.is_full() {
      return spawned.map(|_| ());
    }

    if self.grid.has_adjacent_pair() {
      let moves = self.moves;
      return spawned.map(|_| ()).map_err(|signal| {
        debug!("move {moves}: {signal}");
        signal
      });
    }

    self.state = State::Lost;
    info!("game lost after {} moves, score {}", self.moves, self.score);
    Err(MoveSignal::EndOfGame)
  }

  /// Slide and merge all tiles in the given direction, returning the gained
  /// score. No new tile is placed.
  fn shift(&mut self, direction: Move) -> Score {
    let grid = &mut self.grid;

    match direction {
      Move::Left => grid.resolve_rows(),
      Move::Right => {
        grid.rotate_cw();
        grid.rotate_cw();
        let score = grid.resolve_rows();
        grid.rotate_cw();
        grid.rotate_cw();
        score
      }
      Move::Up => {
        grid.rotate_ccw();
        let score = grid.resolve_rows();
        grid.rotate_cw();
        score
      }
      Move::Down => {
        grid.rotate_cw();
        let score = grid.resolve_rows();
        grid.rotate_ccw();
        score
      }
    }
  }

  /// Current game status.
  pub fn status(&self) -> GameStatus {
    GameStatus::new(self.state, self.score, self.moves)
  }

  /// Copy of the cell values, row-major.
  pub fn values(&self) -> [Cell; CELLS] {
    self.grid.cells()
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn score(&self) -> Score {
    self.score
  }

  pub fn moves(&self) -> u32 {
    self.moves
  }

  pub fn state(&self) -> State {
    self.state
  }
}

impl fmt::Debug for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Board({:?})", self.grid)
  }
}

/// Human readable dump, four lines of four right-aligned cells.
impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.grid)
  }
}
