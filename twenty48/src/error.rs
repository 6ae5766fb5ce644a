use thiserror::Error;

/// Outcome of a move other than plain success.
///
/// All variants are expected game events, not defects.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSignal {
  /// The move was applied, but no empty cell was left for a new tile.
  /// A merge is still possible, so the game goes on.
  #[error("no free cells left")]
  NoFreeCell,
  /// The board is full and no row or column can merge anymore.
  #[error("no available moves left")]
  EndOfGame,
  /// The winning tile was reached.
  #[error("you win")]
  WinGame,
}

impl MoveSignal {
  /// Check if the signal ends the game.
  pub fn is_terminal(self) -> bool {
    matches!(self, MoveSignal::EndOfGame | MoveSignal::WinGame)
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown move: {0:?}")]
pub struct MoveParseError(pub(crate) String);

#[cfg(feature = "notation")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
  #[error("malformed board notation: {0:?}")]
  Malformed(String),
  #[error("expected 4 rows, found {0}")]
  RowCount(usize),
  #[error("row {row} has {width} cells, but at most 4 are allowed")]
  RowTooLong { row: usize, width: usize },
  #[error("invalid cell value {value} at index {index}")]
  InvalidValue { index: usize, value: crate::Cell },
}
