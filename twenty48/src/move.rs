use std::{fmt, str::FromStr};

use super::error::MoveParseError;

/// Direction of a move.
///
/// Every direction is resolved as a left move on a rotated grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
  Up,
  Down,
  Left,
  Right,
}

impl Move {
  pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

  /// Key used for the move in interactive play.
  pub fn char(self) -> char {
    match self {
      Move::Up => 'w',
      Move::Left => 'a',
      Move::Down => 's',
      Move::Right => 'd',
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Move::Up => "up",
      Move::Down => "down",
      Move::Left => "left",
      Move::Right => "right",
    }
  }

  pub fn from_char(c: char) -> Result<Self, MoveParseError> {
    match c.to_ascii_lowercase() {
      'w' => Ok(Move::Up),
      'a' => Ok(Move::Left),
      's' => Ok(Move::Down),
      'd' => Ok(Move::Right),
      _ => Err(MoveParseError(c.to_string())),
    }
  }
}

impl fmt::Display for Move {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Move {
  type Err = MoveParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();

    if let (Some(c), None) = (chars.next(), chars.next()) {
      return Move::from_char(c);
    }

    Move::ALL
      .into_iter()
      .find(|m| m.name().eq_ignore_ascii_case(trimmed))
      .ok_or_else(|| MoveParseError(trimmed.to_owned()))
  }
}
