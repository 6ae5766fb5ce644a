//! Compact textual notation for a grid.
//!
//! Rows are separated by `/`, cells within a row by `,`. `0` marks an empty
//! cell and empty cells at the end of a row may be left out, so an empty row
//! is written as nothing at all: `2,2,4,4/0,0,0,2//1024`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
  error::NotationError,
  grid::{Grid, CELLS, SIZE},
  Cell, WINNING_TILE,
};

static ROW: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(\d+(,\d+)*)?$").expect("the regex is valid"));

static CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("the regex is valid"));

static TRAILING_EMPTY: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(^|,)0(,0)*$").expect("the regex is valid"));

/// Zero or a tile a game can actually reach, a power of two up to the winning
/// tile.
fn is_valid_value(value: Cell) -> bool {
  value == 0 || (value >= 2 && value <= WINNING_TILE && value.is_power_of_two())
}

/// Parse a grid from its notation.
///
/// ```rust
/// # use twenty48_lib::notation::parse_notation;
/// let grid = parse_notation("2,2,4,4/0,0,0,2//1024").unwrap();
/// assert_eq!(grid.get(7), Some(2));
/// assert_eq!(grid.get(12), Some(1024));
/// assert_eq!(grid.get(13), Some(0));
/// ```
///
/// # Errors
/// Returns an error if there are not exactly four rows, a row is longer than
/// four cells, contains anything but numbers and commas, or a value is not
/// zero or a power of two between 2 and 2048.
pub fn parse_notation(input: &str) -> Result<Grid, NotationError> {
  let rows: Vec<_> = input.trim().split('/').collect();

  if rows.len() != SIZE {
    return Err(NotationError::RowCount(rows.len()));
  }

  let mut cells = [0; CELLS];

  for (r, row) in rows.into_iter().enumerate() {
    let row = row.trim();

    if !ROW.is_match(row) {
      return Err(NotationError::Malformed(row.to_owned()));
    }

    let values = CELL
      .find_iter(row)
      .map(|m| m.as_str().parse::<Cell>())
      .collect::<Result<Vec<_>, _>>()
      .map_err(|_| NotationError::Malformed(row.to_owned()))?;

    if values.len() > SIZE {
      return Err(NotationError::RowTooLong {
        row: r + 1,
        width: values.len(),
      });
    }

    for (c, value) in values.into_iter().enumerate() {
      let index = SIZE * r + c;

      if !is_valid_value(value) {
        return Err(NotationError::InvalidValue { index, value });
      }

      cells[index] = value;
    }
  }

  Ok(Grid::new(cells))
}

/// Convert a grid to its shortest notation.
///
/// ```rust
/// # use twenty48_lib::{notation::to_notation, Grid};
/// let mut cells = [0; 16];
/// cells[0] = 2;
/// cells[15] = 4;
/// assert_eq!(to_notation(&Grid::new(cells)), "2///0,0,0,4");
/// ```
#[must_use]
pub fn to_notation(grid: &Grid) -> String {
  grid
    .rows()
    .map(|row| {
      let row = row
        .iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(",");

      TRAILING_EMPTY.replace(&row, "").into_owned()
    })
    .collect::<Vec<_>>()
    .join("/")
}

impl FromStr for Grid {
  type Err = NotationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_notation(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse() {
    let grid: Grid = "2,2,4,4/0,0,0,2//1024".parse().unwrap();

    #[rustfmt::skip]
    let expected = Grid::new([
      2, 2, 4, 4,
      0, 0, 0, 2,
      0, 0, 0, 0,
      1024, 0, 0, 0,
    ]);
    assert_eq!(grid, expected);
    assert_eq!(parse_notation("///").unwrap(), Grid::EMPTY);
  }

  #[test]
  fn test_parse_errors() {
    assert_eq!(
      parse_notation("2/2/2"),
      Err(NotationError::RowCount(3))
    );
    assert_eq!(
      parse_notation("2,2,2,2,2///"),
      Err(NotationError::RowTooLong { row: 1, width: 5 })
    );
    assert_eq!(
      parse_notation("//2,x/"),
      Err(NotationError::Malformed("2,x".to_owned()))
    );
    assert_eq!(
      parse_notation("//2,,4/"),
      Err(NotationError::Malformed("2,,4".to_owned()))
    );
    assert_eq!(
      parse_notation("0,3///"),
      Err(NotationError::InvalidValue { index: 1, value: 3 })
    );
    assert_eq!(
      parse_notation("///0,0,1"),
      Err(NotationError::InvalidValue { index: 14, value: 1 })
    );
    assert_eq!(
      parse_notation("4096///"),
      Err(NotationError::InvalidValue { index: 0, value: 4096 })
    );
    assert_eq!(
      parse_notation("2,2147483648///"),
      Err(NotationError::InvalidValue { index: 1, value: 1 << 31 })
    );
    assert!(parse_notation("2048,1024///").is_ok());
    assert!(matches!(
      parse_notation("99999999999///"),
      Err(NotationError::Malformed(_))
    ));
  }

  #[test]
  fn test_to_notation() {
    #[rustfmt::skip]
    let grid = Grid::new([
      2, 0, 0, 0,
      0, 2048, 0, 0,
      0, 0, 0, 0,
      4, 8, 16, 32,
    ]);

    let notation = to_notation(&grid);
    assert_eq!(notation, "2/0,2048//4,8,16,32");
    assert_eq!(parse_notation(&notation).unwrap(), grid);
    assert_eq!(to_notation(&Grid::EMPTY), "///");
  }
}
