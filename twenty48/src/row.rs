//! Transforms over a single row of cells.
//!
//! All functions work left to right. Other directions are handled by rotating
//! the whole grid first, see [`Grid`](crate::Grid).

use super::{Cell, Score};

/// Slide every non-zero cell towards index 0, keeping their order.
///
/// Zeroes are "bubbled" to the end until no zero precedes a non-zero cell.
pub fn shift_left(row: &mut [Cell]) {
  loop {
    for i in 0..row.len().saturating_sub(1) {
      if row[i] == 0 {
        row.swap(i, i + 1);
      }
    }

    if !has_gap(row) {
      break;
    }
  }
}

/// Check if there is an empty cell somewhere before an occupied one.
fn has_gap(row: &[Cell]) -> bool {
  row
    .iter()
    .skip_while(|&&cell| cell != 0)
    .any(|&cell| cell != 0)
}

/// Join adjacent equal cells and return the score gained.
///
/// Out of the two joined cells the left one is doubled and the right one is
/// zeroed. A freshly joined cell is skipped, so merges never cascade within
/// one pass. A pair whose doubled value doesn't fit in a [`Cell`] stays as it
/// is.
pub fn merge_adjacent(row: &mut [Cell]) -> Score {
  let mut score: Score = 0;
  let mut i = 0;

  while i + 1 < row.len() {
    let joined = match row[i] {
      0 => None,
      cell if cell == row[i + 1] => cell.checked_mul(2),
      _ => None,
    };

    match joined {
      Some(value) => {
        row[i] = value;
        row[i + 1] = 0;
        score = score.saturating_add(value);
        i += 2;
      }
      None => i += 1,
    }
  }

  score
}

/// Resolve a whole move for one row: shift, merge and shift again to close
/// the holes left by merged cells.
pub fn resolve(row: &mut [Cell]) -> Score {
  shift_left(row);
  let score = merge_adjacent(row);
  shift_left(row);

  score
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn test_shift_left() {
    let mut row = [0, 2, 0, 4];
    shift_left(&mut row);
    assert_eq!(row, [2, 4, 0, 0]);

    let mut row = [0, 1, 0, 1, 2, 2, 4, 0, 3];
    shift_left(&mut row);
    assert_eq!(row, [1, 1, 2, 2, 4, 3, 0, 0, 0]);

    let mut row = [0, 0, 0, 8];
    shift_left(&mut row);
    assert_eq!(row, [8, 0, 0, 0]);
  }

  #[test]
  fn test_shift_left_empty_and_full() {
    let mut row = [0; 4];
    shift_left(&mut row);
    assert_eq!(row, [0; 4]);

    let mut row = [2, 4, 8, 16];
    shift_left(&mut row);
    assert_eq!(row, [2, 4, 8, 16]);

    let mut row: [Cell; 0] = [];
    shift_left(&mut row);
  }

  #[test]
  fn test_merge_adjacent() {
    let mut row = [2, 2, 4, 4];
    assert_eq!(merge_adjacent(&mut row), 12);
    assert_eq!(row, [4, 0, 8, 0]);

    let mut row = [1, 1, 2, 2, 4, 3, 0, 1, 1];
    assert_eq!(merge_adjacent(&mut row), 8);
    assert_eq!(row, [2, 0, 4, 0, 4, 3, 0, 2, 0]);
  }

  #[test]
  fn test_merge_does_not_cascade() {
    let mut row = [4, 4, 8, 0];
    assert_eq!(merge_adjacent(&mut row), 8);
    assert_eq!(row, [8, 0, 8, 0]);

    let mut row = [2, 2, 2, 0];
    assert_eq!(merge_adjacent(&mut row), 4);
    assert_eq!(row, [4, 0, 2, 0]);
  }

  #[test]
  fn test_merge_keeps_overflowing_pair() {
    let top = 1 << 31;

    let mut row = [top, top, 2, 2];
    assert_eq!(merge_adjacent(&mut row), 4);
    assert_eq!(row, [top, top, 4, 0]);

    let mut row = [top, top, 0, 0];
    assert_eq!(resolve(&mut row), 0);
    assert_eq!(row, [top, top, 0, 0]);
  }

  #[test]
  fn test_resolve() {
    let cases = [
      ([2, 2, 2, 2], [4, 4, 0, 0], 8),
      ([0, 2, 0, 2], [4, 0, 0, 0], 4),
      ([2, 0, 2, 4], [4, 4, 0, 0], 4),
      ([4, 2, 2, 0], [4, 4, 0, 0], 4),
      ([2, 4, 8, 16], [2, 4, 8, 16], 0),
      ([1024, 1024, 0, 0], [2048, 0, 0, 0], 2048),
    ];

    for (input, expected, expected_score) in cases {
      let mut row = input;
      let score = resolve(&mut row);
      assert_eq!(row, expected, "{input:?}");
      assert_eq!(score, expected_score, "{input:?}");
    }
  }

  fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just::<Cell>(0), (1..=11u32).prop_map(|exp| 1 << exp)]
  }

  proptest! {
    #[test]
    fn shift_keeps_order_of_occupied_cells(row in prop::array::uniform4(cell())) {
      let mut shifted = row;
      shift_left(&mut shifted);

      let before: Vec<_> = row.iter().copied().filter(|&c| c != 0).collect();
      let after: Vec<_> = shifted.iter().copied().filter(|&c| c != 0).collect();

      prop_assert_eq!(&before, &after);
      prop_assert!(shifted[..before.len()].iter().all(|&c| c != 0));
      prop_assert!(shifted[before.len()..].iter().all(|&c| c == 0));
    }

    #[test]
    fn resolve_conserves_sum(row in prop::array::uniform4(cell())) {
      let mut resolved = row;
      let score = resolve(&mut resolved);

      let sum = |r: &[Cell]| r.iter().sum::<Cell>();
      prop_assert_eq!(sum(&row), sum(&resolved));
      prop_assert!(score % 4 == 0);
      prop_assert!(!has_gap(&resolved));
    }
  }
}
