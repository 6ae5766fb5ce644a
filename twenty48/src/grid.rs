use std::fmt;

use super::{row, Cell, Score};

/// Side length of the grid.
pub const SIZE: usize = 4;

/// Total count of cells in the grid.
pub const CELLS: usize = SIZE * SIZE;

/// A 4x4 grid of cells stored row-major.
///
/// Index `4 * row + col` addresses the cell at `(row, col)`. Zero means an
/// empty cell, every other value is a power of two.
///
/// The fixed-size array makes a grid of any other shape unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid([Cell; CELLS]);

impl Grid {
  /// A grid with all cells empty.
  pub const EMPTY: Grid = Grid([0; CELLS]);

  pub fn new(cells: [Cell; CELLS]) -> Self {
    Grid(cells)
  }

  /// Copy of the cells, row-major.
  pub fn cells(&self) -> [Cell; CELLS] {
    self.0
  }

  pub fn get(&self, index: usize) -> Option<Cell> {
    self.0.get(index).copied()
  }

  pub(crate) fn set(&mut self, index: usize, value: Cell) {
    self.0[index] = value;
  }

  /// Iterator over the four rows.
  pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
    self.0.chunks_exact(SIZE)
  }

  /// Iterator over the four rows with mutable access.
  pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Cell]> {
    self.0.chunks_exact_mut(SIZE)
  }

  /// Rotate the grid 90° clockwise in place.
  ///
  /// ```text
  ///  0  1  2  3      12  8  4  0
  ///  4  5  6  7  ->  13  9  5  1
  ///  8  9 10 11      14 10  6  2
  /// 12 13 14 15      15 11  7  3
  /// ```
  pub fn rotate_cw(&mut self) {
    let old = self.0;

    for r in 0..SIZE {
      for c in 0..SIZE {
        self.0[SIZE * r + c] = old[SIZE * (SIZE - 1 - c) + r];
      }
    }
  }

  /// Rotate the grid 90° counter-clockwise in place.
  pub fn rotate_ccw(&mut self) {
    let old = self.0;

    for r in 0..SIZE {
      for c in 0..SIZE {
        self.0[SIZE * r + c] = old[SIZE * c + (SIZE - 1 - r)];
      }
    }
  }

  /// Shift and merge every row to the left and return the gained score.
  pub fn resolve_rows(&mut self) -> Score {
    self.rows_mut().map(row::resolve).sum()
  }

  /// Get iterator over indexes of all empty cells.
  pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
    self
      .0
      .iter()
      .enumerate()
      .filter(|&(_, &cell)| cell == 0)
      .map(|(index, _)| index)
  }

  pub fn is_full(&self) -> bool {
    self.0.iter().all(|&cell| cell != 0)
  }

  /// Check if any row or column holds two equal neighbours.
  ///
  /// Columns are checked as rows of a rotated copy.
  pub fn has_adjacent_pair(&self) -> bool {
    fn rows_have_pair(grid: &Grid) -> bool {
      grid
        .rows()
        .any(|row| row.windows(2).any(|pair| pair[0] == pair[1]))
    }

    if rows_have_pair(self) {
      return true;
    }

    let mut rotated = *self;
    rotated.rotate_cw();

    rows_have_pair(&rotated)
  }

  pub fn contains(&self, value: Cell) -> bool {
    self.0.contains(&value)
  }

  /// Value of the highest tile.
  pub fn highest(&self) -> Cell {
    self.0.iter().copied().max().unwrap_or(0)
  }

  /// Sum of all cells.
  pub fn sum(&self) -> Cell {
    self.0.iter().sum()
  }
}

impl From<[Cell; CELLS]> for Grid {
  fn from(cells: [Cell; CELLS]) -> Self {
    Grid::new(cells)
  }
}

impl From<Grid> for [Cell; CELLS] {
  fn from(grid: Grid) -> Self {
    grid.0
  }
}

impl fmt::Debug for Grid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut rows = self.rows();
    write!(f, "{:?}", rows.next().unwrap_or_default())?;
    rows.try_for_each(|row| write!(f, " {row:?}"))
  }
}

/// Four lines of four right-aligned cells, each line ending with a newline.
impl fmt::Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in self.rows() {
      writeln!(f, "{:>4} {:>4} {:>4} {:>4}", row[0], row[1], row[2], row[3])?;
    }

    Ok(())
  }
}
