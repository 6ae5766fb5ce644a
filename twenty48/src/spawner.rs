use log::debug;
use rand::Rng;

use super::{error::MoveSignal, grid::Grid, Cell};

/// Place a new tile on a random empty cell and return its index.
///
/// The cell is chosen uniformly among the empty ones. The new value is 2 with
/// probability 0.8 and 4 otherwise.
///
/// # Errors
/// Returns [`MoveSignal::NoFreeCell`] if the grid has no empty cell.
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<usize, MoveSignal> {
  let empty: Vec<usize> = grid.empty_cells().collect();

  if empty.is_empty() {
    return Err(MoveSignal::NoFreeCell);
  }

  let index = empty[rng.gen_range(0..empty.len())];
  let value = new_tile_value(rng);

  grid.set(index, value);
  debug!("spawned {value} at {index}");

  Ok(index)
}

fn new_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Cell {
  match rng.gen_range(0..10) {
    0 | 1 => 4,
    _ => 2,
  }
}
