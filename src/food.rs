use rand::Rng;

use crate::board::Board;
use crate::cell::Cell;

/// Picks a random free cell by rejection sampling.
///
/// The caller must leave at least one cell free, otherwise this never returns.
pub fn spawn_food<R: Rng + ?Sized>(board: &Board, occupied: &[Cell], rng: &mut R) -> Cell {
    let step = board.cell_length();

    loop {
        let x = rng.gen_range(0..board.columns()) * step;
        let y = rng.gen_range(0..board.rows()) * step;
        let food = Cell::food(x, y);

        if !occupied.contains(&food) {
            return food;
        }
    }
}
