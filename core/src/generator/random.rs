use ndarray::Array2;

use super::*;

/// Purely random generation: per row, 5 of the 10 columns become active and
/// each active cell takes an unused value from its column's tens range.
///
/// Values are consumed from a generation-local copy of the pool, so a later
/// cell can never reuse one and the live draw pool is untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, pool: &NumberPool) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut scratch = pool.clone();
        let mut cells: Array2<Cell> = Array2::default((ROWS as usize, COLS as usize));

        for row in 0..ROWS {
            let active_cols = rand::seq::index::sample(&mut rng, COLS as usize, ACTIVE_PER_ROW);
            for col in active_cols.iter() {
                let col = col as Coord;
                let candidates: Vec<u8> = scratch.in_range(column_range(col)).collect();
                let Some(&value) = candidates.choose(&mut rng) else {
                    // degraded fallback: the range ran dry, leave the cell blank
                    log::warn!("no candidates left in column {col}, cell ({row}, {col}) stays blank");
                    continue;
                };
                scratch.remove(value);
                cells[(row, col).to_nd_index()] = Cell::Active(value);
            }
        }

        Board::from_cells(cells).expect("generated cells satisfy board invariants")
    }
}
