use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use pool::*;
pub use session::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod pool;
mod session;
mod types;

/// A 3x10 loto board.
///
/// Every active cell holds a value from its column's tens range, unique
/// across the whole board. Which cells are active is fixed at generation;
/// only the `Active -> Marked` transition mutates cells afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    active_count: CellCount,
}

impl Board {
    /// Validates shape, column ranges, and board-wide value uniqueness.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        if cells.dim() != (ROWS as usize, COLS as usize) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut seen = [false; NUMBERS as usize];
        for ((_, col), cell) in cells.indexed_iter() {
            let Some(value) = cell.value() else { continue };
            if value >= NUMBERS {
                return Err(GameError::NumberOutOfRange(value));
            }
            let col = col as Coord;
            if !column_range(col).contains(&value) {
                return Err(GameError::ValueOutsideColumn { value, col });
            }
            if seen[value as usize] {
                return Err(GameError::DuplicateNumber(value));
            }
            seen[value as usize] = true;
        }

        let active_count = cells
            .iter()
            .filter(|cell| cell.is_active())
            .count()
            .try_into()
            .expect("cell count fits CellCount");
        Ok(Self {
            cells,
            active_count,
        })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < ROWS && coords.1 < COLS {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Count of active cells, marked or not. Fixed after generation.
    pub fn active_count(&self) -> CellCount {
        self.active_count
    }

    pub fn marked_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_marked())
            .count()
            .try_into()
            .expect("cell count fits CellCount")
    }

    /// Position of the active cell carrying `value`, if any. At most one
    /// exists since values are unique board-wide.
    pub fn position_of(&self, value: u8) -> Option<Coord2> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.value() == Some(value))
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn set_marked(&mut self, coords: Coord2) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if let Cell::Active(value) = *cell {
            *cell = Cell::Marked(value);
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Outcome of requesting a draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    NoChange,
    Drawn(u8),
}

impl DrawOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Drawn(_) => true,
        }
    }
}

/// Outcome of revealing the current number to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed(u8),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed(_) => true,
        }
    }
}

/// Outcome of clicking a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Marked,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Marked | Self::Won => true,
        }
    }
}
