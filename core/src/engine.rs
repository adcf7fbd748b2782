use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: `Playing -> Won`. One-way, no reset path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

/// The draw/mark state machine for one session.
///
/// Owns the live pool and the board. All operations run synchronously; the
/// randomness source for draws is passed in by the caller so sessions can be
/// replayed from a seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    pool: NumberPool,
    board: Board,
    drawn: Vec<u8>,
    current: Option<u8>,
    revealed: bool,
    marked_count: CellCount,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(pool: NumberPool, board: Board) -> Self {
        let marked_count = board.marked_count();
        Self {
            pool,
            board,
            drawn: Vec::new(),
            current: None,
            revealed: false,
            marked_count,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Count of numbers still in the pool.
    pub fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    /// Numbers called so far, in draw order.
    pub fn drawn(&self) -> &[u8] {
        &self.drawn
    }

    /// The number most recently drawn, before the first draw there is none.
    pub fn current_number(&self) -> Option<u8> {
        self.current
    }

    /// Whether the display may show the current number instead of a placeholder.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Draws the next number: removes it from the pool, makes it current, and
    /// hides it again until [`PlayEngine::reveal`]. A no-op once the game is
    /// won or the pool is exhausted.
    pub fn draw_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DrawOutcome {
        if self.state.is_won() {
            log::debug!("draw requested after win, ignoring");
            return DrawOutcome::NoChange;
        }
        match self.pool.draw(rng) {
            Ok(number) => {
                self.drawn.push(number);
                self.current = Some(number);
                self.revealed = false;
                log::debug!("drew {number}, {} numbers remaining", self.pool.remaining());
                DrawOutcome::Drawn(number)
            }
            Err(_) => {
                log::debug!("draw requested with exhausted pool, ignoring");
                DrawOutcome::NoChange
            }
        }
    }

    /// Lets the display show the current number. Idempotent.
    pub fn reveal(&mut self) -> RevealOutcome {
        match self.current {
            Some(number) if !self.revealed => {
                self.revealed = true;
                RevealOutcome::Revealed(number)
            }
            _ => RevealOutcome::NoChange,
        }
    }

    /// Marks the addressed cell if it is active and carries the current
    /// number. Blank cells, mismatches, already-marked cells, and any click
    /// after the win are ordinary no-ops; only out-of-bounds addresses error.
    pub fn mark_cell(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.state.is_won() {
            return Ok(MarkOutcome::NoChange);
        }
        let Some(current) = self.current else {
            return Ok(MarkOutcome::NoChange);
        };

        Ok(match self.board.cell_at(coords) {
            Cell::Active(value) if value == current => {
                self.board.set_marked(coords);
                self.marked_count += 1;
                log::debug!("marked cell {coords:?} holding {value}");
                if self.check_win() {
                    self.state = EngineState::Won;
                    log::debug!("every active cell is marked, game won");
                    MarkOutcome::Won
                } else {
                    MarkOutcome::Marked
                }
            }
            // normal player exploration, nothing happens
            _ => MarkOutcome::NoChange,
        })
    }

    /// True iff every active cell on the board is marked. Pure derivation,
    /// recomputed synchronously after each successful mark.
    pub fn check_win(&self) -> bool {
        self.marked_count == self.board.active_count()
    }

    /// Test/debug hook: marks every active cell and ends the game. This is
    /// the explicit replacement for reaching into engine internals.
    pub fn force_win(&mut self) {
        for row in 0..ROWS {
            for col in 0..COLS {
                self.board.set_marked((row, col));
            }
        }
        self.marked_count = self.board.active_count();
        self.state = EngineState::Won;
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let board = (0..ROWS)
            .map(|row| {
                (0..COLS)
                    .map(|col| {
                        let cell = self.board.cell_at((row, col));
                        CellSnapshot {
                            value: cell.value(),
                            active: cell.is_active(),
                            marked: cell.is_marked(),
                        }
                    })
                    .collect()
            })
            .collect();
        GameSnapshot {
            remaining: self.pool.remaining(),
            current: self.current,
            revealed: self.revealed,
            board,
            won: self.state.is_won(),
        }
    }
}

/// Everything the presentation layer needs to re-render, with no game rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub remaining: usize,
    pub current: Option<u8>,
    pub revealed: bool,
    pub board: Vec<Vec<CellSnapshot>>,
    pub won: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub value: Option<u8>,
    pub active: bool,
    pub marked: bool,
}
