use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;

/// Best-effort capability for communicating a called number to the player.
///
/// Implementations may speak, print, or do nothing. Failures are reported
/// through [`AnnounceError`] and the session swallows them; game state never
/// waits on, or varies with, the outcome.
pub trait Announcer {
    fn announce(&mut self, number: u8) -> core::result::Result<(), AnnounceError>;
}

/// Announcer that does nothing. Useful for tests and silent sessions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullAnnouncer;

impl Announcer for NullAnnouncer {
    fn announce(&mut self, _number: u8) -> core::result::Result<(), AnnounceError> {
        Ok(())
    }
}

/// One interactive session: engine, draw randomness, and the announce seam.
///
/// This is the surface the presentation layer talks to. Every mutating call
/// returns a fresh [`GameSnapshot`], enough to re-render without knowing any
/// game rule.
#[derive(Debug)]
pub struct GameSession<A> {
    engine: PlayEngine,
    rng: SmallRng,
    announcer: A,
}

impl<A: Announcer> GameSession<A> {
    /// Starts a session with a full pool and a freshly generated board. The
    /// seed drives both generation and the draw order, so a session is
    /// reproducible from its seed alone.
    pub fn new(seed: u64, announcer: A) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pool = NumberPool::full();
        let board = RandomBoardGenerator::new(rng.random()).generate(&pool);
        Self {
            engine: PlayEngine::new(pool, board),
            rng,
            announcer,
        }
    }

    /// Wraps an existing engine; for tests and custom setups.
    pub fn from_engine(engine: PlayEngine, seed: u64, announcer: A) -> Self {
        Self {
            engine,
            rng: SmallRng::seed_from_u64(seed),
            announcer,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Draws the next number and announces it. The announced number is
    /// captured by value here; later draws cannot change what was said.
    pub fn draw_requested(&mut self) -> GameSnapshot {
        if let DrawOutcome::Drawn(number) = self.engine.draw_next(&mut self.rng) {
            self.try_announce(number);
        }
        self.engine.snapshot()
    }

    /// Lets the display show the current number.
    pub fn reveal_requested(&mut self) -> GameSnapshot {
        self.engine.reveal();
        self.engine.snapshot()
    }

    /// Player clicked a cell. Out-of-bounds addresses are logged and
    /// ignored; the presentation layer never sees an error.
    pub fn cell_clicked(&mut self, coords: Coord2) -> GameSnapshot {
        if let Err(err) = self.engine.mark_cell(coords) {
            log::debug!("ignoring click at {coords:?}: {err}");
        }
        self.engine.snapshot()
    }

    /// Re-announces the current number. Permitted after a win; no state
    /// effect either way.
    pub fn replay_requested(&mut self) -> GameSnapshot {
        if let Some(number) = self.engine.current_number() {
            self.try_announce(number);
        }
        self.engine.snapshot()
    }

    fn try_announce(&mut self, number: u8) {
        if let Err(err) = self.announcer.announce(number) {
            log::warn!("announcement of {number} failed: {err}");
        }
    }
}
