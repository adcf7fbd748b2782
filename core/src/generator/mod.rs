use crate::*;
pub use random::*;

mod random;

/// Builds a board from a snapshot of the available numbers.
///
/// Implementations must not mutate the live pool; generation and live draws
/// are disjoint stages.
pub trait BoardGenerator {
    fn generate(self, pool: &NumberPool) -> Board;
}
