pub use random::*;

mod random;

use crate::{GameConfig, Grid};

/// Strategy producing a fully populated grid for a validated config.
///
/// Generation has no side effects: it returns the grid and never touches
/// persistence.
pub trait BoardGenerator {
    fn generate(&self, config: GameConfig) -> Grid;
}
