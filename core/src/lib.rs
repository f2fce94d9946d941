use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod types;

/// Validated dimensions and mine count for a new game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    /// Applies the creation guards: both dimensions must be positive and the
    /// mines must fit on the board.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows < 1 || columns < 1 {
            return Err(GameError::InvalidDimensions);
        }
        if mines < 1 || mines > mult(rows, columns) {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self::new_unchecked(rows, columns, mines))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new(5, 0, 1), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn config_rejects_bad_mine_counts() {
        assert_eq!(GameConfig::new(3, 3, 0), Err(GameError::InvalidMineCount));
        assert_eq!(GameConfig::new(3, 3, 10), Err(GameError::InvalidMineCount));
    }

    #[test]
    fn config_accepts_full_board() {
        let config = GameConfig::new(3, 3, 9).unwrap();
        assert_eq!(config.total_cells(), 9);
    }

    #[test]
    fn presets_are_valid() {
        for preset in [
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert!(GameConfig::new(preset.rows, preset.columns, preset.mines).is_ok());
        }
    }
}
