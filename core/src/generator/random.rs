use rand::prelude::*;

use super::BoardGenerator;
use crate::{Cell, Coord, GameConfig, Grid};

/// Uniform mine placement without replacement, reproducible from the seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&self, config: GameConfig) -> Grid {
        let total = config.total_cells();
        let mut grid = Grid::new(config.size());

        // full boards need no sampling
        if config.mines >= total {
            if config.mines > total {
                log::warn!(
                    "requested {} mines but the board only fits {}, filling it",
                    config.mines,
                    total
                );
            }
            let (rows, columns) = config.size();
            for x in 0..rows {
                for y in 0..columns {
                    grid[(x, y)] = Cell::mine();
                }
            }
            return grid;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let columns = usize::from(config.columns);
        for index in rand::seq::index::sample(&mut rng, usize::from(total), usize::from(config.mines))
        {
            let coords = ((index / columns) as Coord, (index % columns) as Coord);
            grid[coords] = Cell::mine();
        }

        grid.derive_neighbor_counts();

        log::debug!(
            "generated {}x{} grid with {} mines (seed {})",
            config.rows,
            config.columns,
            config.mines,
            self.seed
        );
        grid
    }
}
