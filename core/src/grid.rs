use core::ops::{Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Cell, CellCount, Coord, Coord2, GameError, NeighborIter, Result, ToNdIndex};

/// Dense rows x columns index over cells, keyed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// An all-default grid: no mines, nothing flagged or revealed.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a grid with mines at the given positions and derived neighbor
    /// counts everywhere else. Fails if any mine position is out of bounds.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size);
        for &coords in mine_coords {
            *grid.get_mut(coords)? = Cell::mine();
        }
        grid.derive_neighbor_counts();
        Ok(grid)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (
            dim.0.try_into().expect("row count fits a Coord"),
            dim.1.try_into().expect("column count fits a Coord"),
        )
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Result<&mut Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&mut self.cells[coords.to_nd_index()])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Row-major iteration over every cell with its position.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_positions().count() as CellCount
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Recomputes the content of every non-mine cell from the mine placement.
    pub(crate) fn derive_neighbor_counts(&mut self) {
        let (rows, columns) = self.size();
        for x in 0..rows {
            for y in 0..columns {
                let coords = (x, y);
                if self[coords].is_mine() {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self[coords].content = count as i8;
            }
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
