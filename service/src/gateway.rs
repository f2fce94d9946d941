use minado_core::{Board, BoardId, BoardStatus, Cell, Coord2, Grid};

use crate::Result;

/// Storage boundary for boards and their cells.
///
/// Implementations must serialize concurrent plays on the same board id, so
/// that a flood fill never interleaves with another play on the same grid;
/// different boards are fully independent.
pub trait BoardGateway {
    /// Fails with `GameError::NotFound` for an unknown id.
    fn load_board(&self, id: BoardId) -> Result<Board>;

    /// Returns the full cell set of a board.
    fn load_grid(&self, id: BoardId) -> Result<Grid>;

    /// Atomically persists a freshly generated board with its full cell set.
    fn save_new_game(&self, board: &Board, grid: &Grid) -> Result<()>;

    /// Persists the mutated cells of one play, cascades included.
    fn save_cells(&self, id: BoardId, cells: &[(Coord2, Cell)]) -> Result<()>;

    /// Persists a terminal-state transition.
    fn save_board_status(&self, id: BoardId, status: BoardStatus) -> Result<()>;
}
