use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use minado_core::{Board, BoardId, BoardStatus, Cell, Coord2, GameError, Grid};

use crate::{BoardGateway, Result};

#[derive(Clone, Debug)]
struct StoredGame {
    board: Board,
    grid: Grid,
}

/// In-memory gateway: reference implementation and test double.
///
/// The store-wide lock serializes every access, which trivially satisfies the
/// per-board ordering the gateway contract asks for.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    store: Mutex<HashMap<BoardId, StoredGame>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<BoardId, StoredGame>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardGateway for MemoryGateway {
    fn load_board(&self, id: BoardId) -> Result<Board> {
        let store = self.lock();
        let game = store.get(&id).ok_or(GameError::NotFound)?;
        Ok(game.board.clone())
    }

    fn load_grid(&self, id: BoardId) -> Result<Grid> {
        let store = self.lock();
        let game = store.get(&id).ok_or(GameError::NotFound)?;
        Ok(game.grid.clone())
    }

    fn save_new_game(&self, board: &Board, grid: &Grid) -> Result<()> {
        let mut store = self.lock();
        store.insert(
            board.id,
            StoredGame {
                board: board.clone(),
                grid: grid.clone(),
            },
        );
        Ok(())
    }

    fn save_cells(&self, id: BoardId, cells: &[(Coord2, Cell)]) -> Result<()> {
        let mut store = self.lock();
        let game = store.get_mut(&id).ok_or(GameError::NotFound)?;
        for &(coords, cell) in cells {
            *game.grid.get_mut(coords)? = cell;
        }
        Ok(())
    }

    fn save_board_status(&self, id: BoardId, status: BoardStatus) -> Result<()> {
        let mut store = self.lock();
        let game = store.get_mut(&id).ok_or(GameError::NotFound)?;
        game.board.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::GameConfig;

    fn stored_game() -> (Board, Grid) {
        let board = Board::new(GameConfig::new_unchecked(2, 2, 1));
        let grid = Grid::with_mines((2, 2), &[(0, 0)]).unwrap();
        (board, grid)
    }

    #[test]
    fn unknown_boards_are_not_found() {
        let gateway = MemoryGateway::new();
        let missing = BoardId::new();

        for error in [
            gateway.load_board(missing).unwrap_err(),
            gateway.load_grid(missing).unwrap_err(),
            gateway.save_board_status(missing, BoardStatus::Win).unwrap_err(),
        ] {
            assert_eq!(error.as_game_error(), Some(GameError::NotFound));
        }
    }

    #[test]
    fn new_games_round_trip() {
        let gateway = MemoryGateway::new();
        let (board, grid) = stored_game();

        gateway.save_new_game(&board, &grid).unwrap();

        assert_eq!(gateway.load_board(board.id).unwrap(), board);
        assert_eq!(gateway.load_grid(board.id).unwrap(), grid);
        assert_eq!(gateway.board_count(), 1);
    }

    #[test]
    fn saved_cells_overwrite_the_stored_grid() {
        let gateway = MemoryGateway::new();
        let (board, grid) = stored_game();
        gateway.save_new_game(&board, &grid).unwrap();

        let mut revealed = grid[(1, 1)];
        revealed.is_revealed = true;
        gateway.save_cells(board.id, &[((1, 1), revealed)]).unwrap();

        let loaded = gateway.load_grid(board.id).unwrap();
        assert!(loaded[(1, 1)].is_revealed);
        assert!(!loaded[(0, 1)].is_revealed);
    }

    #[test]
    fn status_transitions_are_persisted() {
        let gateway = MemoryGateway::new();
        let (board, grid) = stored_game();
        gateway.save_new_game(&board, &grid).unwrap();

        gateway.save_board_status(board.id, BoardStatus::Lose).unwrap();

        assert_eq!(
            gateway.load_board(board.id).unwrap().status,
            BoardStatus::Lose
        );
    }
}
