use rand::prelude::*;

use minado_core::{
    Board, BoardGenerator, BoardId, Cell, Coord2, Game, GameConfig, GameError, Instruction,
    RandomBoardGenerator,
};
use minado_protocol::{BoardView, CreateBoardRequest, PlayInstruction, PlayRequest};

use crate::view::board_view;
use crate::{BoardGateway, Result};

/// Orchestrates the generator and the play engine over a persistence gateway.
///
/// All game computation happens on in-memory snapshots; the gateway is the
/// only blocking boundary.
pub struct GameService<G> {
    gateway: G,
    seed: Option<u64>,
}

impl<G: BoardGateway> GameService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            seed: None,
        }
    }

    /// Fixes the generator seed, making every created board reproducible.
    pub fn with_seed(gateway: G, seed: u64) -> Self {
        Self {
            gateway,
            seed: Some(seed),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Validates the request, generates a fresh grid, and persists the new
    /// game atomically.
    pub fn create_game(&self, request: &CreateBoardRequest) -> Result<BoardView> {
        let config = GameConfig::new(request.rows, request.columns, request.mines)?;
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let grid = RandomBoardGenerator::new(seed).generate(config);
        let board = Board::new(config);

        self.gateway.save_new_game(&board, &grid)?;
        log::info!(
            "created board {} ({}x{}, {} mines)",
            board.id,
            board.rows,
            board.columns,
            board.mine_count
        );
        Ok(board_view(&board, &grid))
    }

    /// Loads the board snapshot, applies one instruction, and persists the
    /// cell diff plus any status transition.
    pub fn play(&self, request: &PlayRequest) -> Result<BoardView> {
        let id = parse_board_id(&request.board_id)?;
        let board = self.gateway.load_board(id)?;
        let grid = self.gateway.load_grid(id)?;

        let coords = (request.x, request.y);
        let instruction = match request.instruction {
            PlayInstruction::Flag => Instruction::Flag(coords),
            PlayInstruction::Reveal => Instruction::Reveal(coords),
        };

        let mut game = Game::new(board, grid);
        let report = game.apply(instruction)?;

        if report.outcome.has_update() {
            let cells: Vec<(Coord2, Cell)> = report
                .changed
                .iter()
                .map(|&pos| (pos, game.grid()[pos]))
                .collect();
            self.gateway.save_cells(id, &cells)?;
            log::debug!(
                "board {}: {:?} touched {} cells, status {:?}",
                id,
                request.instruction,
                cells.len(),
                report.status
            );
        }
        if report.status.is_terminal() {
            self.gateway.save_board_status(id, report.status)?;
        }

        let (board, grid) = game.into_parts();
        Ok(board_view(&board, &grid))
    }

    pub fn get_board(&self, board_id: &str) -> Result<BoardView> {
        let id = parse_board_id(board_id)?;
        let board = self.gateway.load_board(id)?;
        let grid = self.gateway.load_grid(id)?;
        Ok(board_view(&board, &grid))
    }
}

/// A string that is not a board id cannot name a stored board.
fn parse_board_id(value: &str) -> Result<BoardId> {
    BoardId::parse(value).ok_or_else(|| GameError::NotFound.into())
}
