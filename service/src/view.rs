use minado_core::{Board, BoardStatus, Grid};
use minado_protocol::{BoardState, BoardView, CellView};

/// Projects a board and its grid into the caller-facing view. Hidden cells
/// keep their content out of the view so a caller cannot read mine placement
/// off the wire.
pub fn board_view(board: &Board, grid: &Grid) -> BoardView {
    let cell_list = grid
        .iter_cells()
        .map(|(coords, cell)| CellView {
            x: coords.0,
            y: coords.1,
            is_revealed: cell.is_revealed,
            is_flagged: cell.is_flagged,
            content: cell.is_revealed.then_some(cell.content),
        })
        .collect();

    BoardView {
        id: board.id.to_string(),
        rows: board.rows,
        columns: board.columns,
        mines: board.mine_count,
        status: board_state(board.status),
        created_at: board.created_at,
        cell_list,
    }
}

const fn board_state(status: BoardStatus) -> BoardState {
    match status {
        BoardStatus::Ongoing => BoardState::Ongoing,
        BoardStatus::Win => BoardState::Win,
        BoardStatus::Lose => BoardState::Lose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minado_core::GameConfig;

    #[test]
    fn view_hides_unrevealed_content() {
        let board = Board::new(GameConfig::new_unchecked(2, 2, 1));
        let mut grid = Grid::with_mines((2, 2), &[(0, 0)]).unwrap();
        grid[(1, 1)].is_revealed = true;

        let view = board_view(&board, &grid);

        assert_eq!(view.cell_list.len(), 4);
        let mine = view.cell_list.iter().find(|c| (c.x, c.y) == (0, 0)).unwrap();
        assert_eq!(mine.content, None);
        let open = view.cell_list.iter().find(|c| (c.x, c.y) == (1, 1)).unwrap();
        assert_eq!(open.content, Some(1));
    }

    #[test]
    fn view_carries_board_fields() {
        let board = Board::new(GameConfig::new_unchecked(3, 4, 5));
        let grid = Grid::new((3, 4));

        let view = board_view(&board, &grid);

        assert_eq!(view.id, board.id.to_string());
        assert_eq!((view.rows, view.columns, view.mines), (3, 4, 5));
        assert_eq!(view.status, BoardState::Ongoing);
        assert_eq!(view.created_at, board.created_at);
    }
}
