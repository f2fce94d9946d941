use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{Board, BoardStatus, Cell, Coord2, GameError, Grid, Result};

/// A single play order aimed at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    Flag(Coord2),
    Reveal(Coord2),
}

impl Instruction {
    pub const fn target(self) -> Coord2 {
        match self {
            Self::Flag(coords) | Self::Reveal(coords) => coords,
        }
    }
}

/// Outcome of applying one instruction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayOutcome {
    NoChange,
    Flagged,
    Revealed,
    Exploded,
    Won,
}

impl PlayOutcome {
    /// Whether this outcome mutated any cell.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Everything the caller must persist after one instruction: the cells that
/// changed and the board status they left behind.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayReport {
    pub outcome: PlayOutcome,
    pub changed: Vec<Coord2>,
    pub status: BoardStatus,
}

/// One board plus its grid snapshot, the unit the engine plays on.
///
/// `apply` is synchronous, single-threaded computation; callers must
/// serialize concurrent plays on the same board id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    grid: Grid,
}

impl Game {
    pub fn new(board: Board, grid: Grid) -> Self {
        Self { board, grid }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> BoardStatus {
        self.board.status
    }

    pub fn into_parts(self) -> (Board, Grid) {
        (self.board, self.grid)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.grid.get(coords).copied()
    }

    /// Applies one instruction, cascading reveals as needed.
    ///
    /// Fails with `GameOver` on a terminal board and `InvalidPosition` out of
    /// bounds; a failed apply mutates nothing.
    pub fn apply(&mut self, instruction: Instruction) -> Result<PlayReport> {
        self.check_ongoing()?;
        let coords = self.grid.validate_coords(instruction.target())?;

        Ok(match instruction {
            Instruction::Flag(_) => self.flag(coords),
            Instruction::Reveal(_) => self.reveal(coords),
        })
    }

    fn check_ongoing(&self) -> Result<()> {
        if self.board.status.is_terminal() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Flagging is idempotent and a no-op on revealed cells. Flagging the
    /// last unflagged mine wins the game; flags on safe cells never count.
    fn flag(&mut self, coords: Coord2) -> PlayReport {
        let cell = &mut self.grid[coords];
        if cell.is_flagged || cell.is_revealed {
            return self.report(PlayOutcome::NoChange, Vec::new());
        }
        cell.is_flagged = true;

        if self.all_mines_flagged() {
            self.board.status = BoardStatus::Win;
            log::debug!("board {} won, every mine flagged", self.board.id);
            return self.report(PlayOutcome::Won, vec![coords]);
        }
        self.report(PlayOutcome::Flagged, vec![coords])
    }

    fn all_mines_flagged(&self) -> bool {
        let mut any = false;
        for pos in self.grid.mine_positions() {
            if !self.grid[pos].is_flagged {
                return false;
            }
            any = true;
        }
        any
    }

    /// Reveals one cell. A mine loses the game on the spot, with no cascade;
    /// a zero-content cell floods its neighborhood.
    fn reveal(&mut self, coords: Coord2) -> PlayReport {
        let cell = self.grid[coords];
        if cell.is_revealed {
            return self.report(PlayOutcome::NoChange, Vec::new());
        }

        self.grid[coords].is_revealed = true;

        if cell.is_mine() {
            self.board.status = BoardStatus::Lose;
            log::debug!("board {} lost, mine revealed at {:?}", self.board.id, coords);
            return self.report(PlayOutcome::Exploded, vec![coords]);
        }

        let mut changed = vec![coords];
        if cell.content == 0 {
            self.flood_reveal(coords, &mut changed);
        }
        self.report(PlayOutcome::Revealed, changed)
    }

    /// Work-list flood fill from a zero-content origin. Terminates in at most
    /// one step per cell and never reveals a mine or a flagged cell.
    fn flood_reveal(&mut self, origin: Coord2, changed: &mut Vec<Coord2>) {
        let mut visited = HashSet::from([origin]);
        let mut to_visit: VecDeque<_> = self
            .grid
            .iter_neighbors(origin)
            .filter(|&pos| self.can_cascade_into(pos))
            .collect();

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }
            if !self.can_cascade_into(coords) {
                continue;
            }

            self.grid[coords].is_revealed = true;
            changed.push(coords);
            log::trace!(
                "cascade revealed {:?}, content {}",
                coords,
                self.grid[coords].content
            );

            if self.grid[coords].content == 0 {
                to_visit.extend(
                    self.grid
                        .iter_neighbors(coords)
                        .filter(|&pos| self.can_cascade_into(pos))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn can_cascade_into(&self, coords: Coord2) -> bool {
        let cell = &self.grid[coords];
        !cell.is_revealed && !cell.is_flagged && !cell.is_mine()
    }

    fn report(&self, outcome: PlayOutcome, changed: Vec<Coord2>) -> PlayReport {
        PlayReport {
            outcome,
            changed,
            status: self.board.status,
        }
    }
}
