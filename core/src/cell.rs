use serde::{Deserialize, Serialize};

/// Content value stored for mine-bearing cells.
pub const MINE: i8 = -1;

/// One square of the board: generated content plus mutable play state.
///
/// `content` is `-1` for a mine, else the number of mine-bearing cells in the
/// 8-connected neighborhood. It never changes after generation. `is_revealed`
/// never reverts to `false` once set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: i8,
    pub is_flagged: bool,
    pub is_revealed: bool,
}

impl Cell {
    pub const fn mine() -> Self {
        Self {
            content: MINE,
            is_flagged: false,
            is_revealed: false,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.content == MINE
    }
}
