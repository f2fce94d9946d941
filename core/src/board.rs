use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CellCount, Coord, Coord2, GameConfig};

/// Opaque board identity, immutable once created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(Uuid);

impl BoardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Valid transitions:
/// - Ongoing -> Win
/// - Ongoing -> Lose
///
/// `Win` and `Lose` are terminal; no instruction mutates a terminal board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Ongoing,
    Win,
    Lose,
}

impl BoardStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl Default for BoardStatus {
    fn default() -> Self {
        Self::Ongoing
    }
}

/// Board record: fixed dimensions and mine count, mutable status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub rows: Coord,
    pub columns: Coord,
    pub mine_count: CellCount,
    pub status: BoardStatus,
    pub created_at: DateTime<Utc>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: BoardId::new(),
            rows: config.rows,
            columns: config.columns,
            mine_count: config.mines,
            status: BoardStatus::Ongoing,
            created_at: Utc::now(),
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_starts_ongoing() {
        let board = Board::new(GameConfig::new_unchecked(4, 5, 3));
        assert_eq!(board.status, BoardStatus::Ongoing);
        assert_eq!(board.size(), (4, 5));
        assert_eq!(board.mine_count, 3);
    }

    #[test]
    fn board_id_round_trips_through_text() {
        let id = BoardId::new();
        assert_eq!(BoardId::parse(&id.to_string()), Some(id));
        assert_eq!(BoardId::parse("not-an-id"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BoardStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
        let json = serde_json::to_string(&BoardStatus::Lose).unwrap();
        assert_eq!(json, "\"lose\"");
    }
}
