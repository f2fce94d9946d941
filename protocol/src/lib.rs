//! Wire shapes for the board API.
//!
//! Pure data: what crosses the boundary between the game service and its
//! caller, independent of any transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two play instructions a caller may issue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayInstruction {
    Flag,
    Reveal,
}

/// Board lifecycle as seen by callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardState {
    Ongoing,
    Win,
    Lose,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub rows: u8,
    pub columns: u8,
    pub mines: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    pub board_id: String,
    pub x: u8,
    pub y: u8,
    pub instruction: PlayInstruction,
}

/// One cell as the caller sees it. `content` is only present for revealed
/// cells; hidden cells keep their mine/number value to themselves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub x: u8,
    pub y: u8,
    pub is_revealed: bool,
    pub is_flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<i8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub id: String,
    pub rows: u8,
    pub columns: u8,
    pub mines: u16,
    pub status: BoardState,
    pub created_at: DateTime<Utc>,
    pub cell_list: Vec<CellView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_use_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&PlayInstruction::Flag).unwrap(),
            "\"flag\""
        );
        let parsed: PlayInstruction = serde_json::from_str("\"reveal\"").unwrap();
        assert_eq!(parsed, PlayInstruction::Reveal);
    }

    #[test]
    fn play_request_round_trips() {
        let request = PlayRequest {
            board_id: "8e2e2b4a-3f0f-4f4f-9e67-0f60cf76b1a5".into(),
            x: 2,
            y: 3,
            instruction: PlayInstruction::Reveal,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"boardId\""));
        assert_eq!(serde_json::from_str::<PlayRequest>(&json).unwrap(), request);
    }

    #[test]
    fn hidden_cells_omit_their_content() {
        let cell = CellView {
            x: 0,
            y: 1,
            is_revealed: false,
            is_flagged: true,
            content: None,
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(
            json,
            "{\"x\":0,\"y\":1,\"isRevealed\":false,\"isFlagged\":true}"
        );
    }

    #[test]
    fn revealed_cells_expose_their_content() {
        let cell = CellView {
            x: 4,
            y: 4,
            is_revealed: true,
            is_flagged: false,
            content: Some(3),
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"content\":3"));
        assert_eq!(serde_json::from_str::<CellView>(&json).unwrap(), cell);
    }
}
