use serde::{Deserialize, Serialize};

pub const PLAYER_DARK: i64 = 1;
pub const PLAYER_LIGHT: i64 = 2;

/// A stone occupying a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stone {
    Dark,
    Light,
}

impl Stone {
    /// Decodes a cell value sent by the server.
    /// Contract: `1` is dark, `2` is light, anything else is an empty cell.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            PLAYER_DARK => Some(Self::Dark),
            PLAYER_LIGHT => Some(Self::Light),
            _ => None,
        }
    }
}

/// Game state snapshot as served by `GET /get_state` and the
/// reset / end / AI endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameState {
    pub board: Vec<Vec<i64>>,
    pub current_player: i64,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub game_over: bool,
}

impl GameState {
    pub fn is_dark_turn(&self) -> bool {
        self.current_player == PLAYER_DARK
    }

    pub fn is_light_turn(&self) -> bool {
        self.current_player == PLAYER_LIGHT
    }
}

/// Body of `POST /place_stone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
}

/// Reply to `POST /place_stone`. Only `success` drives behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stone_codes_map_to_dark_light_or_empty() {
        assert_eq!(Stone::from_code(1), Some(Stone::Dark));
        assert_eq!(Stone::from_code(2), Some(Stone::Light));
        assert_eq!(Stone::from_code(0), None);
        assert_eq!(Stone::from_code(3), None);
        assert_eq!(Stone::from_code(-1), None);
    }

    #[test]
    fn minimal_state_payload_parses_with_defaults() {
        let state: GameState =
            serde_json::from_str(r#"{"board":[[0,0],[0,0]],"current_player":1}"#).unwrap();

        assert_eq!(state.board, vec![vec![0, 0], vec![0, 0]]);
        assert!(state.is_dark_turn());
        assert!(state.messages.is_empty());
        assert!(!state.game_over);
    }

    #[test]
    fn full_state_payload_ignores_unknown_fields() {
        let json = r#"{
            "board": [[1, 2]],
            "current_player": 2,
            "ai_enabled": true,
            "messages": ["Black passes"],
            "game_over": true
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();

        assert!(state.is_light_turn());
        assert_eq!(state.messages, vec!["Black passes".to_string()]);
        assert!(state.game_over);
    }

    #[test]
    fn move_request_serializes_row_and_col() {
        let body = serde_json::to_string(&MoveRequest { row: 0, col: 3 }).unwrap();

        assert_eq!(body, r#"{"row":0,"col":3}"#);
    }

    #[test]
    fn move_response_tolerates_extra_fields() {
        let json = r#"{"success":true,"board":[[0]],"current_player":1,"game_over":false}"#;
        let response: MoveResponse = serde_json::from_str(json).unwrap();

        assert!(response.success);
        assert!(response.messages.is_empty());
    }
}
