use serde::Deserialize;

/// User-facing strings shown by the board view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub dark_turn: String,
    pub light_turn: String,
    pub game_over: String,
    pub invalid_move: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            dark_turn: "Black's turn".to_string(),
            light_turn: "White's turn".to_string(),
            game_over: "Game over".to_string(),
            invalid_move: "You can't place a stone there!".to_string(),
        }
    }
}

/// Client settings passed from JS to `run_app`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for endpoint URLs. Empty means same origin, endpoints under `/`.
    pub base_url: String,
    pub board_id: String,
    pub status_id: String,
    /// Skipped silently when no element with this id exists.
    pub messages_id: Option<String>,
    pub reset_button_id: Option<String>,
    pub end_button_id: Option<String>,
    /// Ask the server to play light's turn after each accepted move.
    pub ai_opponent: bool,
    pub labels: Labels,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            board_id: "board".to_string(),
            status_id: "status".to_string(),
            messages_id: Some("messages".to_string()),
            reset_button_id: None,
            end_button_id: None,
            ai_opponent: false,
            labels: Labels::default(),
        }
    }
}

impl ClientConfig {
    /// Joins `path` onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_are_root_relative() {
        let config = ClientConfig::default();

        assert_eq!(config.endpoint("get_state"), "/get_state");
        assert_eq!(config.endpoint("/place_stone"), "/place_stone");
    }

    #[test]
    fn base_url_trailing_slash_is_not_doubled() {
        let config = ClientConfig {
            base_url: "http://localhost:5000/".to_string(),
            ..ClientConfig::default()
        };

        assert_eq!(config.endpoint("get_state"), "http://localhost:5000/get_state");
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"ai_opponent": true, "labels": {"dark_turn": "黒の番です"}}"#,
        )
        .unwrap();

        assert!(config.ai_opponent);
        assert_eq!(config.board_id, "board");
        assert_eq!(config.labels.dark_turn, "黒の番です");
        assert_eq!(config.labels.light_turn, "White's turn");
    }
}
