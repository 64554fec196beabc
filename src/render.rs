//! Builds the display model of a game state. Pure and surface independent.

use crate::config::Labels;
use crate::types::{GameState, Stone};

pub const DARK_GLYPH: &str = "●";
pub const LIGHT_GLYPH: &str = "○";

/// One rendered board cell, tagged with its coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub glyph: &'static str,
}

/// Everything a surface needs to draw one game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    pub rows: Vec<Vec<CellView>>,
    pub status: String,
    pub messages: Vec<String>,
}

pub fn glyph_for(code: i64) -> &'static str {
    match Stone::from_code(code) {
        Some(Stone::Dark) => DARK_GLYPH,
        Some(Stone::Light) => LIGHT_GLYPH,
        None => "",
    }
}

pub fn status_line(state: &GameState, labels: &Labels) -> String {
    if state.game_over {
        labels.game_over.clone()
    } else if state.is_dark_turn() {
        labels.dark_turn.clone()
    } else {
        labels.light_turn.clone()
    }
}

/// Maps a state onto rows of cells plus the status line.
/// Ragged boards keep each row's own length.
pub fn build(state: &GameState, labels: &Labels) -> BoardModel {
    let rows = state
        .board
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &code)| CellView {
                    row,
                    col,
                    glyph: glyph_for(code),
                })
                .collect()
        })
        .collect();

    BoardModel {
        rows,
        status: status_line(state, labels),
        messages: state.messages.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(board: Vec<Vec<i64>>, current_player: i64) -> GameState {
        GameState {
            board,
            current_player,
            messages: Vec::new(),
            game_over: false,
        }
    }

    #[test]
    fn empty_two_by_two_board_on_darks_turn() {
        let labels = Labels::default();
        let model = build(&state(vec![vec![0, 0], vec![0, 0]], 1), &labels);

        assert_eq!(model.rows.len(), 2);
        assert!(model.rows.iter().all(|row| row.len() == 2));
        assert!(model.rows.iter().flatten().all(|cell| cell.glyph.is_empty()));
        assert_eq!(model.status, labels.dark_turn);
    }

    #[test]
    fn cells_carry_glyph_and_coordinates() {
        let model = build(&state(vec![vec![1, 2, 7]], 2), &Labels::default());
        let row = &model.rows[0];

        assert_eq!(row[0], CellView { row: 0, col: 0, glyph: DARK_GLYPH });
        assert_eq!(row[1], CellView { row: 0, col: 1, glyph: LIGHT_GLYPH });
        assert_eq!(row[2], CellView { row: 0, col: 2, glyph: "" });
    }

    #[test]
    fn ragged_rows_keep_their_own_length() {
        let model = build(&state(vec![vec![0], vec![0, 1, 2], vec![]], 1), &Labels::default());

        let lengths: Vec<usize> = model.rows.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![1, 3, 0]);
        assert_eq!(model.rows[1][2].row, 1);
        assert_eq!(model.rows[1][2].col, 2);
    }

    #[test]
    fn any_non_dark_player_shows_lights_turn() {
        let labels = Labels::default();

        assert_eq!(status_line(&state(vec![], 2), &labels), labels.light_turn);
        assert_eq!(status_line(&state(vec![], 0), &labels), labels.light_turn);
        assert_eq!(status_line(&state(vec![], 9), &labels), labels.light_turn);
    }

    #[test]
    fn game_over_replaces_turn_indicator_and_keeps_messages() {
        let labels = Labels::default();
        let mut over = state(vec![vec![1]], 1);
        over.game_over = true;
        over.messages = vec!["Black wins".to_string()];

        let model = build(&over, &labels);

        assert_eq!(model.status, labels.game_over);
        assert_eq!(model.messages, vec!["Black wins".to_string()]);
    }
}
