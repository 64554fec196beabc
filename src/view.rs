//! The board view: renders server state and turns clicks into move requests.

use std::cell::Cell;

use crate::api::GameApi;
use crate::config::{ClientConfig, Labels};
use crate::error::ApiError;
use crate::render;
use crate::surface::Surface;
use crate::types::{GameState, MoveRequest};

/// What happened to a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The server took the move and the board was resynced.
    Accepted,
    /// The server refused the move; the display was left as is.
    Rejected,
    /// Another move was still in flight.
    Ignored,
}

/// Holds the busy flag for the lifetime of one move.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Stateless renderer-and-dispatcher. The only local state is whether a move
/// is in flight; game state is never cached and every change is confirmed by
/// a resync from the server.
pub struct BoardView<A, S> {
    api: A,
    surface: S,
    labels: Labels,
    ai_opponent: bool,
    in_flight: Cell<bool>,
}

impl<A: GameApi, S: Surface> BoardView<A, S> {
    pub fn new(api: A, surface: S, config: &ClientConfig) -> Self {
        Self {
            api,
            surface,
            labels: config.labels.clone(),
            ai_opponent: config.ai_opponent,
            in_flight: Cell::new(false),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    fn is_move_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Fetches the current state and redraws the whole display with it.
    /// On failure the display is left untouched.
    pub async fn load_state(&self) -> Result<GameState, ApiError> {
        let state = self.api.get_state().await?;
        self.render(&state);
        Ok(state)
    }

    pub fn render(&self, state: &GameState) {
        let model = render::build(state, &self.labels);
        self.surface.show_board(&model);
    }

    /// Submits a move for the clicked cell.
    ///
    /// Contract:
    /// - accepted: exactly one `get_state` follows. Messages carried by the
    ///   move reply are shown with the resynced board. With the AI opponent
    ///   enabled, `ai_move` is requested for as long as it is light's turn.
    /// - rejected: the user is notified and nothing else is requested.
    /// - while another move, reset or end is being handled, the click is ignored.
    pub async fn on_cell_click(&self, row: usize, col: usize) -> Result<ClickOutcome, ApiError> {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            log::debug!("ignoring click at ({row}, {col}): request in flight");
            return Ok(ClickOutcome::Ignored);
        };

        let response = self.api.place_stone(MoveRequest { row, col }).await?;
        for message in &response.messages {
            log::info!("server: {message}");
        }

        if !response.success {
            log::warn!("move at ({row}, {col}) rejected");
            self.surface.notify(&self.labels.invalid_move);
            return Ok(ClickOutcome::Rejected);
        }

        let mut state = self.api.get_state().await?;
        if state.messages.is_empty() {
            state.messages = response.messages;
        }
        self.render(&state);

        if self.ai_opponent {
            self.play_ai_turns(state).await?;
        }

        Ok(ClickOutcome::Accepted)
    }

    /// Asks the server to move for light until it is dark's turn again.
    /// Dark passing leaves light to move, so one request may not be enough.
    /// Bounded by the number of cells, since every AI move fills one.
    async fn play_ai_turns(&self, mut state: GameState) -> Result<(), ApiError> {
        let limit = state.board.iter().map(Vec::len).sum::<usize>().max(1);
        for _ in 0..limit {
            if !state.is_light_turn() || state.game_over {
                return Ok(());
            }
            state = self.api.ai_move().await?;
            self.render(&state);
        }
        if state.is_light_turn() && !state.game_over {
            log::warn!("AI still to move after {limit} requests");
        }
        Ok(())
    }

    /// Starts a new game and shows the server's fresh board.
    /// Skipped while a move is in flight.
    pub async fn reset(&self) -> Result<(), ApiError> {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            log::debug!("ignoring reset: request in flight");
            return Ok(());
        };
        log::info!("resetting game");
        let state = self.api.reset_game().await?;
        self.render(&state);
        Ok(())
    }

    /// Ends the game and shows the final board.
    /// Skipped while a move is in flight.
    pub async fn end_game(&self) -> Result<(), ApiError> {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            log::debug!("ignoring end game: request in flight");
            return Ok(());
        };
        log::info!("ending game");
        let state = self.api.end_game().await?;
        self.render(&state);
        Ok(())
    }
}
