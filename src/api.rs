use crate::error::ApiError;
use crate::types::{GameState, MoveRequest, MoveResponse};

pub const GET_STATE: &str = "get_state";
pub const PLACE_STONE: &str = "place_stone";
pub const RESET_GAME: &str = "reset_game";
pub const END_GAME: &str = "end_game";
pub const AI_MOVE: &str = "ai_move";

/// Requests understood by the game server.
///
/// The browser runtime is single threaded, so the returned futures are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait GameApi {
    /// `GET /get_state`
    async fn get_state(&self) -> Result<GameState, ApiError>;

    /// `POST /place_stone`
    async fn place_stone(&self, request: MoveRequest) -> Result<MoveResponse, ApiError>;

    /// `POST /reset_game`
    async fn reset_game(&self) -> Result<GameState, ApiError>;

    /// `POST /end_game`
    async fn end_game(&self) -> Result<GameState, ApiError>;

    /// `POST /ai_move`
    async fn ai_move(&self) -> Result<GameState, ApiError>;
}
