//! `GameApi` over the browser `fetch` API.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use web_time::Instant;

use crate::api::{self, GameApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, describe_js};
use crate::types::{GameState, MoveRequest, MoveResponse};

#[derive(Debug, Clone)]
pub struct FetchApi {
    config: ClientConfig,
}

impl FetchApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(path, "GET", None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let body = body.map(encode_body).transpose()?;
        self.send(path, "POST", body).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        method: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let request = build_request(&url, method, body.as_deref())?;
        let transport = |err: JsValue| ApiError::Transport {
            url: url.clone(),
            message: describe_js(&err),
        };

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let started = Instant::now();
        log::debug!("{method} {url}");

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;
        check_status(&url, response.ok(), response.status())?;

        let json = JsFuture::from(response.json().map_err(transport)?)
            .await
            .map_err(|err| ApiError::Decode {
                url: url.clone(),
                message: describe_js(&err),
            })?;
        log::debug!(
            "{method} {url} -> {} in {}ms",
            response.status(),
            started.elapsed().as_millis()
        );

        serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Decode {
            url,
            message: err.to_string(),
        })
    }
}

/// Builds a fetch request. A JSON body also sets `Content-Type: application/json`.
pub fn build_request(url: &str, method: &str, body: Option<&str>) -> Result<Request, ApiError> {
    let transport = |err: JsValue| ApiError::Transport {
        url: url.to_string(),
        message: describe_js(&err),
    };

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(transport)?;
    }
    Ok(request)
}

/// Any status outside 200-299 is an error; its body is not interpreted.
pub fn check_status(url: &str, ok: bool, status: u16) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Encodes a `POST` body.
pub fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

impl GameApi for FetchApi {
    async fn get_state(&self) -> Result<GameState, ApiError> {
        self.get(api::GET_STATE).await
    }

    async fn place_stone(&self, request: MoveRequest) -> Result<MoveResponse, ApiError> {
        self.post(api::PLACE_STONE, Some(&request)).await
    }

    async fn reset_game(&self) -> Result<GameState, ApiError> {
        self.post::<(), _>(api::RESET_GAME, None).await
    }

    async fn end_game(&self) -> Result<GameState, ApiError> {
        self.post::<(), _>(api::END_GAME, None).await
    }

    async fn ai_move(&self) -> Result<GameState, ApiError> {
        self.post::<(), _>(api::AI_MOVE, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_passes() {
        assert!(check_status("/get_state", true, 200).is_ok());
    }

    #[test]
    fn non_success_status_becomes_status_error() {
        let err = check_status("/place_stone", false, 404).unwrap_err();

        match err {
            ApiError::Status { url, status } => {
                assert_eq!(url, "/place_stone");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn move_body_is_row_and_col_json() {
        let body = encode_body(&MoveRequest { row: 2, col: 5 }).unwrap();

        assert_eq!(body, r#"{"row":2,"col":5}"#);
    }
}
