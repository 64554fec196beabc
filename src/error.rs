//! Error types for talking to the game server.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while exchanging requests with the game server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Not running inside a browser window
    #[error("no browser window available")]
    NoWindow,

    /// The request could not be sent or the connection failed
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status code
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The request body could not be encoded
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Renders a JS exception value for log output and error messages.
pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = ApiError::Status {
            url: "/get_state".to_string(),
            status: 500,
        };

        assert_eq!(err.to_string(), "request to /get_state returned HTTP 500");
    }

    #[test]
    fn decode_error_includes_message() {
        let err = ApiError::Decode {
            url: "/place_stone".to_string(),
            message: "missing field `success`".to_string(),
        };

        assert!(err.to_string().contains("missing field `success`"));
    }
}
