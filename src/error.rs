use thiserror::Error;

/// Failures talking to the backend or to browser APIs.
///
/// Backend-signalled failures (`success: false`, `status != "success"`) are
/// not errors at this level; the response types expose them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("browser error: {0}")]
    Browser(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
