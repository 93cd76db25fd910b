use serde::{Deserialize, Serialize};

use super::core::post_json;
use crate::config::ClientConfig;
use crate::error::ApiResult;

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply from `POST /chat`.
///
/// On failure `error` carries a code (`API_NOT_CONFIGURED`, `RATE_LIMIT`, ...)
/// and `response`, when present, the human-readable text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub response: Option<String>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub session_id: Option<String>,
    pub conversation_title: Option<String>,
}

impl ChatResponse {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text to show for a failed reply: the backend's message, else its code.
    pub fn error_text(&self) -> String {
        self.response
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

pub async fn send_chat(config: &ClientConfig, message: &str) -> ApiResult<ChatResponse> {
    let request = ChatRequest {
        message: message.to_string(),
    };
    post_json(&config.endpoint("chat"), &request).await
}
