use serde::{Deserialize, Serialize};

use super::core::{delete_json, get_json, post_json, post_no_args};
use crate::config::ClientConfig;
use crate::error::ApiResult;

const STATUS_SUCCESS: &str = "success";

fn is_success(status: &Option<String>) -> bool {
    status.as_deref() == Some(STATUS_SUCCESS)
}

// ============================================================================
// Session Lifecycle
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StartSessionResponse {
    pub status: Option<String>,
    pub session_id: Option<String>,
    pub message: Option<String>,
}

impl StartSessionResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

pub async fn start_session(config: &ClientConfig) -> ApiResult<StartSessionResponse> {
    post_no_args(&config.endpoint("start_session")).await
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionIdPayload {
    pub session_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwitchConversationResponse {
    pub status: Option<String>,
    pub session_id: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl SwitchConversationResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

pub async fn switch_conversation(
    config: &ClientConfig,
    session_id: &str,
) -> ApiResult<SwitchConversationResponse> {
    let payload = SessionIdPayload {
        session_id: session_id.to_string(),
    };
    post_json(&config.endpoint("switch_conversation"), &payload).await
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeleteConversationResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl DeleteConversationResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

pub async fn delete_conversation(
    config: &ClientConfig,
    session_id: &str,
) -> ApiResult<DeleteConversationResponse> {
    let payload = SessionIdPayload {
        session_id: session_id.to_string(),
    };
    delete_json(&config.endpoint("delete_conversation"), &payload).await
}

// ============================================================================
// History
// ============================================================================

/// One stored message. `kind` is `"human"` or `"ai"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub timestamp: String,
}

impl HistoryMessage {
    pub fn is_human(&self) -> bool {
        self.kind == "human"
    }

    /// Speaker label used in the history window and exports.
    pub fn speaker(&self) -> &'static str {
        if self.is_human() {
            "You"
        } else {
            "AI"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMetadata {
    pub title: String,
    pub created_at: String,
    pub message_count: u32,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversationHistory {
    pub status: Option<String>,
    pub session_id: Option<String>,
    pub messages: Vec<HistoryMessage>,
    pub metadata: ConversationMetadata,
    pub message: Option<String>,
}

impl ConversationHistory {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }

    pub fn has_messages(&self) -> bool {
        self.is_success() && !self.messages.is_empty()
    }
}

pub async fn get_conversation_history(config: &ClientConfig) -> ApiResult<ConversationHistory> {
    get_json(&config.endpoint("get_conversation_history")).await
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversationSummary {
    pub session_id: String,
    pub title: String,
    pub created_at: String,
    pub last_updated: Option<String>,
    pub message_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversationList {
    pub status: Option<String>,
    pub conversations: Vec<ConversationSummary>,
    pub total_count: Option<u32>,
}

impl ConversationList {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

pub async fn list_conversations(config: &ClientConfig) -> ApiResult<ConversationList> {
    get_json(&config.endpoint("list_conversations")).await
}

// ============================================================================
// Diagnostics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessageSize {
    #[serde(rename = "type")]
    pub kind: String,
    pub length: u64,
    pub original_length: u64,
}

impl MessageSize {
    pub fn is_truncated(&self) -> bool {
        self.length != self.original_length
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversationDebug {
    pub message_count: u32,
    pub metadata: ConversationMetadata,
    pub message_sizes: Vec<MessageSize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugInfo {
    pub current_session_id: Option<String>,
    pub total_conversations: u32,
    pub current_conversation: Option<ConversationDebug>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugMemoryResponse {
    pub status: Option<String>,
    pub debug_info: DebugInfo,
    pub error: Option<String>,
}

impl DebugMemoryResponse {
    pub fn is_success(&self) -> bool {
        is_success(&self.status)
    }
}

pub async fn debug_memory(config: &ClientConfig) -> ApiResult<DebugMemoryResponse> {
    get_json(&config.endpoint("debug_memory")).await
}
