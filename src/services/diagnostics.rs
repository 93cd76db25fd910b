use wasm_bindgen_futures::spawn_local;

use super::state::AppState;
use crate::bindings::{self, DebugInfo, ToolTestResponse};

const PREVIEW_CHARS: usize = 200;

/// Multi-line summary of the backend's memory diagnostics.
pub fn debug_summary(info: &DebugInfo) -> String {
    let mut summary = format!(
        "🧠 Memory Debug Info:\n📊 Session ID: {}\n📈 Total conversations: {}",
        info.current_session_id.as_deref().unwrap_or("None"),
        info.total_conversations,
    );

    let Some(conversation) = &info.current_conversation else {
        summary.push_str("\n⚠️ No active conversation");
        return summary;
    };

    summary.push_str(&format!(
        "\n💬 Current conversation:\n   📝 Messages: {}\n   📅 Created: {}\n   🏷️ Title: {}",
        conversation.message_count, conversation.metadata.created_at, conversation.metadata.title,
    ));
    if !conversation.message_sizes.is_empty() {
        summary.push_str("\n📏 Recent message sizes:");
        for (i, size) in conversation.message_sizes.iter().enumerate() {
            let truncated = if size.is_truncated() { " (truncated)" } else { "" };
            summary.push_str(&format!(
                "\n   {}. {}: {} chars{}",
                i + 1,
                size.kind,
                size.length,
                truncated
            ));
        }
    }
    summary
}

/// Summary line and verdict line for a successful tool check.
pub fn tool_report(response: &ToolTestResponse) -> (String, String) {
    let preview: String = response.response_content.chars().take(PREVIEW_CHARS).collect();
    let tools = if response.tool_calls.is_empty() {
        "None".to_string()
    } else {
        response
            .tool_calls
            .iter()
            .map(|call| call.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let summary = format!(
        "✅ LLM Tool Test Results:\n📄 Response: {preview}...\n🔧 Has tool calls: {}\n📞 Tool calls count: {}\n🛠️ Tools used: {tools}",
        response.has_tool_calls, response.tool_calls_count,
    );
    let verdict = if response.tool_calls_count > 0 {
        "✅ Tool integration working! LLM can call the write_latex tool."
    } else {
        "⚠️ LLM responded but didn't use tools. Check system prompt."
    };
    (summary, verdict.to_string())
}

impl AppState {
    pub fn debug_memory(&self) {
        self.push_system("🔍 Checking memory status...");
        let state = *self;
        spawn_local(async move {
            match bindings::debug_memory(&state.config()).await {
                Ok(response) if response.is_success() => {
                    state.push_system(&debug_summary(&response.debug_info));
                }
                Ok(response) => {
                    let reason = response.error.unwrap_or_else(|| "unknown error".to_string());
                    state.push_error(&format!("❌ Memory debug failed: {reason}"));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Memory debug request failed");
                    state.push_error("❌ Error checking memory status.");
                }
            }
        });
    }

    pub fn test_tool_integration(&self) {
        self.push_system("🧪 Testing LLM tool integration...");
        let state = *self;
        spawn_local(async move {
            match bindings::test_tool(&state.config()).await {
                Ok(response) if response.success => {
                    let (summary, verdict) = tool_report(&response);
                    tracing::info!(tool_calls = response.tool_calls_count, "Tool test finished");
                    state.push_system(&summary);
                    state.push_system(&verdict);
                }
                Ok(response) => {
                    let reason = response.message.unwrap_or_else(|| "unknown error".to_string());
                    state.push_error(&format!("❌ Tool test failed: {reason}"));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Tool test request failed");
                    state.push_error("❌ Error testing tool integration.");
                }
            }
        });
    }
}
