use serde::Deserialize;

use super::core::post_no_args;
use crate::config::ClientConfig;
use crate::error::ApiResult;

// ============================================================================
// LaTeX Compilation
// ============================================================================

/// Reply from `POST /compile_resume`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompileResponse {
    pub success: bool,
    pub message: String,
    pub pdf_generated: bool,
}

pub async fn compile_resume(config: &ClientConfig) -> ApiResult<CompileResponse> {
    post_no_args(&config.endpoint("compile_resume")).await
}

// ============================================================================
// Tool Integration Check
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolCall {
    pub name: String,
}

/// Reply from `POST /test_tool`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolTestResponse {
    pub success: bool,
    pub response_content: String,
    pub has_tool_calls: bool,
    pub tool_calls_count: u32,
    pub tool_calls: Vec<ToolCall>,
    pub message: Option<String>,
}

pub async fn test_tool(config: &ClientConfig) -> ApiResult<ToolTestResponse> {
    post_no_args(&config.endpoint("test_tool")).await
}
