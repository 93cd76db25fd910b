use serde::{Deserialize, Serialize};

/// Id of the optional inline JSON config element in the host page.
pub const CONFIG_ELEMENT_ID: &str = "resume-assistant-config";

/// Top-level client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub timing: TimingConfig,
    pub pdf: PdfConfig,
    pub chat: ChatConfig,
}

/// Backend location and static resource paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin. Empty means same origin as the page.
    pub base_url: String,
    /// Static path of the compiled resume.
    pub pdf_path: String,
    /// Path that serves the resume as an attachment.
    pub download_path: String,
    /// Suggested file name for downloads.
    pub download_file_name: String,
}

/// Deferred-callback delays, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub initial_pdf_load_ms: u32,
    pub pdf_check_delay_ms: u32,
    pub pdf_refresh_after_compile_ms: u32,
    pub reply_reload_delay_ms: u32,
    pub auto_compile_delay_ms: u32,
    pub object_url_ttl_ms: u32,
}

/// PDF preview heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// The native embed counts as failed when its width or height is at or
    /// below this many CSS pixels.
    pub min_rendered_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Keyword auto-compile needs strictly more displayed messages than this.
    pub auto_compile_min_messages: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            timing: TimingConfig::default(),
            pdf: PdfConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            pdf_path: "output.pdf".to_string(),
            download_path: "download".to_string(),
            download_file_name: "my-resume.pdf".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_pdf_load_ms: 1000,
            pdf_check_delay_ms: 3000,
            pdf_refresh_after_compile_ms: 500,
            reply_reload_delay_ms: 1000,
            auto_compile_delay_ms: 1000,
            object_url_ttl_ms: 10_000,
        }
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_rendered_px: 0.0 }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            auto_compile_min_messages: 2,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load configuration from the host page's inline config element.
    /// Returns `Default` if the element is missing or unparseable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    tracing::info!(element = CONFIG_ELEMENT_ID, "Loaded client config");
                    config
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse client config, using defaults");
                    Self::default()
                }
            },
            None => {
                tracing::debug!("No inline client config, using defaults");
                Self::default()
            }
        }
    }

    /// Absolute or root-relative URL for a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api.base_url, path)
    }

    pub fn pdf_url(&self) -> String {
        self.endpoint(&self.api.pdf_path)
    }

    pub fn download_url(&self) -> String {
        self.endpoint(&self.api.download_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    let base = base.trim_end_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api.pdf_path, "output.pdf");
        assert_eq!(config.timing.pdf_check_delay_ms, 3000);
        assert_eq!(config.timing.pdf_refresh_after_compile_ms, 500);
        assert_eq!(config.chat.auto_compile_min_messages, 2);
        assert_eq!(config.pdf.min_rendered_px, 0.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"timing": {"pdf_check_delay_ms": 1500}}"#).unwrap();
        assert_eq!(config.timing.pdf_check_delay_ms, 1500);
        assert_eq!(config.timing.auto_compile_delay_ms, 1000);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ClientConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_endpoint_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("chat"), "/chat");
        assert_eq!(config.endpoint("/compile_resume"), "/compile_resume");
        assert_eq!(config.pdf_url(), "/output.pdf");
    }

    #[test]
    fn test_endpoint_with_base_url() {
        let mut config = ClientConfig::default();
        config.api.base_url = "http://localhost:5000/".to_string();
        assert_eq!(config.endpoint("/chat"), "http://localhost:5000/chat");
        assert_eq!(config.download_url(), "http://localhost:5000/download");
    }
}
