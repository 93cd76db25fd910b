//! Conversation lifecycle: new, list/switch/delete, history window, export.
//!
//! The backend is authoritative for every session; each operation reports a
//! failure as exactly one transcript message and never retries.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::browser;
use super::history::{self, PickerChoice};
use super::state::{AppState, DEFAULT_TITLE};
use super::transcript::{MessageRole, GREETING, NEW_CONVERSATION_NOTICE};
use crate::bindings::{self, ConversationHistory, ConversationSummary};

const HISTORY_WINDOW_NAME: &str = "ConversationHistory";
const HISTORY_WINDOW_FEATURES: &str = "width=800,height=600";

impl AppState {
    pub fn new_conversation(&self) {
        let state = *self;
        spawn_local(async move {
            match bindings::start_session(&state.config()).await {
                Ok(response) if response.is_success() => {
                    tracing::info!(session_id = ?response.session_id, "Started new conversation");
                    state.begin_conversation(response.session_id);
                }
                Ok(_) => state.push_error("❌ Failed to start new conversation"),
                Err(e) => {
                    tracing::error!(error = %e, "Start session request failed");
                    state.push_error("❌ Error starting new conversation");
                }
            }
        });
    }

    /// Track `session_id` as a fresh conversation: default title, transcript
    /// reseeded with the notice and greeting, counter at zero.
    pub fn begin_conversation(&self, session_id: Option<String>) {
        let _ = self.session.try_update(|s| {
            s.id = session_id;
            s.title = DEFAULT_TITLE.to_string();
        });
        let _ = self.transcript.try_update(|t| {
            t.reset([
                (MessageRole::System, NEW_CONVERSATION_NOTICE),
                (MessageRole::Ai, GREETING),
            ]);
        });
    }

    /// List saved conversations and act on the picked one.
    pub fn pick_conversation(&self) {
        let state = *self;
        spawn_local(async move {
            let list = match bindings::list_conversations(&state.config()).await {
                Ok(list) => list,
                Err(e) => {
                    tracing::error!(error = %e, "List conversations request failed");
                    state.push_error("❌ Error loading conversations");
                    return;
                }
            };
            if !list.is_success() || list.conversations.is_empty() {
                state.push_system("💬 No saved conversations found");
                return;
            }

            let Some(reply) = browser::prompt(&history::conversation_prompt(&list.conversations))
            else {
                return;
            };
            match history::parse_picker_choice(&reply, list.conversations.len()) {
                Some(PickerChoice::Switch(index)) => {
                    state.switch_conversation(list.conversations[index].session_id.clone());
                }
                Some(PickerChoice::Delete(index)) => {
                    state.confirm_delete(&list.conversations[index]);
                }
                None => tracing::debug!(%reply, "Ignoring conversation picker reply"),
            }
        });
    }

    pub fn switch_conversation(&self, session_id: String) {
        let state = *self;
        spawn_local(async move {
            match bindings::switch_conversation(&state.config(), &session_id).await {
                Ok(response) if response.is_success() => {
                    let _ = state.session.try_update(|s| {
                        s.id = response.session_id.clone().or(Some(session_id));
                    });
                    let message = response.message.unwrap_or_default();
                    state.push_system(&format!("✅ {message}"));
                    state.reload_conversation().await;
                }
                Ok(response) => {
                    tracing::warn!(error = ?response.error, "Backend refused conversation switch");
                    state.push_error("❌ Failed to switch conversation");
                }
                Err(e) => {
                    tracing::error!(error = %e, "Switch conversation request failed");
                    state.push_error("❌ Error switching conversation");
                }
            }
        });
    }

    /// Replace the transcript with the backend's copy of the current session.
    async fn reload_conversation(&self) {
        match bindings::get_conversation_history(&self.config()).await {
            Ok(history) if history.is_success() => self.replace_transcript(&history),
            Ok(_) => tracing::debug!("No history to reload"),
            Err(e) => {
                tracing::error!(error = %e, "History request failed");
                self.push_error("❌ Error loading conversation history");
            }
        }
    }

    fn replace_transcript(&self, history: &ConversationHistory) {
        let title = history.metadata.title.clone();
        let header = format!("📋 Loaded conversation: {title}");
        let _ = self.transcript.try_update(|t| {
            t.reset([(MessageRole::System, header.as_str())]);
            for message in &history.messages {
                let role = if message.is_human() {
                    MessageRole::User
                } else {
                    MessageRole::Ai
                };
                t.push(role, &message.content);
            }
        });
        let _ = self.session.try_update(|s| s.title = title);
    }

    fn confirm_delete(&self, conversation: &ConversationSummary) {
        let question = format!("Delete conversation \"{}\"? This cannot be undone.", conversation.title);
        if browser::confirm(&question) {
            self.delete_conversation(conversation.session_id.clone());
        }
    }

    pub fn delete_conversation(&self, session_id: String) {
        let state = *self;
        spawn_local(async move {
            match bindings::delete_conversation(&state.config(), &session_id).await {
                Ok(response) if response.is_success() => {
                    tracing::info!(%session_id, "Deleted conversation");
                    let _ = state.session.try_update(|s| {
                        if s.id.as_deref() == Some(session_id.as_str()) {
                            *s = Default::default();
                        }
                    });
                    let message = response
                        .message
                        .unwrap_or_else(|| "Conversation deleted".to_string());
                    state.push_system(&format!("🗑️ {message}"));
                }
                Ok(_) => state.push_error("❌ Failed to delete conversation"),
                Err(e) => {
                    tracing::error!(error = %e, "Delete conversation request failed");
                    state.push_error("❌ Error deleting conversation");
                }
            }
        });
    }

    /// Open the current conversation as a standalone page in a new window.
    pub fn show_history_window(&self) {
        let state = *self;
        spawn_local(async move {
            let config = state.config();
            match bindings::get_conversation_history(&config).await {
                Ok(history) if history.has_messages() => {
                    let document = history::history_document(&history);
                    if let Err(e) = browser::open_html_window(
                        &document,
                        HISTORY_WINDOW_NAME,
                        HISTORY_WINDOW_FEATURES,
                        config.timing.object_url_ttl_ms,
                    ) {
                        tracing::warn!(error = %e, "Failed to open history window");
                        state.push_error("❌ Could not open the history window. Is a popup blocker active?");
                    }
                }
                Ok(_) => state.push_system("📋 No conversation history available"),
                Err(e) => {
                    tracing::error!(error = %e, "History request failed");
                    state.push_error("❌ Error loading conversation history");
                }
            }
        });
    }

    pub fn export_conversation(&self) {
        let state = *self;
        spawn_local(async move {
            match bindings::get_conversation_history(&state.config()).await {
                Ok(history) if history.has_messages() => {
                    let file_name = history::export_file_name(&history.metadata.title);
                    match browser::download_text(&file_name, &history::export_text(&history)) {
                        Ok(()) => state.push_system("📤 Conversation exported successfully!"),
                        Err(e) => {
                            tracing::warn!(error = %e, "Export download failed");
                            state.push_error("❌ Error exporting conversation");
                        }
                    }
                }
                Ok(_) => state.push_system("📤 No conversation to export"),
                Err(e) => {
                    tracing::error!(error = %e, "History request failed");
                    state.push_error("❌ Error exporting conversation");
                }
            }
        });
    }
}
