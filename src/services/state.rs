//! Application state owned by the root component and shared via context.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::pdf_resolver::PdfResolver;
use super::transcript::{MessageRole, Transcript};
use super::view_mode::ViewMode;
use crate::config::ClientConfig;

pub const DEFAULT_TITLE: &str = "New Conversation";

/// Server-tracked conversation identity as last reported by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionInfo {
    pub id: Option<String>,
    pub title: String,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            id: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl SessionInfo {
    pub fn banner(&self) -> String {
        match self.id {
            Some(_) => format!("Session: {}", self.title),
            None => "No active conversation".to_string(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    /// Set while a chat request is in flight.
    pub is_generating: RwSignal<bool>,
    /// Set while a compile request is in flight.
    pub is_compiling: RwSignal<bool>,
    pub session: RwSignal<SessionInfo>,
    pub view_mode: RwSignal<ViewMode>,
    pub pdf: RwSignal<PdfResolver>,
    config: StoredValue<ClientConfig>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            transcript: RwSignal::new(Transcript::with_greeting()),
            input: RwSignal::new(String::new()),
            is_generating: RwSignal::new(false),
            is_compiling: RwSignal::new(false),
            session: RwSignal::new(SessionInfo::default()),
            view_mode: RwSignal::new(ViewMode::default()),
            pdf: RwSignal::new(PdfResolver::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn push_message(&self, role: MessageRole, text: &str) {
        let _ = self.transcript.try_update(|t| {
            t.push(role, text);
        });
    }

    pub fn push_system(&self, text: &str) {
        self.push_message(MessageRole::System, text);
    }

    pub fn push_error(&self, text: &str) {
        let _ = self.transcript.try_update(|t| {
            t.push_error(text);
        });
    }
}

pub fn provide_app_state(config: ClientConfig) -> AppState {
    let state = AppState::new(config);
    provide_context(state);
    state
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Holds a busy flag set for as long as it lives.
///
/// Dropping the guard clears the flag, so every exit path of the owning task
/// restores the control it gates.
pub struct BusyGuard {
    flag: RwSignal<bool>,
}

impl BusyGuard {
    /// Set `flag` and return a guard, or `None` if it was already set.
    pub fn acquire(flag: RwSignal<bool>) -> Option<Self> {
        if flag.try_get_untracked().unwrap_or(true) {
            return None;
        }
        flag.set(true);
        Some(Self { flag })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = self.flag.try_set(false);
    }
}

/// Run `f` once after `delay_ms`. Not cancellable; callers must tolerate the
/// view having gone away in the meantime.
pub fn defer(delay_ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        f();
    });
}
