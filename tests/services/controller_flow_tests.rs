//! Controller Flow Tests
//!
//! Drives the async chat, compile and session paths against a backend
//! origin that refuses connections, and checks the busy flags and the
//! transcript once each request has settled.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use resume_assistant_frontend::config::ClientConfig;
use resume_assistant_frontend::services::chat_controller::{FollowUp, AUTO_COMPILE_NOTICE};
use resume_assistant_frontend::services::compile::CompileSource;
use resume_assistant_frontend::services::pdf_resolver::PdfDisplayState;
use resume_assistant_frontend::services::state::{AppState, DEFAULT_TITLE};
use resume_assistant_frontend::services::transcript::{
    MessageRole, GREETING, NEW_CONVERSATION_NOTICE,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:9";
const SETTLE_TIMEOUT_MS: u32 = 5_000;
const POLL_MS: u32 = 25;

fn offline_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    config.api.base_url = UNREACHABLE_BACKEND.to_string();
    config.timing.auto_compile_delay_ms = 10;
    config.timing.reply_reload_delay_ms = 10;
    config.timing.pdf_check_delay_ms = 60_000;
    config
}

fn offline_state() -> (Owner, AppState) {
    let owner = Owner::new();
    let state = owner.with(|| AppState::new(offline_config()));
    (owner, state)
}

/// Poll until `done` holds. Returns false if it never did.
async fn settle(done: impl Fn() -> bool) -> bool {
    let mut waited = 0;
    while !done() {
        if waited >= SETTLE_TIMEOUT_MS {
            return false;
        }
        TimeoutFuture::new(POLL_MS).await;
        waited += POLL_MS;
    }
    true
}

fn last_entry(state: &AppState) -> (MessageRole, String, bool) {
    state.transcript.with_untracked(|t| {
        let entry = t.entries().last().expect("transcript is never empty");
        (entry.role, entry.text.clone(), entry.is_error)
    })
}

fn texts(state: &AppState) -> Vec<String> {
    state
        .transcript
        .with_untracked(|t| t.entries().iter().map(|e| e.text.clone()).collect())
}

// ============================================================================
// Chat Tests
// ============================================================================

#[wasm_bindgen_test]
async fn test_send_failure_clears_generation_flag() {
    let (_owner, state) = offline_state();
    state.input.set("I have 5 years of experience".to_string());

    state.send_message();

    // Optimistic append and input cleared before the request settles.
    assert!(state.is_generating.get_untracked());
    assert_eq!(state.input.get_untracked(), "");
    assert!(texts(&state).contains(&"I have 5 years of experience".to_string()));

    assert!(settle(|| !state.is_generating.get_untracked()).await);

    let (role, text, is_error) = last_entry(&state);
    assert_eq!(role, MessageRole::System);
    assert!(is_error);
    assert!(text.starts_with("❌ Connection error"));
}

#[wasm_bindgen_test]
async fn test_send_allowed_again_after_failure() {
    let (_owner, state) = offline_state();
    state.input.set("first".to_string());
    state.send_message();
    assert!(settle(|| !state.is_generating.get_untracked()).await);

    state.input.set("second".to_string());
    state.send_message();
    assert!(state.is_generating.get_untracked());
    assert!(texts(&state).contains(&"second".to_string()));
    assert!(settle(|| !state.is_generating.get_untracked()).await);
}

// ============================================================================
// Compile Tests
// ============================================================================

#[wasm_bindgen_test]
async fn test_compile_failure_clears_busy_flag() {
    let (_owner, state) = offline_state();

    state.compile_resume(CompileSource::Refresh);
    assert!(state.is_compiling.get_untracked());

    assert!(settle(|| !state.is_compiling.get_untracked()).await);

    let (_, text, is_error) = last_entry(&state);
    assert!(is_error);
    assert_eq!(text, "❌ Error compiling resume. Please check if LaTeX is installed.");
}

#[wasm_bindgen_test]
async fn test_generate_failure_mentions_source_file() {
    let (_owner, state) = offline_state();

    state.compile_resume(CompileSource::Generate);
    assert!(settle(|| !state.is_compiling.get_untracked()).await);

    let (_, text, _) = last_entry(&state);
    assert!(text.ends_with("and output.tex exists."));
}

#[wasm_bindgen_test]
async fn test_keyword_follow_up_compiles_after_delay() {
    let (_owner, state) = offline_state();
    let before = state.transcript.with_untracked(|t| t.len());

    state.schedule_follow_up(FollowUp::AutoCompile);
    assert_eq!(state.transcript.with_untracked(|t| t.len()), before);
    assert!(!state.is_compiling.get_untracked());

    assert!(settle(|| texts(&state).contains(&AUTO_COMPILE_NOTICE.to_string())).await);
    let log = texts(&state);
    let intro = log
        .iter()
        .position(|t| t == "🔄 Compiling resume from LaTeX...")
        .expect("auto compile announces itself");
    let notice = log
        .iter()
        .position(|t| t == AUTO_COMPILE_NOTICE)
        .expect("notice follows the compile");
    assert!(intro < notice);

    assert!(settle(|| !state.is_compiling.get_untracked()).await);
}

#[wasm_bindgen_test]
async fn test_reload_follow_up_starts_native_load() {
    let (_owner, state) = offline_state();
    assert_eq!(state.pdf.with_untracked(|p| p.state()), PdfDisplayState::NotStarted);

    state.schedule_follow_up(FollowUp::ReloadPdf);

    assert!(
        settle(|| state.pdf.with_untracked(|p| p.state()) == PdfDisplayState::NativePending).await
    );
}

// ============================================================================
// Session Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_begin_conversation_reseeds_transcript() {
    let (_owner, state) = offline_state();
    state.push_message(MessageRole::User, "hello");
    state.push_system("note");
    assert_eq!(state.transcript.with_untracked(|t| t.message_count()), 2);

    state.begin_conversation(Some("abc123".to_string()));

    assert_eq!(
        texts(&state),
        vec![NEW_CONVERSATION_NOTICE.to_string(), GREETING.to_string()]
    );
    assert_eq!(state.transcript.with_untracked(|t| t.message_count()), 0);
    let session = state.session.get_untracked();
    assert_eq!(session.id.as_deref(), Some("abc123"));
    assert_eq!(session.title, DEFAULT_TITLE);
}

#[wasm_bindgen_test]
async fn test_new_conversation_failure_keeps_transcript() {
    let (_owner, state) = offline_state();
    let before = state.transcript.with_untracked(|t| t.len());

    state.new_conversation();

    assert!(settle(|| state.transcript.with_untracked(|t| t.len()) > before).await);
    let (_, text, is_error) = last_entry(&state);
    assert!(is_error);
    assert_eq!(text, "❌ Error starting new conversation");
    assert_eq!(state.transcript.with_untracked(|t| t.entries()[0].text.clone()), GREETING);
    assert!(state.session.get_untracked().id.is_none());
}
