//! AppState Tests
//!
//! Busy flags, view mode switching and the synchronous guards in front of
//! the chat and compile requests.

use leptos::prelude::*;
use resume_assistant_frontend::config::ClientConfig;
use resume_assistant_frontend::services::chat_controller::PromptTemplate;
use resume_assistant_frontend::services::compile::CompileSource;
use resume_assistant_frontend::services::shortcuts::Shortcut;
use resume_assistant_frontend::services::state::{AppState, BusyGuard};
use resume_assistant_frontend::services::transcript::{MessageRole, GREETING};
use resume_assistant_frontend::services::view_mode::ViewMode;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn with_state(test: impl FnOnce(AppState)) {
    let owner = Owner::new();
    owner.with(|| test(AppState::new(ClientConfig::default())));
}

fn last_entry(state: &AppState) -> (MessageRole, String) {
    state.transcript.with_untracked(|t| {
        let entry = t.entries().last().expect("transcript is never empty");
        (entry.role, entry.text.clone())
    })
}

// ============================================================================
// BusyGuard Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_busy_guard_sets_and_clears_flag() {
    with_state(|state| {
        let guard = BusyGuard::acquire(state.is_compiling);
        assert!(guard.is_some());
        assert!(state.is_compiling.get_untracked());

        drop(guard);
        assert!(!state.is_compiling.get_untracked());
    });
}

#[wasm_bindgen_test]
fn test_busy_guard_is_exclusive() {
    with_state(|state| {
        let _first = BusyGuard::acquire(state.is_generating).expect("flag starts clear");
        assert!(BusyGuard::acquire(state.is_generating).is_none());
        assert!(state.is_generating.get_untracked());
    });
}

// ============================================================================
// Initial State Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_initial_state() {
    with_state(|state| {
        assert_eq!(state.view_mode.get_untracked(), ViewMode::Split);
        assert!(!state.is_generating.get_untracked());
        assert!(!state.is_compiling.get_untracked());
        assert_eq!(last_entry(&state), (MessageRole::Ai, GREETING.to_string()));
        assert_eq!(state.transcript.with_untracked(|t| t.message_count()), 0);
    });
}

// ============================================================================
// View Mode Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_set_view_mode_announces_change() {
    with_state(|state| {
        state.set_view_mode(ViewMode::PdfOnly);

        assert_eq!(state.view_mode.get_untracked(), ViewMode::PdfOnly);
        assert_eq!(
            last_entry(&state),
            (MessageRole::System, ViewMode::PdfOnly.announcement().to_string())
        );
        assert!(!state.view_mode.get_untracked().chat_panel().is_visible());
    });
}

#[wasm_bindgen_test]
fn test_view_shortcut_switches_mode() {
    with_state(|state| {
        let shortcut = Shortcut::from_key(true, "2").expect("Ctrl+2 is bound");
        state.run_shortcut(shortcut);
        assert_eq!(state.view_mode.get_untracked(), ViewMode::ChatOnly);
    });
}

// ============================================================================
// Chat Submission Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_whitespace_submission_is_ignored() {
    with_state(|state| {
        state.input.set("   \n ".to_string());
        state.send_message();

        assert_eq!(state.transcript.with_untracked(|t| t.len()), 1);
        assert!(!state.is_generating.get_untracked());
        assert_eq!(state.input.get_untracked(), "   \n ");
    });
}

#[wasm_bindgen_test]
fn test_submission_while_generating_is_dropped() {
    with_state(|state| {
        state.is_generating.set(true);
        state.input.set("Add my Python skills".to_string());
        state.send_message();

        assert_eq!(state.transcript.with_untracked(|t| t.len()), 1);
        assert_eq!(state.input.get_untracked(), "Add my Python skills");
        assert!(state.is_generating.get_untracked());
    });
}

#[wasm_bindgen_test]
fn test_apply_template_fills_input() {
    with_state(|state| {
        state.apply_template(PromptTemplate::ALL[0]);
        assert_eq!(state.input.get_untracked(), PromptTemplate::ALL[0].text());
        assert!(!state.is_generating.get_untracked());
    });
}

// ============================================================================
// Compile Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_compile_rejected_while_running() {
    with_state(|state| {
        state.is_compiling.set(true);
        state.compile_resume(CompileSource::Refresh);

        let (role, text) = last_entry(&state);
        assert_eq!(role, MessageRole::System);
        assert!(text.contains("already running"));
        assert!(state.is_compiling.get_untracked());
    });
}
