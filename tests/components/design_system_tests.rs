//! Design System Component Tests
//!
//! Mounts the shared pieces and inspects the rendered DOM.

use leptos::prelude::*;
use resume_assistant_frontend::components::design_system::{
    Button, ButtonVariant, TypingIndicator, TYPING_LABEL,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn rendered(selector: &str) -> web_sys::Element {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .unwrap_or_else(|| panic!("nothing rendered for {selector}"))
}

#[wasm_bindgen_test]
fn test_typing_indicator_shows_label() {
    leptos::mount::mount_to_body(|| {
        view! {
            <div id="typing-host">
                <TypingIndicator />
            </div>
        }
    });

    let indicator = rendered("#typing-host .typing-indicator");
    assert_eq!(indicator.get_attribute("role").as_deref(), Some("status"));
    assert!(indicator
        .text_content()
        .unwrap_or_default()
        .contains(TYPING_LABEL));
    assert_eq!(
        indicator.query_selector_all(".animate-bounce").map(|l| l.length()).ok(),
        Some(3)
    );
}

#[wasm_bindgen_test]
fn test_loading_button_is_disabled_with_spinner() {
    leptos::mount::mount_to_body(|| {
        view! {
            <div id="loading-button-host">
                <Button variant=ButtonVariant::Primary on_click=|_| {} loading=true>
                    "Compiling..."
                </Button>
            </div>
        }
    });

    let button = rendered("#loading-button-host button");
    assert!(button.has_attribute("disabled"));
    assert!(button.query_selector(".animate-spin").ok().flatten().is_some());
}

#[wasm_bindgen_test]
fn test_idle_button_has_no_spinner() {
    leptos::mount::mount_to_body(|| {
        view! {
            <div id="idle-button-host">
                <Button variant=ButtonVariant::Ghost on_click=|_| {}>
                    "Refresh"
                </Button>
            </div>
        }
    });

    let button = rendered("#idle-button-host button");
    assert!(!button.has_attribute("disabled"));
    assert!(button.query_selector(".animate-spin").ok().flatten().is_none());
}
