//! Global Ctrl/Cmd keyboard shortcuts.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::compile::CompileSource;
use super::state::AppState;
use super::view_mode::ViewMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    View(ViewMode),
    NewConversation,
    ShowHistory,
    Compile,
    DebugMemory,
}

impl Shortcut {
    /// Map a key pressed with Ctrl (or Cmd) held. Letters match either case.
    pub fn from_key(modifier: bool, key: &str) -> Option<Self> {
        if !modifier {
            return None;
        }
        let shortcut = match key.to_ascii_lowercase().as_str() {
            "1" => Shortcut::View(ViewMode::Split),
            "2" => Shortcut::View(ViewMode::ChatOnly),
            "3" => Shortcut::View(ViewMode::PdfOnly),
            "n" => Shortcut::NewConversation,
            "h" => Shortcut::ShowHistory,
            "g" => Shortcut::Compile,
            "d" => Shortcut::DebugMemory,
            _ => return None,
        };
        Some(shortcut)
    }

    /// Key hint shown in tooltips.
    pub fn hint(&self) -> &'static str {
        match self {
            Shortcut::View(ViewMode::Split) => "Ctrl+1",
            Shortcut::View(ViewMode::ChatOnly) => "Ctrl+2",
            Shortcut::View(ViewMode::PdfOnly) => "Ctrl+3",
            Shortcut::NewConversation => "Ctrl+N",
            Shortcut::ShowHistory => "Ctrl+H",
            Shortcut::Compile => "Ctrl+G",
            Shortcut::DebugMemory => "Ctrl+D",
        }
    }
}

impl AppState {
    pub fn run_shortcut(&self, shortcut: Shortcut) {
        tracing::debug!(?shortcut, "Keyboard shortcut");
        match shortcut {
            Shortcut::View(mode) => self.set_view_mode(mode),
            Shortcut::NewConversation => self.new_conversation(),
            Shortcut::ShowHistory => self.show_history_window(),
            Shortcut::Compile => self.compile_resume(CompileSource::Generate),
            Shortcut::DebugMemory => self.debug_memory(),
        }
    }
}

/// Listen for shortcuts on `window` for the lifetime of the page.
pub fn install_shortcut_listener(state: AppState) {
    let handle_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if let Some(shortcut) = Shortcut::from_key(e.ctrl_key() || e.meta_key(), &e.key()) {
            e.prevent_default();
            state.run_shortcut(shortcut);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("keydown", handle_keydown.as_ref().unchecked_ref());
    }

    // Keep the closure alive
    handle_keydown.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_shortcuts() {
        assert_eq!(Shortcut::from_key(true, "1"), Some(Shortcut::View(ViewMode::Split)));
        assert_eq!(Shortcut::from_key(true, "2"), Some(Shortcut::View(ViewMode::ChatOnly)));
        assert_eq!(Shortcut::from_key(true, "3"), Some(Shortcut::View(ViewMode::PdfOnly)));
    }

    #[test]
    fn test_action_shortcuts_any_case() {
        assert_eq!(Shortcut::from_key(true, "n"), Some(Shortcut::NewConversation));
        assert_eq!(Shortcut::from_key(true, "H"), Some(Shortcut::ShowHistory));
        assert_eq!(Shortcut::from_key(true, "g"), Some(Shortcut::Compile));
        assert_eq!(Shortcut::from_key(true, "D"), Some(Shortcut::DebugMemory));
    }

    #[test]
    fn test_requires_modifier() {
        assert_eq!(Shortcut::from_key(false, "1"), None);
        assert_eq!(Shortcut::from_key(false, "n"), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(Shortcut::from_key(true, "k"), None);
        assert_eq!(Shortcut::from_key(true, "Enter"), None);
        assert_eq!(Shortcut::from_key(true, "4"), None);
    }
}
