use leptos::prelude::*;

use crate::components::chat::ChatPanel;
use crate::components::pdf_panel::PdfPanel;
use crate::config::ClientConfig;
use crate::services::shortcuts::install_shortcut_listener;
use crate::services::state::{defer, provide_app_state};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let initial_pdf_load_ms = config.timing.initial_pdf_load_ms;
    let state = provide_app_state(config);

    // Runs once after mount.
    Effect::new(move |_| {
        install_shortcut_listener(state);
        defer(initial_pdf_load_ms, move || state.load_pdf());
    });

    view! {
        <main id="main-container" class="flex h-screen w-screen bg-zinc-950 text-zinc-100 overflow-hidden">
            <ChatPanel />
            <PdfPanel />
        </main>
    }
}
