//! Chat panel: session banner, transcript, prompt templates and composer.

mod chat_message;

pub use chat_message::ChatMessage;

use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant, TypingIndicator};
use crate::components::session_toolbar::SessionToolbar;
use crate::services::chat_controller::{PromptTemplate, MESSAGE_INPUT_ID};
use crate::services::shortcuts::Shortcut;
use crate::services::state::use_app_state;
use crate::services::view_mode::ViewMode;

#[component]
pub fn ViewModeSwitch() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="flex items-center gap-1 bg-zinc-800 rounded p-0.5" role="group" aria-label="View mode">
            {ViewMode::ALL
                .into_iter()
                .map(|mode| {
                    let class = move || {
                        if state.view_mode.get() == mode {
                            "px-2 py-1 rounded text-xs bg-blue-600 text-white"
                        } else {
                            "px-2 py-1 rounded text-xs text-zinc-400 hover:text-white"
                        }
                    };
                    view! {
                        <button
                            class=class
                            title=format!("{} ({})", mode.label(), Shortcut::View(mode).hint())
                            aria-pressed=move || (state.view_mode.get() == mode).to_string()
                            on:click=move |_| state.set_view_mode(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = use_app_state();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        state.transcript.track();
        state.is_generating.track();
        request_animation_frame(move || {
            if let Some(container) = messages_ref.get_untracked() {
                container.set_scroll_top(container.scroll_height());
            }
        });
    });

    let on_keydown = move |evt: ev::KeyboardEvent| {
        if evt.key() == "Enter" && !evt.shift_key() {
            evt.prevent_default();
            state.send_message();
        }
    };

    let is_generating = Signal::derive(move || state.is_generating.get());

    view! {
        <section
            class=move || format!("{} h-full border-r border-zinc-800", state.view_mode.get().chat_panel().class())
            aria-label="Chat"
        >
            <header class="flex items-center justify-between gap-2 px-4 py-3 border-b border-zinc-800">
                <div class="min-w-0">
                    <h1 class="text-base font-semibold text-white">"Resume Assistant"</h1>
                    <p id="session-info" class="text-xs text-zinc-400 truncate">
                        {move || state.session.with(|session| session.banner())}
                    </p>
                </div>
                <ViewModeSwitch />
            </header>

            <SessionToolbar />

            <div
                id="chat-messages"
                node_ref=messages_ref
                class="flex-1 overflow-y-auto px-4 py-3 space-y-3"
                aria-live="polite"
            >
                <For
                    each=move || state.transcript.with(|t| t.entries().to_vec())
                    key=|entry| entry.id
                    children=|entry| view! { <ChatMessage entry /> }
                />
                <Show when=move || state.is_generating.get()>
                    <TypingIndicator />
                </Show>
            </div>

            <div class="flex flex-wrap gap-1 px-4 pt-2">
                {PromptTemplate::ALL
                    .into_iter()
                    .map(|template| {
                        view! {
                            <button
                                class="px-2 py-1 rounded-full text-xs bg-zinc-800 text-zinc-300 hover:bg-zinc-700"
                                on:click=move |_| state.apply_template(template)
                            >
                                {template.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex items-end gap-2 px-4 py-3">
                <textarea
                    id=MESSAGE_INPUT_ID
                    rows="2"
                    class="flex-1 resize-none rounded bg-zinc-900 border border-zinc-700 px-3 py-2 text-sm text-zinc-100 focus:outline-none focus:border-blue-500"
                    placeholder="Tell me about your experience..."
                    prop:value=move || state.input.get()
                    on:input=move |evt| state.input.set(event_target_value(&evt))
                    on:keydown=on_keydown
                ></textarea>
                <Button
                    variant=ButtonVariant::Primary
                    on_click=move |_| state.send_message()
                    disabled=is_generating
                    title="Send (Enter)"
                >
                    {move || if state.is_generating.get() { "Sending..." } else { "Send" }}
                </Button>
            </div>
        </section>
    }
}
