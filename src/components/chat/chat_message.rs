use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::services::transcript::{MessageRole, TranscriptEntry};

fn container_class(role: MessageRole, is_error: bool) -> &'static str {
    match (role, is_error) {
        (_, true) => "bg-red-900/40 p-3 rounded-lg max-w-3xl border border-red-800 text-sm",
        (MessageRole::User, _) => {
            "bg-blue-900/40 p-3 rounded-lg max-w-3xl ml-auto border border-blue-800"
        }
        (MessageRole::Ai, _) => {
            "bg-[var(--bg-surface)] p-3 rounded-lg max-w-3xl group relative border border-[var(--border-subtle)]"
        }
        (MessageRole::System, _) => {
            "bg-zinc-800/60 px-3 py-2 rounded-lg max-w-3xl mx-auto border border-zinc-700 text-xs text-zinc-300"
        }
    }
}

/// One transcript message. The body is the sanitized HTML rendered when the
/// entry was appended.
#[component]
pub fn ChatMessage(entry: TranscriptEntry) -> impl IntoView {
    let TranscriptEntry {
        role,
        text,
        html,
        is_error,
        ..
    } = entry;

    let copy_to_clipboard = move |_: ev::MouseEvent| {
        let text = text.clone();
        spawn_local(async move {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
            }
        });
    };

    let actions = (role == MessageRole::Ai && !is_error).then(|| {
        view! {
            <div class="flex items-center gap-1 mt-2 pt-2 border-t border-zinc-700/50 opacity-0 group-hover:opacity-100 transition-opacity">
                <button
                    class="p-1.5 rounded hover:bg-zinc-700 text-zinc-400 hover:text-blue-400 transition-colors"
                    title="Copy"
                    on:click=copy_to_clipboard
                >
                    <svg
                        class="w-4 h-4"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                    >
                        <path d="M8 16H6a2 2 0 01-2-2V6a2 2 0 012-2h8a2 2 0 012 2v2m-6 12h8a2 2 0 002-2v-8a2 2 0 00-2-2h-8a2 2 0 00-2 2v8a2 2 0 002 2z" />
                    </svg>
                </button>
            </div>
        }
    });

    view! {
        <div class=format!("message {} {}", role.class(), container_class(role, is_error))>
            <div
                class="min-w-0 break-words prose prose-invert max-w-none text-sm leading-relaxed"
                inner_html=html
            ></div>
            {actions}
        </div>
    }
}
