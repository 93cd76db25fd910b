use leptos::prelude::*;

/// Label read out while a reply is pending.
pub const TYPING_LABEL: &str = "AI is thinking...";

/// Inline spinner sized for a button label.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <span
            class="inline-block w-4 h-4 animate-spin rounded-full border-2 border-zinc-500 border-t-white"
            aria-hidden="true"
        ></span>
    }
}

/// Pending-reply row shown under the transcript.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="typing-indicator flex items-center gap-2 px-3 py-2" role="status">
            <span class="flex gap-1" aria-hidden="true">
                {[0, 150, 300]
                    .into_iter()
                    .map(|delay| {
                        view! {
                            <span
                                class="w-2 h-2 rounded-full bg-zinc-500 animate-bounce"
                                style=format!("animation-delay: {delay}ms")
                            ></span>
                        }
                    })
                    .collect_view()}
            </span>
            <span class="text-xs text-zinc-500">{TYPING_LABEL}</span>
        </div>
    }
}
