use leptos::prelude::*;
use phosphor_leptos::{Icon, BUG, CHATS, CLOCK_COUNTER_CLOCKWISE, EXPORT, PLUS, WRENCH};

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::shortcuts::Shortcut;
use crate::services::state::use_app_state;

/// Conversation management and diagnostics actions.
#[component]
pub fn SessionToolbar() -> impl IntoView {
    let state = use_app_state();
    let is_generating = Signal::derive(move || state.is_generating.get());

    view! {
        <nav class="flex flex-wrap items-center gap-1 px-4 py-2 border-b border-zinc-800" aria-label="Conversation">
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.new_conversation()
                disabled=is_generating
                title=format!("New conversation ({})", Shortcut::NewConversation.hint())
            >
                <Icon icon=PLUS size="14px" />
                "New"
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.pick_conversation()
                disabled=is_generating
                title="Switch or delete conversations"
            >
                <Icon icon=CHATS size="14px" />
                "Conversations"
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.show_history_window()
                title=format!("Show history ({})", Shortcut::ShowHistory.hint())
            >
                <Icon icon=CLOCK_COUNTER_CLOCKWISE size="14px" />
                "History"
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.export_conversation()
                title="Export conversation as text"
            >
                <Icon icon=EXPORT size="14px" />
                "Export"
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.debug_memory()
                title=format!("Debug memory ({})", Shortcut::DebugMemory.hint())
            >
                <Icon icon=BUG size="14px" />
            </Button>
            <Button
                variant=ButtonVariant::Ghost
                on_click=move |_| state.test_tool_integration()
                title="Test tool integration"
            >
                <Icon icon=WRENCH size="14px" />
            </Button>
        </nav>
    }
}
