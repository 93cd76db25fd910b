//! Resume preview panel with compile controls and the PDF viewer cascade.

use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROWS_CLOCKWISE, ARROW_SQUARE_OUT, DOWNLOAD_SIMPLE, FILE_TEXT};

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::compile::CompileSource;
use crate::services::pdf_resolver::{PdfDisplayState, NATIVE_EMBED_ID};
use crate::services::shortcuts::Shortcut;
use crate::services::state::use_app_state;

/// Which element hosts the document. Changes only when the element itself
/// must be replaced, so verification does not reload the embed.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Viewer {
    Placeholder,
    Native(String),
    Frame(String),
}

fn viewer_for(state: PdfDisplayState, url: Option<&str>) -> Viewer {
    match (state, url) {
        (PdfDisplayState::FallbackActive, Some(url)) => Viewer::Frame(url.to_string()),
        (
            PdfDisplayState::NativePending
            | PdfDisplayState::NativeOk
            | PdfDisplayState::NativeFailed,
            Some(url),
        ) => Viewer::Native(url.to_string()),
        _ => Viewer::Placeholder,
    }
}

#[component]
fn FallbackPanel() -> impl IntoView {
    let state = use_app_state();
    let pdf_url = state.config().pdf_url();

    view! {
        <div
            id="pdf-fallback"
            class="absolute inset-0 flex flex-col items-center justify-center gap-3 bg-zinc-900/95 text-center p-6"
        >
            <p class="text-sm text-zinc-300">"PDF preview could not be displayed in this browser."</p>
            <div class="flex gap-2">
                <a
                    href=pdf_url
                    target="_blank"
                    rel="noopener"
                    class="px-3 py-1.5 rounded text-sm bg-blue-600 hover:bg-blue-500 text-white"
                >
                    "Open PDF in New Tab"
                </a>
                <Button variant=ButtonVariant::Outline on_click=move |_| state.use_frame_viewer()>
                    "Try Alternative Method"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn PdfPanel() -> impl IntoView {
    let state = use_app_state();

    let viewer = Memo::new(move |_| state.pdf.with(|pdf| viewer_for(pdf.state(), pdf.url())));
    let fallback_visible = move || state.pdf.with(|pdf| pdf.fallback_visible());
    let is_compiling = Signal::derive(move || state.is_compiling.get());

    let compile_title = format!("Regenerate resume PDF ({})", Shortcut::Compile.hint());

    view! {
        <section
            class=move || format!("{} h-full", state.view_mode.get().pdf_panel().class())
            aria-label="Resume preview"
        >
            <header class="flex items-center justify-between gap-2 px-4 py-3 border-b border-zinc-800">
                <h2 class="text-base font-semibold text-white">"Resume Preview"</h2>
                <div class="flex items-center gap-1">
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=move |_| state.compile_resume(CompileSource::Refresh)
                        disabled=is_compiling
                        title=compile_title
                    >
                        <Icon icon=ARROWS_CLOCKWISE size="14px" />
                        {move || if state.is_compiling.get() { "Compiling..." } else { "Refresh" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=move |_| state.compile_resume(CompileSource::Generate)
                        loading=is_compiling
                        title="Generate PDF from the current resume source"
                    >
                        {move || if state.is_compiling.get() { "Compiling..." } else { "Generate PDF" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=move |_| state.open_pdf_in_new_tab()
                        title="Open in new tab"
                    >
                        <Icon icon=ARROW_SQUARE_OUT size="14px" />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=move |_| state.download_pdf()
                        title="Download PDF"
                    >
                        <Icon icon=DOWNLOAD_SIMPLE size="14px" />
                    </Button>
                </div>
            </header>

            <div id="pdf-container" class="relative flex-1 min-h-0 bg-zinc-950">
                {move || match viewer.get() {
                    Viewer::Placeholder => view! {
                        <div class="flex h-full flex-col items-center justify-center gap-2 text-zinc-500">
                            <Icon icon=FILE_TEXT size="32px" />
                            <p class="text-sm">"Loading resume preview..."</p>
                        </div>
                    }
                    .into_any(),
                    Viewer::Native(url) => view! {
                        <embed
                            id=NATIVE_EMBED_ID
                            src=url
                            type="application/pdf"
                            class="w-full h-full"
                        />
                    }
                    .into_any(),
                    Viewer::Frame(url) => {
                        let link = url.clone();
                        view! {
                            <div class="flex h-full flex-col">
                                <iframe src=url title="Resume PDF" class="w-full flex-1 border-0"></iframe>
                                <p class="px-3 py-1 text-xs text-zinc-500">
                                    "Can't see the PDF? "
                                    <a href=link target="_blank" rel="noopener" class="text-blue-400 underline">
                                        "Click here to open it"
                                    </a>
                                </p>
                            </div>
                        }
                        .into_any()
                    }
                }}
                <Show when=fallback_visible>
                    <FallbackPanel />
                </Show>
            </div>
        </section>
    }
}
