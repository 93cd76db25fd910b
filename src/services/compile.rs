use wasm_bindgen_futures::spawn_local;

use super::state::{defer, AppState, BusyGuard};
use crate::bindings::{self, CompileResponse};

/// What asked for a compile. The generate control reports in its own words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileSource {
    /// The refresh control on the preview pane.
    Refresh,
    /// The generate control or its keyboard shortcut.
    Generate,
    /// Keyword detection after a chat reply.
    Auto,
}

impl CompileSource {
    fn intro(&self) -> &'static str {
        match self {
            CompileSource::Refresh | CompileSource::Auto => "🔄 Compiling resume from LaTeX...",
            CompileSource::Generate => "🎯 Compiling LaTeX from output.tex file...",
        }
    }

    fn refreshed(&self) -> &'static str {
        match self {
            CompileSource::Refresh | CompileSource::Auto => "📄 Resume PDF refreshed successfully!",
            CompileSource::Generate => "📄 Resume PDF updated and refreshed in preview!",
        }
    }

    fn source_only(&self) -> &'static str {
        match self {
            CompileSource::Refresh | CompileSource::Auto => {
                "📝 LaTeX file ready. Manual compilation required for PDF."
            }
            CompileSource::Generate => "📝 LaTeX file saved. Manual compilation required for PDF.",
        }
    }

    fn network_error(&self) -> &'static str {
        match self {
            CompileSource::Refresh | CompileSource::Auto => {
                "❌ Error compiling resume. Please check if LaTeX is installed."
            }
            CompileSource::Generate => {
                "❌ Error compiling resume. Please check if LaTeX is installed and output.tex exists."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileOutcome {
    /// A fresh PDF is at the static URL.
    PdfReady(String),
    /// LaTeX was written but no PDF was produced.
    SourceOnly(String),
    Failed(String),
}

impl From<&CompileResponse> for CompileOutcome {
    fn from(response: &CompileResponse) -> Self {
        match (response.success, response.pdf_generated) {
            (true, true) => CompileOutcome::PdfReady(response.message.clone()),
            (true, false) => CompileOutcome::SourceOnly(response.message.clone()),
            (false, _) => CompileOutcome::Failed(response.message.clone()),
        }
    }
}

impl AppState {
    /// Ask the backend to rebuild the PDF and refresh the preview.
    ///
    /// At most one compile runs at a time; a request made while one is in
    /// flight is rejected with a transcript notice.
    pub fn compile_resume(&self, source: CompileSource) {
        let Some(busy) = BusyGuard::acquire(self.is_compiling) else {
            tracing::debug!(?source, "Compile already running, rejecting request");
            self.push_system("⏳ A compilation is already running. Please wait for it to finish.");
            return;
        };
        self.push_system(source.intro());

        let state = *self;
        spawn_local(async move {
            let _busy = busy;
            let config = state.config();
            match bindings::compile_resume(&config).await {
                Ok(response) => match CompileOutcome::from(&response) {
                    CompileOutcome::PdfReady(message) => {
                        tracing::info!(?source, "Resume compiled");
                        state.push_system(&format!("✅ {message}"));
                        defer(config.timing.pdf_refresh_after_compile_ms, move || {
                            state.load_pdf();
                            state.push_system(source.refreshed());
                        });
                    }
                    CompileOutcome::SourceOnly(message) => {
                        state.push_system(&format!("✅ {message}"));
                        state.push_system(source.source_only());
                    }
                    CompileOutcome::Failed(message) => {
                        tracing::warn!(?source, %message, "Backend reported compile failure");
                        state.push_error(&format!("❌ {message}"));
                    }
                },
                Err(e) => {
                    tracing::error!(?source, error = %e, "Compile request failed");
                    state.push_error(source.network_error());
                }
            }
        });
    }
}
