//! PDF preview fallback cascade.
//!
//! The native `<embed>` viewer gives no reliable load or error event, so
//! success is judged after a fixed delay by measuring the element. A zero
//! sized embed counts as failed and exposes the fallback panel, which offers
//! an open-in-new-tab link and a switch to a generic `<iframe>`.

use leptos::prelude::*;

use super::browser;
use super::state::{defer, AppState};

/// DOM id of the native embed measured during verification.
pub const NATIVE_EMBED_ID: &str = "pdf-native-embed";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PdfDisplayState {
    #[default]
    NotStarted,
    NativePending,
    NativeOk,
    NativeFailed,
    FallbackActive,
}

/// Identifies one load attempt. Deferred checks carry it so a check that
/// belongs to an older attempt can be recognised and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Rendered,
    Failed,
    /// The embed is not in the document any more.
    Absent,
    /// A newer attempt superseded this one.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfResolver {
    state: PdfDisplayState,
    url: Option<String>,
    generation: u64,
}

impl PdfResolver {
    pub fn state(&self) -> PdfDisplayState {
        self.state
    }

    /// Cache-busted URL of the current attempt.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn fallback_visible(&self) -> bool {
        self.state == PdfDisplayState::NativeFailed
    }

    pub fn is_current(&self, token: LoadToken) -> bool {
        token.0 == self.generation
    }

    /// Start (or restart) with the native viewer.
    pub fn begin_native(&mut self, pdf_url: &str, now_ms: u64) -> LoadToken {
        self.start(PdfDisplayState::NativePending, pdf_url, now_ms)
    }

    /// Switch to the generic document frame.
    pub fn activate_frame(&mut self, pdf_url: &str, now_ms: u64) -> LoadToken {
        self.start(PdfDisplayState::FallbackActive, pdf_url, now_ms)
    }

    /// Judge a pending native attempt from the embed's measured size.
    pub fn verify(
        &mut self,
        token: LoadToken,
        measured: Option<(f64, f64)>,
        min_rendered_px: f64,
    ) -> Verification {
        if !self.is_current(token) || self.state != PdfDisplayState::NativePending {
            return Verification::Stale;
        }
        let Some((width, height)) = measured else {
            return Verification::Absent;
        };
        if width <= min_rendered_px || height <= min_rendered_px {
            self.state = PdfDisplayState::NativeFailed;
            Verification::Failed
        } else {
            self.state = PdfDisplayState::NativeOk;
            Verification::Rendered
        }
    }

    fn start(&mut self, state: PdfDisplayState, pdf_url: &str, now_ms: u64) -> LoadToken {
        self.generation += 1;
        self.state = state;
        self.url = Some(cache_busted(pdf_url, now_ms));
        LoadToken(self.generation)
    }
}

/// Append a timestamp query parameter so the browser refetches the file.
pub fn cache_busted(url: &str, now_ms: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}t={now_ms}")
}

impl AppState {
    /// Show the resume with the native viewer and schedule the render check.
    pub fn load_pdf(&self) {
        let config = self.config();
        let pdf_url = config.pdf_url();
        let Some(token) = self
            .pdf
            .try_update(|pdf| pdf.begin_native(&pdf_url, browser::now_ms()))
        else {
            return;
        };
        tracing::debug!(url = %pdf_url, "Loading PDF preview with native viewer");

        let state = *self;
        defer(config.timing.pdf_check_delay_ms, move || {
            state.verify_pdf(token);
        });
    }

    fn verify_pdf(&self, token: LoadToken) {
        let min_rendered_px = self.config().pdf.min_rendered_px;
        let measured = browser::element_size(NATIVE_EMBED_ID);
        let Some(verification) = self
            .pdf
            .try_update(|pdf| pdf.verify(token, measured, min_rendered_px))
        else {
            return;
        };

        match verification {
            Verification::Rendered => {
                tracing::debug!("PDF rendered with native viewer");
                self.push_system("✅ Resume loaded successfully!");
            }
            Verification::Failed => {
                tracing::info!(?measured, "Native PDF viewer did not render, showing fallback");
                self.push_system(
                    "📄 The built-in PDF viewer didn't render the resume. Use the options in the preview pane to view it another way.",
                );
            }
            Verification::Absent | Verification::Stale => {
                tracing::debug!(?verification, "Skipping PDF render check");
            }
        }
    }

    /// Replace the native viewer with a generic document frame.
    pub fn use_frame_viewer(&self) {
        let pdf_url = self.config().pdf_url();
        let _ = self
            .pdf
            .try_update(|pdf| pdf.activate_frame(&pdf_url, browser::now_ms()));
        self.push_system("🔄 Trying alternative PDF display method...");
    }

    pub fn open_pdf_in_new_tab(&self) {
        match browser::open_in_new_tab(&self.config().pdf_url()) {
            Ok(()) => self.push_system("👁️ Opened PDF in new tab!"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open PDF tab");
                self.push_error("❌ Could not open the PDF in a new tab.");
            }
        }
    }

    pub fn download_pdf(&self) {
        let config = self.config();
        match browser::download_url(&config.download_url(), &config.api.download_file_name) {
            Ok(()) => self.push_system("📥 Resume downloaded!"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to start PDF download");
                self.push_error("❌ Could not download the resume.");
            }
        }
    }
}
