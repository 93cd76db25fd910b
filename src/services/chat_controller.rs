use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::browser;
use super::compile::CompileSource;
use super::state::{defer, AppState, BusyGuard, DEFAULT_TITLE};
use super::transcript::MessageRole;
use crate::bindings::{self, ChatResponse};

/// DOM id of the chat input.
pub const MESSAGE_INPUT_ID: &str = "message-input";

/// Reply phrases meaning the backend already rebuilt the PDF.
pub const RELOAD_PHRASES: [&str; 2] = ["Resume updated and compiled successfully", "✅ Resume updated"];

/// Utterance keywords that suggest resume content changed.
pub const AUTO_COMPILE_KEYWORDS: [&str; 5] =
    ["experience", "education", "skill", "project", "certification"];

pub const AUTO_COMPILE_NOTICE: &str = "✅ Resume updated! Check the preview on the right.";

/// Trimmed utterance if a submission may go ahead.
pub fn accept_submission(input: &str, generating: bool) -> Option<String> {
    let message = input.trim();
    if message.is_empty() || generating {
        None
    } else {
        Some(message.to_string())
    }
}

/// Action scheduled after a successful reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    None,
    ReloadPdf,
    AutoCompile,
}

/// The phrase check wins over the keyword check.
pub fn plan_follow_up(
    reply: &str,
    utterance: &str,
    message_count: usize,
    min_messages: usize,
) -> FollowUp {
    if RELOAD_PHRASES.iter().any(|phrase| reply.contains(phrase)) {
        return FollowUp::ReloadPdf;
    }
    let utterance = utterance.to_lowercase();
    if message_count > min_messages
        && AUTO_COMPILE_KEYWORDS
            .iter()
            .any(|keyword| utterance.contains(keyword))
    {
        FollowUp::AutoCompile
    } else {
        FollowUp::None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    Failed(String),
    Reply {
        text: String,
        /// `(id, title)` when the backend reported the session.
        session: Option<(String, String)>,
    },
}

impl From<ChatResponse> for ChatOutcome {
    fn from(response: ChatResponse) -> Self {
        if response.is_error() {
            return ChatOutcome::Failed(response.error_text());
        }
        let Some(text) = response.response else {
            return ChatOutcome::Failed("The assistant returned an empty reply.".to_string());
        };
        let session = response.session_id.map(|id| {
            let title = response
                .conversation_title
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());
            (id, title)
        });
        ChatOutcome::Reply { text, session }
    }
}

/// Fill-in-the-blanks starters offered next to the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptTemplate {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 5] = [
        PromptTemplate::Education,
        PromptTemplate::Experience,
        PromptTemplate::Skills,
        PromptTemplate::Projects,
        PromptTemplate::Certifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PromptTemplate::Education => "🎓 Education",
            PromptTemplate::Experience => "💼 Experience",
            PromptTemplate::Skills => "🛠️ Skills",
            PromptTemplate::Projects => "🚀 Projects",
            PromptTemplate::Certifications => "📜 Certifications",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            PromptTemplate::Education => "I have a Bachelor's degree in [Your Major] from [University Name], graduated in [Year] with GPA [X.X]",
            PromptTemplate::Experience => "I worked as [Job Title] at [Company Name] from [Start Date] to [End Date], where I [key achievement]",
            PromptTemplate::Skills => "My technical skills include: [Programming Languages], [Tools/Software], [Frameworks]",
            PromptTemplate::Projects => "I worked on a project called [Project Name] where I [description of what you built/achieved]",
            PromptTemplate::Certifications => "I have certifications in [Certification Name] from [Issuing Organization] obtained in [Year]",
        }
    }
}

impl AppState {
    /// Send the current input. Empty input or an in-flight request makes
    /// this a no-op; nothing is queued.
    pub fn send_message(&self) {
        let generating = self.is_generating.get_untracked();
        let Some(message) = self
            .input
            .with_untracked(|input| accept_submission(input, generating))
        else {
            return;
        };
        let Some(generation) = BusyGuard::acquire(self.is_generating) else {
            return;
        };

        self.push_message(MessageRole::User, &message);
        self.input.set(String::new());

        let state = *self;
        spawn_local(async move {
            let config = state.config();
            let result = bindings::send_chat(&config, &message).await;
            drop(generation);

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "Chat request failed");
                    state.push_error(
                        "❌ Connection error. Please check your internet connection and try again.",
                    );
                    return;
                }
            };

            match ChatOutcome::from(response) {
                ChatOutcome::Failed(text) => {
                    tracing::warn!(%text, "Backend rejected chat message");
                    state.push_error(&format!("❌ Error: {text}"));
                }
                ChatOutcome::Reply { text, session } => {
                    state.push_message(MessageRole::Ai, &text);
                    if let Some((id, title)) = session {
                        let _ = state.session.try_update(|s| {
                            s.id = Some(id);
                            s.title = title;
                        });
                    }

                    let message_count = state
                        .transcript
                        .try_with_untracked(|t| t.message_count())
                        .unwrap_or_default();
                    let follow_up = plan_follow_up(
                        &text,
                        &message,
                        message_count,
                        config.chat.auto_compile_min_messages,
                    );
                    tracing::debug!(?follow_up, message_count, "Chat reply rendered");
                    state.schedule_follow_up(follow_up);
                }
            }
        });
    }

    /// Run the post-reply action after its configured delay.
    pub fn schedule_follow_up(&self, follow_up: FollowUp) {
        let timing = self.config().timing;
        let state = *self;
        match follow_up {
            FollowUp::ReloadPdf => {
                defer(timing.reply_reload_delay_ms, move || state.load_pdf());
            }
            FollowUp::AutoCompile => {
                defer(timing.auto_compile_delay_ms, move || {
                    state.compile_resume(CompileSource::Auto);
                    state.push_system(AUTO_COMPILE_NOTICE);
                });
            }
            FollowUp::None => {}
        }
    }

    pub fn apply_template(&self, template: PromptTemplate) {
        self.input.set(template.text().to_string());
        browser::focus_element(MESSAGE_INPUT_ID);
    }
}
