//! Design System Components for Leptos
//!
//! Small reusable pieces shared by the chat and preview panels.

mod button;
mod loading;

pub use button::{Button, ButtonVariant};
pub use loading::{LoadingSpinner, TypingIndicator, TYPING_LABEL};
