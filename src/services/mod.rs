pub mod browser;
pub mod chat_controller;
pub mod compile;
pub mod diagnostics;
pub mod history;
pub mod pdf_resolver;
pub mod sanitize;
pub mod session;
pub mod shortcuts;
pub mod state;
pub mod transcript;
pub mod view_mode;
