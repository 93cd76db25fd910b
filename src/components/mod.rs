pub mod chat;
pub mod design_system;
pub mod pdf_panel;
pub mod session_toolbar;
