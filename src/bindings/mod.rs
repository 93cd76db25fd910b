pub mod chat;
pub mod conversation;
pub mod core;
pub mod resume;


pub use chat::*;
pub use conversation::*;
pub use core::*;
pub use resume::*;
