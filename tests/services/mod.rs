//! Service tests module
//!
//! Controller tests using wasm-bindgen-test for browser testing.

pub mod app_state_tests;
pub mod bindings_tests;
pub mod controller_flow_tests;
