//! Component tests module

pub mod design_system_tests;
