//! Command implementations for the devcerts CLI

pub mod check;
pub mod completions;
pub mod setup;
pub mod version;
