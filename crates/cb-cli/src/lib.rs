//! Library components for the mods2cb CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
