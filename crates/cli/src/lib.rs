//! CLI wiring for the `browser-smoke` binary.

pub mod cli;
pub mod logging;
pub mod output;
