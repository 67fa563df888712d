//! Skyreel CLI library.
//!
//! Command implementations live here so they can be tested; `main.rs` only
//! parses arguments and dispatches.

pub mod commands;
