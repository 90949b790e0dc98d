//! clarifier-cli
//!
//! Command handlers and configuration for the `clarifier` binary. Handlers
//! write to any `io::Write` so they can be driven from tests.

pub mod commands;
pub mod config;
