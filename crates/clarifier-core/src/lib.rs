//! clarifier-core
//!
//! Pure domain types for SLP therapy clarification orders: diagnosis code
//! groups, frequency directives, diet targets and billing codes.
//! No I/O. This is the shared vocabulary of the clarifier workspace.

pub mod error;
pub mod models;
pub mod tables;
