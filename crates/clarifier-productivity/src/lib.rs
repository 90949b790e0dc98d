//! clarifier-productivity
//!
//! The clinician's daily productivity sheet: patient minutes, productivity
//! percentage and clock-out arithmetic. Pure data and arithmetic; persistence
//! is the caller's concern.

pub mod clock;
pub mod error;
pub mod metrics;
pub mod sheet;
