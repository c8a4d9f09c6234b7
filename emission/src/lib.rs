//! Block-reward emission schedule.
//!
//! Converts a chain height into the reward paid for that block under a
//! fixed logarithmic decay curve with a floor. The computation is
//! deterministic and stateless: every validator must independently compute
//! the same reward for the same height, so nothing here reads a clock,
//! storage, or randomness.

pub mod error;
pub mod schedule;

pub use error::EmissionError;
pub use schedule::{EmissionSchedule, EmissionScheduleSummary, YearlyEmission};
