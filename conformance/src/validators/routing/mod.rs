//! Router validators (partition table, coordinate bounds).
//!
//! These depend only on the question index space, not on any test.

pub mod partition;
pub mod range;
