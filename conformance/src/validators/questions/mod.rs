//! Question validators, run over a range of test ids.
//!
//! Each walks every question of every selected test, so the cost scales with
//! the range width.

pub mod completeness;
pub mod determinism;
pub mod invariants;
pub mod inversion;
