//! Validators for the engine.
//!
//! Each validator module exposes a `validate` function that returns a
//! [`ConformanceReport`](crate::report::ConformanceReport).
//!
//! - [`routing`]: partition table and coordinate bounds.
//! - [`questions`]: inversion, determinism, completeness and domain
//!   invariants over a range of tests.

pub mod questions;
pub mod routing;
