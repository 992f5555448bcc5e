//! Core types and primitives.
//!
//! - [`constants`]: coordinate-space bounds
//! - [`domain::Domain`]: the nine domains and the question-index router
//! - [`coordinate::Coordinate`]: validated `(test_id, question_idx)` pairs
//! - [`arith`]: integer primitives shared by synthesizer and oracle

pub mod arith;
pub mod constants;
pub mod coordinate;
pub mod domain;
