//! Coordinate-space constants.
//!
//! A test is a fixed block of questions; the engine covers a fixed number of
//! tests. Every other bound in the crate is derived from these two.

/// Number of tests in the coordinate space (`test_id ∈ [1, NUM_TESTS]`).
pub const NUM_TESTS: u32 = 1000;

/// Questions per test (`question_idx ∈ [1, QUESTIONS_PER_TEST]`).
pub const QUESTIONS_PER_TEST: u32 = 100;

/// Number of puzzle domains.
pub const DOMAIN_COUNT: usize = 9;

/// Total number of coordinates (`NUM_TESTS × QUESTIONS_PER_TEST`).
pub const COORDINATE_COUNT: usize = (NUM_TESTS * QUESTIONS_PER_TEST) as usize;
