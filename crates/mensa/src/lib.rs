//! Mensa - a deterministic puzzle engine.
//!
//! Every coordinate `(test_id, question_idx)` with `test_id ∈ [1, 1000]` and
//! `question_idx ∈ [1, 100]` maps to exactly one question in one of nine
//! algorithmic domains. Two independent components work on that space:
//!
//! - the **synthesizer** ([`synth`]) derives rule parameters and renders a
//!   prompt with one concealed value;
//! - the **oracle** ([`oracle`]) derives the same parameters with its own
//!   code and evaluates the concealed value in closed form.
//!
//! Neither calls the other, and neither keeps state. There is no randomness
//! and nothing is stored: both are pure functions of the two integers.
//!
//! # Domains
//!
//! | Questions | Domain | Answer |
//! |-----------|--------|--------|
//! | 1–15 | numeric sequences | integer |
//! | 16–25 | nested logic | TRUE / FALSE |
//! | 26–35 | dual arrow cycles | arrow pair |
//! | 36–45 | letter analogies | letter |
//! | 46–55 | layered word problems | integer |
//! | 56–70 | Raven-style matrices | figure |
//! | 71–80 | base conversion | integer |
//! | 81–90 | next-figure counts | count pair |
//! | 91–100 | self-referential counts | integer |
//!
//! # Example
//!
//! ```
//! use mensa::{generate_question, solve_question, Answer, Domain};
//!
//! let q = generate_question(1, 95).unwrap();
//! assert_eq!(q.domain, Domain::SelfReferential);
//! assert!(q.prompt.contains("How many such question numbers are there?"));
//!
//! assert_eq!(solve_question(1, 95).unwrap(), Answer::Integer(28));
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for questions, answers and rule parameters.

#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs, clippy::missing_errors_doc)]

mod core;
pub mod error;
pub mod model;
pub mod oracle;
pub mod synth;

pub use crate::core::arith;
pub use crate::core::constants;
pub use crate::core::coordinate;
pub use crate::core::domain;

pub use crate::core::constants::{COORDINATE_COUNT, DOMAIN_COUNT, NUM_TESTS, QUESTIONS_PER_TEST};
pub use crate::core::coordinate::Coordinate;
pub use crate::core::domain::Domain;
pub use error::{Field, OutOfRangeError, Result};
pub use model::params::{
    ArrowParams, BaseParams, CountParams, LetterParams, LogicParams, MatrixParams, SequenceParams,
    ShapeParams, WordParams,
};
pub use model::vocab::{
    CountGlyphA, CountGlyphB, CountMode, Figure, Fill, LogicForm, Orientation, PrimaryArrow,
    SecondaryArrow, Shape,
};
pub use model::{Answer, Question, RuleParameters};

/// Generates the question at `(test_id, question_idx)`.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]` or
/// `question_idx ∉ [1, 100]`.
pub fn generate_question(test_id: u32, question_idx: u32) -> Result<Question> {
    let coordinate = Coordinate::new(test_id, question_idx)?;
    let (domain, local_idx) = coordinate.route();
    synth::synthesize(domain, test_id, local_idx)
}

/// Generates all 100 questions of a test, in question order.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]`.
///
/// # Example
///
/// ```
/// let test = mensa::generate_test(3).unwrap();
/// assert_eq!(test.len(), 100);
/// assert_eq!(test[99].question_idx, 100);
/// ```
pub fn generate_test(test_id: u32) -> Result<Vec<Question>> {
    Coordinate::test(test_id)?
        .map(|c| generate_question(c.test_id(), c.question_idx()))
        .collect()
}

/// Solves the question at `(test_id, question_idx)`.
///
/// The answer is computed from the coordinate alone; no question is
/// generated or parsed.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]` or
/// `question_idx ∉ [1, 100]`.
pub fn solve_question(test_id: u32, question_idx: u32) -> Result<Answer> {
    oracle::solve(test_id, question_idx)
}

/// Lazily yields every test as `(test_id, questions)`, in test order.
pub fn iter_all_tests() -> impl Iterator<Item = (u32, Vec<Question>)> {
    (1..=NUM_TESTS).filter_map(|test_id| generate_test(test_id).ok().map(|qs| (test_id, qs)))
}
