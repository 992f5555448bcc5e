//! Question synthesis.
//!
//! One module per domain, each exposing `synthesize(test_id, local_idx)`.
//! A synthesizer derives its rule parameters from the coordinate, renders the
//! prompt and publishes the parameters as `meta`. It never computes an
//! [`Answer`](crate::Answer); the concealed value is implicit in the
//! parameters.

pub mod arrows;
pub mod base;
pub mod letters;
pub mod logic;
pub mod matrix;
pub mod numeric;
pub mod selfref;
pub mod shapes;
pub mod word;

use crate::core::constants::NUM_TESTS;
use crate::core::domain::Domain;
use crate::error::{Field, OutOfRangeError, Result};
use crate::model::Question;

/// Synthesizes the question at `local_idx` within `domain`'s block.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]` or `local_idx` lies
/// outside the domain's block.
pub fn synthesize(domain: Domain, test_id: u32, local_idx: u32) -> Result<Question> {
    match domain {
        Domain::NumericSequence => numeric::synthesize(test_id, local_idx),
        Domain::NestedLogic => logic::synthesize(test_id, local_idx),
        Domain::ArrowCycle => arrows::synthesize(test_id, local_idx),
        Domain::LetterAnalogy => letters::synthesize(test_id, local_idx),
        Domain::WordArithmetic => word::synthesize(test_id, local_idx),
        Domain::RavenMatrix => matrix::synthesize(test_id, local_idx),
        Domain::BaseConversion => base::synthesize(test_id, local_idx),
        Domain::ShapeSequence => shapes::synthesize(test_id, local_idx),
        Domain::SelfReferential => selfref::synthesize(test_id, local_idx),
    }
}

/// Validated coordinate of a question being synthesized.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    pub(crate) domain: Domain,
    pub(crate) test_id: u32,
    pub(crate) question_idx: u32,
    pub(crate) local_idx: u32,
}

impl Slot {
    /// Validates both indices for `domain`.
    pub(crate) fn new(domain: Domain, test_id: u32, local_idx: u32) -> Result<Self> {
        OutOfRangeError::check(Field::TestId, test_id, 1, NUM_TESTS)?;
        let question_idx = domain.question_idx(local_idx)?;
        Ok(Self {
            domain,
            test_id,
            question_idx,
            local_idx,
        })
    }

    /// `test_id` widened for signed arithmetic.
    pub(crate) fn t(&self) -> i64 {
        i64::from(self.test_id)
    }

    /// `local_idx` widened for signed arithmetic.
    pub(crate) fn l(&self) -> i64 {
        i64::from(self.local_idx)
    }

    /// First line of every prompt.
    pub(crate) fn header(&self) -> String {
        format!(
            "Test {}, Q{} ({}):\n",
            self.test_id,
            self.question_idx,
            self.domain.name()
        )
    }

    /// Assembles the final question.
    pub(crate) fn finish(self, prompt: String, meta: crate::RuleParameters) -> Question {
        Question {
            test_id: self.test_id,
            question_idx: self.question_idx,
            local_idx: self.local_idx,
            domain: self.domain,
            prompt,
            meta,
        }
    }
}
