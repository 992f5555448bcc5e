//! Self-referential counts over the test's own question numbers.
//!
//! Asks how many ids in `[1, 100]` satisfy a digit-containment predicate,
//! optionally combined with evenness, primality or divisibility by 9.

use super::Slot;
use crate::core::constants::QUESTIONS_PER_TEST;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::CountParams;
use crate::model::vocab::CountMode;
use crate::model::{Question, RuleParameters};

/// Synthesizes a self-referential question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::SelfReferential, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let params = CountParams {
        digit: ((t + l) % 10) as u32,
        mode: CountMode::from_index(t + 2 * l),
        first_id: 1,
        last_id: QUESTIONS_PER_TEST,
    };

    let prompt = format!(
        "{header}In this test, questions are numbered from {first} to {last}.\n\
         Consider those question numbers that {condition}.\n\n\
         How many such question numbers are there?",
        header = slot.header(),
        first = params.first_id,
        last = params.last_id,
        condition = params.mode.describe(params.digit),
    );
    Ok(slot.finish(prompt, RuleParameters::SelfReferential(params)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_mode_for_question_95() {
        let q = synthesize(1, 5).unwrap();
        assert_eq!(q.question_idx, 95);
        assert_eq!(
            q.meta,
            RuleParameters::SelfReferential(CountParams {
                digit: 6,
                mode: CountMode::DigitOrNine,
                first_id: 1,
                last_id: 100,
            })
        );
        assert!(q
            .prompt
            .contains("contain the digit 6 at least once OR are divisible by 9."));
    }
}
