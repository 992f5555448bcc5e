//! Numeric sequences with one blank term.
//!
//! Term `k` (1-based) is `base + alpha·k + beta·k²` plus an offset chosen by
//! the parity of `k`. The rule itself is never shown.

use super::Slot;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::SequenceParams;
use crate::model::{Question, RuleParameters};

/// Terms per sequence.
const LENGTH: usize = 7;

/// Synthesizes a numeric-sequence question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 15]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::NumericSequence, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let params = SequenceParams {
        base: (3 * t + 5 * l) % 97 + 10,
        alpha: (2 * t + l) % 11 + 1,
        beta: (t + 3 * l) % 7 + 1,
        even_offset: (t * l) % 9,
        odd_offset: (t + l) % 9,
        length: LENGTH,
        // 0-based, always one of the middle positions 2..=4.
        missing_position: 2 + (local_idx % 3) as usize,
    };

    let shown: Vec<String> = (0..params.length)
        .map(|i| {
            if i == params.missing_position {
                "?".to_owned()
            } else {
                term(&params, i as i64 + 1).to_string()
            }
        })
        .collect();

    let prompt = format!(
        "{}Fill in the missing number. The rule may depend on position,\n\
         parity, and more than one type of growth.\n\n\
         Sequence: {}",
        slot.header(),
        shown.join(", ")
    );
    Ok(slot.finish(prompt, RuleParameters::NumericSequence(params)))
}

fn term(p: &SequenceParams, k: i64) -> i64 {
    let offset = if k % 2 == 0 { p.even_offset } else { p.odd_offset };
    p.base + p.alpha * k + p.beta * k * k + offset
}
