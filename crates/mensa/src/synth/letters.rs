//! Alphabet analogies under an affine map on letter positions.
//!
//! `f(k) = a·k + b (mod 26)` with `a` odd, so the map is a bijection. One
//! example pair is shown; the queried letter sits 13 positions after the
//! example's input.

use super::Slot;
use crate::core::arith::{letter, modulo};
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::LetterParams;
use crate::model::{Question, RuleParameters};

/// Synthesizes a letter-analogy question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::LetterAnalogy, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    // 2t + 1 is odd and 26 is even, so the residue stays odd.
    let a = modulo(2 * t + 1, 26);
    let b = modulo(3 * l + t, 26);
    let example_input = modulo(5 * t + l, 26);
    let query_input = modulo(example_input + 13, 26);
    let params = LetterParams {
        a,
        b,
        example_input,
        query_input,
    };

    let prompt = format!(
        "{header}A secret code maps each letter to another letter according to\n\
         a fixed rule on its position in the alphabet.\n\n\
         Example:\n    {from} → {to}\n\n\
         Using the same hidden rule, what letter does {query} map to?\n\
         (All letters are in A–Z, positions taken modulo 26.)",
        header = slot.header(),
        from = letter(example_input),
        to = letter(a * example_input + b),
        query = letter(query_input),
    );
    Ok(slot.finish(prompt, RuleParameters::LetterAnalogy(params)))
}
