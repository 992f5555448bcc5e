//! Layered arithmetic word problems.
//!
//! Daily gains, a multiplicative bonus, a fixed loss, then an equal split
//! into teams. The split is floor division: leftover samples are set aside,
//! and the prompt says so.

use super::Slot;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::WordParams;
use crate::model::{Question, RuleParameters};

/// Synthesizes a layered word problem.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::WordArithmetic, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let base_items = 4 + t % 9;
    let daily_gain = 1 + l % 5;
    let groups = 2 + t % 4;
    let params = WordParams {
        base_items,
        daily_gain,
        days: 3 + (t + l) % 4,
        bonus_factor: 1 + (t * l) % 3,
        loss: (base_items + daily_gain) % (groups + 1),
        groups,
    };

    let prompt = format!(
        "{header}A researcher starts with {base} experimental samples.\n\
         Each day, they create {gain} new samples, and this continues \
         for {days} days. After that, they multiply the total number of \
         samples they have by a 'bonus factor' of {bonus}.\n\
         Finally, they must discard exactly {loss} samples due to defects, \
         and then divide the remaining samples equally among {groups} teams \
         (any samples left over are set aside).\n\n\
         How many samples does each team receive?",
        header = slot.header(),
        base = params.base_items,
        gain = params.daily_gain,
        days = params.days,
        bonus = params.bonus_factor,
        loss = params.loss,
        groups = params.groups,
    );
    Ok(slot.finish(prompt, RuleParameters::WordArithmetic(params)))
}
