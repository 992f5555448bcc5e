//! One hidden integer written in three bases.
//!
//! `N = 200 + 17t + 11l` is rendered in `base_x`, `base_y` and `base_z`,
//! all in `[5, 16]` with `base_x ≠ base_y`. The decimal form never appears
//! in the prompt or in the metadata.

use super::Slot;
use crate::core::arith::{modulo, to_base};
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::BaseParams;
use crate::model::{Question, RuleParameters};

/// Synthesizes a base-conversion question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::BaseConversion, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let pick = |x: i64| 5 + modulo(x, 12) as u32;
    let base_x = pick(t + l);
    let mut base_y = pick(2 * t + l);
    if base_y == base_x {
        base_y = pick(3 * t + l);
        if base_y == base_x {
            base_y = 16;
        }
    }
    let base_z = pick(t + 2 * l);

    // t, l >= 1 so N is positive.
    let n = (200 + 17 * t + 11 * l).unsigned_abs();
    let params = BaseParams {
        base_x,
        base_y,
        base_z,
        repr_x: to_base(n, base_x),
        repr_y: to_base(n, base_y),
        repr_z: to_base(n, base_z),
    };

    let prompt = format!(
        "{header}A certain integer N is written as {rx} in base {bx} and as \
         {ry} in base {by}. When expressed in base {bz}, it \
         would be written as {rz}.\n\n\
         All three representations refer to the same integer N.\n\
         What is the value of N when written in base 10 (ordinary decimal)?",
        header = slot.header(),
        rx = params.repr_x,
        bx = params.base_x,
        ry = params.repr_y,
        by = params.base_y,
        rz = params.repr_z,
        bz = params.base_z,
    );
    Ok(slot.finish(prompt, RuleParameters::BaseConversion(params)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bases_in_range_and_distinct() {
        for t in 1..=60 {
            for l in 1..=10 {
                let RuleParameters::BaseConversion(p) = synthesize(t, l).unwrap().meta else {
                    panic!("wrong meta");
                };
                assert_ne!(p.base_x, p.base_y, "t = {t}, l = {l}");
                for b in [p.base_x, p.base_y, p.base_z] {
                    assert!((5..=16).contains(&b));
                }
            }
        }
    }

    #[test]
    fn decimal_value_not_rendered() {
        // N = 272 for (1, 5).
        let q = synthesize(1, 5).unwrap();
        assert_eq!(q.question_idx, 75);
        assert!(!q.prompt.contains("272"));
        let RuleParameters::BaseConversion(p) = q.meta else {
            panic!("wrong meta");
        };
        assert_eq!(u64::from_str_radix(&p.repr_x, p.base_x), Ok(272));
    }
}
