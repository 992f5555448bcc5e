//! Recomputes a question's concealed value from its published `meta`.
//!
//! Replay reads neither the coordinate nor the prompt. Together with the
//! synthesizer (which produced `meta`) and the oracle (which never sees it)
//! it forms the third leg of the inversion check.

use std::num::ParseIntError;

use mensa::arith::{contains_digit, is_prime, letter, modulo};
use mensa::{
    Answer, CountMode, Figure, Fill, LogicForm, Orientation, PrimaryArrow, Question,
    RuleParameters, SecondaryArrow, Shape,
};
use thiserror::Error;

/// Metadata that does not describe a single concealed value.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// A base representation could not be parsed in its base.
    #[error("`{repr}` is not a base-{base} numeral")]
    Numeral {
        /// The offending representation.
        repr: String,
        /// Its declared base.
        base: u32,
        /// Parser error.
        #[source]
        source: ParseIntError,
    },
    /// The three base representations name different integers.
    #[error("base representations disagree: {values:?}")]
    Disagreement {
        /// Decoded values in x, y, z order.
        values: [i64; 3],
    },
}

/// Recomputes the concealed value of `question` from `question.meta`.
///
/// # Errors
///
/// Returns [`ReplayError`] if base-conversion metadata is malformed.
pub fn concealed(question: &Question) -> Result<Answer, ReplayError> {
    let answer = match &question.meta {
        RuleParameters::NumericSequence(p) => {
            let k = p.missing_position as i64 + 1;
            let offset = if k % 2 == 0 { p.even_offset } else { p.odd_offset };
            Answer::Integer(p.base + p.alpha * k + p.beta * k * k + offset)
        }
        RuleParameters::NestedLogic(p) => Answer::Truth(evaluate(p.form, p.p, p.q, p.r)),
        RuleParameters::ArrowCycle(p) => Answer::Arrows(
            PrimaryArrow::from_index(p.n1 - 1),
            SecondaryArrow::from_index(p.n2 - 1),
        ),
        RuleParameters::LetterAnalogy(p) => Answer::Letter(letter(p.a * p.query_input + p.b)),
        RuleParameters::WordArithmetic(p) => {
            let total = (p.base_items + p.daily_gain * p.days) * p.bonus_factor - p.loss;
            Answer::Integer(total.div_euclid(p.groups))
        }
        RuleParameters::RavenMatrix(p) => {
            let (r, c) = (p.missing_row, p.missing_col);
            Answer::Figure(Figure {
                shape: Shape::from_index(p.shape_seed + r + 2 * c),
                fill: Fill::from_index(p.fill_seed + r + c),
                orientation: Orientation::from_index(p.orientation_seed + 2 * r + c),
            })
        }
        RuleParameters::BaseConversion(p) => {
            let values = [
                decode(&p.repr_x, p.base_x)?,
                decode(&p.repr_y, p.base_y)?,
                decode(&p.repr_z, p.base_z)?,
            ];
            if values[1] != values[0] || values[2] != values[0] {
                return Err(ReplayError::Disagreement { values });
            }
            Answer::Integer(values[0])
        }
        RuleParameters::ShapeSequence(p) => Answer::Counts(
            fifth(p.base_a, p.step_a, p.modulus_a),
            fifth(p.base_b, p.step_b, p.modulus_b),
        ),
        RuleParameters::SelfReferential(p) => {
            let count = (p.first_id..=p.last_id)
                .filter(|&id| {
                    let has = contains_digit(id, p.digit);
                    match p.mode {
                        CountMode::Digit => has,
                        CountMode::DigitAndEven => has && id % 2 == 0,
                        CountMode::DigitAndPrime => has && is_prime(id),
                        CountMode::DigitOrNine => has || id % 9 == 0,
                    }
                })
                .count();
            Answer::Integer(count as i64)
        }
    };
    Ok(answer)
}

fn evaluate(form: LogicForm, p: bool, q: bool, r: bool) -> bool {
    match form {
        LogicForm::AndOrNot => (p && q) || !r,
        // IF a THEN b is (NOT a) OR b.
        LogicForm::IfAndThenXor => !(p && r) || (q ^ r),
        LogicForm::XorAndOr => (p ^ q) && (q || r),
        LogicForm::IfOrThenNotAnd => !(p || q) || (!p && r),
    }
}

fn decode(repr: &str, base: u32) -> Result<i64, ReplayError> {
    i64::from_str_radix(repr, base).map_err(|source| ReplayError::Numeral {
        repr: repr.to_owned(),
        base,
        source,
    })
}

fn fifth(base: i64, step: i64, modulus: i64) -> i64 {
    match modulo(base + 4 * step, modulus) {
        0 => modulus,
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa::{generate_question, solve_question, BaseParams, Domain};

    #[test]
    fn replay_matches_oracle_for_first_test() {
        for i in 1..=100 {
            let q = generate_question(1, i).unwrap();
            assert_eq!(concealed(&q).unwrap(), solve_question(1, i).unwrap(), "Q{i}");
        }
    }

    #[test]
    fn malformed_numeral_rejected() {
        let mut q = generate_question(1, 75).unwrap();
        q.meta = RuleParameters::BaseConversion(BaseParams {
            base_x: 5,
            base_y: 6,
            base_z: 7,
            repr_x: "9".to_owned(),
            repr_y: "1".to_owned(),
            repr_z: "1".to_owned(),
        });
        assert!(matches!(
            concealed(&q),
            Err(ReplayError::Numeral { base: 5, .. })
        ));
    }

    #[test]
    fn disagreeing_bases_rejected() {
        let mut q = generate_question(1, 75).unwrap();
        assert_eq!(q.domain, Domain::BaseConversion);
        q.meta = RuleParameters::BaseConversion(BaseParams {
            base_x: 10,
            base_y: 16,
            base_z: 8,
            repr_x: "10".to_owned(),
            repr_y: "10".to_owned(),
            repr_z: "12".to_owned(),
        });
        let err = concealed(&q).unwrap_err();
        assert_eq!(err.to_string(), "base representations disagree: [10, 16, 10]");
    }
}
