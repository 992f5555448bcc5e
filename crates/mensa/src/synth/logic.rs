//! Nested propositional logic over three atoms.
//!
//! `p`: the test id is even. `q`: the local index is a multiple of 3.
//! `r`: `test_id + local_idx` is prime-like. The synthesizer records the atom
//! values and picks a statement form; it does not evaluate the statement.

use super::Slot;
use crate::core::arith::is_prime_like;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::LogicParams;
use crate::model::vocab::LogicForm;
use crate::model::{Question, RuleParameters};

/// Synthesizes a nested-logic question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::NestedLogic, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let params = LogicParams {
        p: t % 2 == 0,
        q: l % 3 == 0,
        r: is_prime_like(t + l),
        r_operand: t + l,
        form: LogicForm::from_index(t + l),
    };

    let prompt = format!(
        "{header}Let p be: 'test id {t} is even'.\n\
         Let q be: 'local index {l} (1–10 in this block) is a multiple of 3'.\n\
         Let r be: 'test_id + local_index is prime-like'.\n\n\
         Call an integer 'prime-like' here if it has no divisors in \
         the set {{2, 3, 5, 7}} other than 1.\n\n\
         Consider the compound statement:\n    {form}\n\n\
         Is this statement TRUE or FALSE?",
        header = slot.header(),
        form = params.form,
    );
    Ok(slot.finish(prompt, RuleParameters::NestedLogic(params)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_follow_coordinate() {
        let q = synthesize(4, 3).unwrap();
        let RuleParameters::NestedLogic(p) = q.meta else {
            panic!("wrong meta");
        };
        assert!(p.p);
        assert!(p.q);
        // 7 is divisible by 7.
        assert!(!p.r);
        assert_eq!(p.form, LogicForm::IfOrThenNotAnd);
    }

    #[test]
    fn prompt_shows_statement() {
        let q = synthesize(1, 1).unwrap();
        assert_eq!(q.question_idx, 16);
        assert!(q.prompt.contains("    (p XOR q) AND (q OR r)\n"));
        assert!(q.prompt.contains("the set {2, 3, 5, 7} other than 1."));
        assert!(q.prompt.ends_with("Is this statement TRUE or FALSE?"));
    }
}
