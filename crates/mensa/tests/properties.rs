//! Property-based tests for the engine.
//!
//! Uses proptest over the valid coordinate space and just outside it.

use mensa::{
    generate_question, solve_question, Answer, Domain, Field, RuleParameters, NUM_TESTS,
    QUESTIONS_PER_TEST,
};
use proptest::prelude::*;

fn test_id() -> impl Strategy<Value = u32> {
    1..=NUM_TESTS
}

fn question_idx() -> impl Strategy<Value = u32> {
    1..=QUESTIONS_PER_TEST
}

// =============================================================================
// Purity
// =============================================================================

proptest! {
    /// generate_question is a pure function of the coordinate
    #[test]
    fn prop_generation_deterministic(t in test_id(), i in question_idx()) {
        prop_assert_eq!(generate_question(t, i), generate_question(t, i));
    }

    /// solve_question is a pure function of the coordinate
    #[test]
    fn prop_solution_deterministic(t in test_id(), i in question_idx()) {
        prop_assert_eq!(solve_question(t, i), solve_question(t, i));
    }

    /// Questions carry their own coordinate and the routed domain
    #[test]
    fn prop_question_routed(t in test_id(), i in question_idx()) {
        let q = generate_question(t, i).unwrap();
        let (domain, local) = Domain::route(i).unwrap();
        prop_assert_eq!(q.test_id, t);
        prop_assert_eq!(q.question_idx, i);
        prop_assert_eq!(q.domain, domain);
        prop_assert_eq!(q.local_idx, local);
        prop_assert_eq!(q.meta.domain(), domain);
        let header = format!("Test {t}, Q{i} ({}):", domain.name());
        prop_assert!(q.prompt.starts_with(&header));
    }
}

// =============================================================================
// Range rejection
// =============================================================================

proptest! {
    /// Test ids past the last test are rejected by both components
    #[test]
    fn prop_test_id_too_large(t in (NUM_TESTS + 1).., i in question_idx()) {
        prop_assert_eq!(generate_question(t, i).unwrap_err().field, Field::TestId);
        prop_assert_eq!(solve_question(t, i).unwrap_err().field, Field::TestId);
    }

    /// Question indices past the last question are rejected by both components
    #[test]
    fn prop_question_idx_too_large(t in test_id(), i in (QUESTIONS_PER_TEST + 1)..) {
        prop_assert_eq!(generate_question(t, i).unwrap_err().field, Field::QuestionIdx);
        prop_assert_eq!(solve_question(t, i).unwrap_err().field, Field::QuestionIdx);
    }
}

// =============================================================================
// Domain invariants
// =============================================================================

proptest! {
    /// The letter multiplier is odd and in [1, 25]
    #[test]
    fn prop_letter_multiplier_odd(t in test_id(), l in 1u32..=10) {
        let q = generate_question(t, 35 + l).unwrap();
        let RuleParameters::LetterAnalogy(p) = q.meta else {
            return Err(TestCaseError::fail("wrong meta"));
        };
        prop_assert!(p.a % 2 == 1);
        prop_assert!((1..=25).contains(&p.a));
        prop_assert!((0..=25).contains(&p.b));
    }

    /// Letter answers are upper-case ASCII
    #[test]
    fn prop_letter_answer_in_alphabet(t in test_id(), l in 1u32..=10) {
        let Answer::Letter(c) = solve_question(t, 35 + l).unwrap() else {
            return Err(TestCaseError::fail("wrong answer kind"));
        };
        prop_assert!(c.is_ascii_uppercase());
    }

    /// Every team gets a non-negative share
    #[test]
    fn prop_word_share_non_negative(t in test_id(), l in 1u32..=10) {
        let n = solve_question(t, 45 + l).unwrap().as_integer().unwrap();
        prop_assert!(n >= 0);
    }

    /// The two displayed bases differ
    #[test]
    fn prop_bases_distinct(t in test_id(), l in 1u32..=10) {
        let RuleParameters::BaseConversion(p) = generate_question(t, 70 + l).unwrap().meta else {
            return Err(TestCaseError::fail("wrong meta"));
        };
        prop_assert_ne!(p.base_x, p.base_y);
    }

    /// Next-figure counts stay within [1, modulus]
    #[test]
    fn prop_shape_counts_bounded(t in test_id(), l in 1u32..=10) {
        let RuleParameters::ShapeSequence(p) = generate_question(t, 80 + l).unwrap().meta else {
            return Err(TestCaseError::fail("wrong meta"));
        };
        let Answer::Counts(a, b) = solve_question(t, 80 + l).unwrap() else {
            return Err(TestCaseError::fail("wrong answer kind"));
        };
        prop_assert!((1..=p.modulus_a).contains(&a));
        prop_assert!((1..=p.modulus_b).contains(&b));
    }

    /// Self-referential counts lie in [0, 100]
    #[test]
    fn prop_self_referential_bounded(t in test_id(), l in 1u32..=10) {
        let n = solve_question(t, 90 + l).unwrap().as_integer().unwrap();
        prop_assert!((0..=100).contains(&n));
    }
}
