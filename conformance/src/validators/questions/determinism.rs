//! Determinism validator.
//!
//! Two independent calls for the same coordinate must yield identical
//! questions and identical answers.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use mensa::{generate_test, solve_question, QUESTIONS_PER_TEST};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "questions/determinism";

/// Validates that generation and solving are repeatable.
///
/// # Errors
///
/// Returns an error if a test id in `tests` is rejected by the engine.
pub fn validate(tests: &RangeInclusive<u32>) -> Result<ConformanceReport> {
    let mut questions = Vec::new();
    let mut answers = Vec::new();

    for t in tests.clone() {
        let first = generate_test(t).with_context(|| format!("generating test {t}"))?;
        let second = generate_test(t).with_context(|| format!("regenerating test {t}"))?;
        for (a, b) in first.iter().zip(&second) {
            if a != b {
                questions.push(format!("T{t}/Q{}", a.question_idx));
            }
        }

        for i in 1..=QUESTIONS_PER_TEST {
            if solve_question(t, i)? != solve_question(t, i)? {
                answers.push(format!("T{t}/Q{i}"));
            }
        }
    }

    let mut report = ConformanceReport::new();
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Repeated generation yields identical questions",
        "Repeated generation diverged",
        questions,
    ));
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Repeated solving yields identical answers",
        "Repeated solving diverged",
        answers,
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_passes() {
        let report = validate(&(990..=1000)).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
