//! Inversion validator.
//!
//! For every coordinate in range, the oracle's answer must equal the value
//! replayed from the generated question's metadata.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use mensa::{generate_question, solve_question, Domain, QUESTIONS_PER_TEST};

use crate::replay::concealed;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "questions/inversion";

/// Validates oracle answers against metadata replay.
///
/// Produces one result per domain.
///
/// # Errors
///
/// Returns an error if a coordinate in `tests` is rejected by the engine.
pub fn validate(tests: &RangeInclusive<u32>) -> Result<ConformanceReport> {
    let mut violations: [Vec<String>; 9] = Default::default();

    for t in tests.clone() {
        for i in 1..=QUESTIONS_PER_TEST {
            let question =
                generate_question(t, i).with_context(|| format!("generating T{t}/Q{i}"))?;
            let answer = solve_question(t, i).with_context(|| format!("solving T{t}/Q{i}"))?;
            let slot = &mut violations[question.domain.index()];
            match concealed(&question) {
                Ok(replayed) if replayed == answer => {}
                Ok(replayed) => {
                    slot.push(format!("T{t}/Q{i}: oracle {answer}, replay {replayed}"));
                }
                Err(e) => slot.push(format!("T{t}/Q{i}: {e}")),
            }
        }
    }

    let mut report = ConformanceReport::new();
    for (domain, v) in Domain::ALL.into_iter().zip(violations) {
        report.push(TestResult::from_violations(
            VALIDATOR,
            format!("{domain}: oracle agrees with metadata replay"),
            format!("{domain}: oracle disagrees with metadata replay"),
            v,
        ));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inversion_passes_for_sampled_tests() {
        let report = validate(&(1..=25)).unwrap();
        assert_eq!(report.results.len(), 9);
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
