//! Completeness validator.
//!
//! A generated test holds exactly 100 questions, in index order, each
//! carrying its routed domain, local index and prompt header.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use mensa::{generate_test, Domain, QUESTIONS_PER_TEST};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "questions/completeness";

/// Validates the shape of every generated test in `tests`.
///
/// # Errors
///
/// Returns an error if a test id in `tests` is rejected by the engine.
pub fn validate(tests: &RangeInclusive<u32>) -> Result<ConformanceReport> {
    let mut violations = Vec::new();

    for t in tests.clone() {
        let questions = generate_test(t).with_context(|| format!("generating test {t}"))?;
        if questions.len() != QUESTIONS_PER_TEST as usize {
            violations.push(format!("test {t}: {} questions", questions.len()));
            continue;
        }
        for (i, q) in (1..).zip(&questions) {
            let (domain, local) = Domain::route(i)?;
            let header = format!("Test {t}, Q{i} ({}):\n", domain.name());
            if q.test_id != t || q.question_idx != i {
                violations.push(format!("T{t}/Q{i}: labelled T{}/Q{}", q.test_id, q.question_idx));
            } else if q.domain != domain || q.local_idx != local {
                violations.push(format!(
                    "T{t}/Q{i}: {}#{} instead of {domain}#{local}",
                    q.domain, q.local_idx
                ));
            } else if q.meta.domain() != domain {
                violations.push(format!("T{t}/Q{i}: meta for {}", q.meta.domain()));
            } else if !q.prompt.starts_with(&header) {
                violations.push(format!("T{t}/Q{i}: prompt header missing"));
            }
        }
    }

    let mut report = ConformanceReport::new();
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("Tests {}..={} are complete and ordered", tests.start(), tests.end()),
        "Generated tests are incomplete or misrouted",
        violations,
    ));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_passes() {
        let report = validate(&(1..=10)).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
