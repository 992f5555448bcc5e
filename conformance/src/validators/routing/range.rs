//! Coordinate bound validator.
//!
//! Both the generator and the oracle must reject the first value outside
//! each bound, and must name the offending field.

use mensa::{generate_question, solve_question, Domain, Field, NUM_TESTS, QUESTIONS_PER_TEST};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "routing/range";

/// Out-of-range probes and the field each must be rejected for.
const PROBES: [(u32, u32, Field); 4] = [
    (0, 1, Field::TestId),
    (NUM_TESTS + 1, 1, Field::TestId),
    (1, 0, Field::QuestionIdx),
    (1, QUESTIONS_PER_TEST + 1, Field::QuestionIdx),
];

/// Validates range rejection at the coordinate bounds.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut violations = Vec::new();

    for (t, i, field) in PROBES {
        match generate_question(t, i) {
            Err(e) if e.field == field => {}
            Err(e) => violations.push(format!("generate({t}, {i}): wrong field in `{e}`")),
            Ok(_) => violations.push(format!("generate({t}, {i}): accepted")),
        }
        match solve_question(t, i) {
            Err(e) if e.field == field => {}
            Err(e) => violations.push(format!("solve({t}, {i}): wrong field in `{e}`")),
            Ok(_) => violations.push(format!("solve({t}, {i}): accepted")),
        }
    }

    for domain in Domain::ALL {
        for local in [0, domain.size() + 1] {
            if domain.question_idx(local).is_ok() {
                violations.push(format!("{domain}: local index {local} accepted"));
            }
        }
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Out-of-range coordinates rejected by generator and oracle",
        "Out-of-range coordinates not rejected",
        violations,
    ));

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_passes() {
        assert!(validate().all_passed());
    }
}
