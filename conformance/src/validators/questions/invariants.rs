//! Domain invariant validator.
//!
//! Checks parameter bounds that make each question well-posed:
//! - letter multiplier odd in `[1, 25]`, offset in `[0, 25]`
//! - word-problem total strictly positive, loss below `groups + 1`
//! - bases in `[5, 16]` with `base_x ≠ base_y`
//! - next-figure counts in `[1, modulus]`
//! - self-referential counts in `[0, 100]`
//!
//! Word problems whose total does not split evenly are reported as a
//! warning: their answer relies on floor division.

use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use mensa::{generate_question, solve_question, Answer, RuleParameters, QUESTIONS_PER_TEST};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "questions/invariants";

/// Validates per-domain parameter invariants.
///
/// # Errors
///
/// Returns an error if a coordinate in `tests` is rejected by the engine.
pub fn validate(tests: &RangeInclusive<u32>) -> Result<ConformanceReport> {
    let mut violations = Vec::new();
    let mut uneven = 0usize;
    let mut word_total = 0usize;

    for t in tests.clone() {
        for i in 1..=QUESTIONS_PER_TEST {
            let q = generate_question(t, i).with_context(|| format!("generating T{t}/Q{i}"))?;
            let at = format!("T{t}/Q{i}");
            match &q.meta {
                RuleParameters::LetterAnalogy(p) => {
                    if p.a % 2 != 1 || !(1..=25).contains(&p.a) {
                        violations.push(format!("{at}: multiplier {}", p.a));
                    }
                    if !(0..=25).contains(&p.b) {
                        violations.push(format!("{at}: offset {}", p.b));
                    }
                }
                RuleParameters::WordArithmetic(p) => {
                    let total = (p.base_items + p.daily_gain * p.days) * p.bonus_factor - p.loss;
                    if total <= 0 {
                        violations.push(format!("{at}: total {total}"));
                    }
                    if p.loss > p.groups {
                        violations.push(format!("{at}: loss {} for {} groups", p.loss, p.groups));
                    }
                    word_total += 1;
                    if total % p.groups != 0 {
                        uneven += 1;
                    }
                }
                RuleParameters::BaseConversion(p) => {
                    if p.base_x == p.base_y {
                        violations.push(format!("{at}: base_x = base_y = {}", p.base_x));
                    }
                    for base in [p.base_x, p.base_y, p.base_z] {
                        if !(5..=16).contains(&base) {
                            violations.push(format!("{at}: base {base}"));
                        }
                    }
                }
                RuleParameters::ShapeSequence(p) => {
                    let answer = solve_question(t, i)?;
                    let Answer::Counts(a, b) = answer else {
                        violations.push(format!("{at}: answer {answer} is not a count pair"));
                        continue;
                    };
                    let shown_a = p.shown_a.iter().chain([&a]);
                    let shown_b = p.shown_b.iter().chain([&b]);
                    if shown_a.into_iter().any(|c| !(1..=p.modulus_a).contains(c))
                        || shown_b.into_iter().any(|c| !(1..=p.modulus_b).contains(c))
                    {
                        violations.push(format!("{at}: count outside [1, modulus]"));
                    }
                }
                RuleParameters::SelfReferential(_) => {
                    let answer = solve_question(t, i)?;
                    match answer.as_integer() {
                        Some(n) if (0..=100).contains(&n) => {}
                        _ => violations.push(format!("{at}: count {answer}")),
                    }
                }
                _ => {}
            }
        }
    }

    let mut report = ConformanceReport::new();
    report.push(TestResult::from_violations(
        VALIDATOR,
        "Domain parameters are within their invariant bounds",
        "Domain parameters violate invariants",
        violations,
    ));
    if uneven > 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("{uneven} of {word_total} word problems leave samples set aside"),
        ));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn invariants_hold() {
        let report = validate(&(1..=40)).unwrap();
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn uneven_division_is_a_warning() {
        // Test 1 splits 27 and 69 evenly over 3 teams, but 16 does not.
        let report = validate(&(1..=1)).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Warning), 1);
        let warning = report.results.last().unwrap();
        assert_eq!(
            warning.message,
            "7 of 10 word problems leave samples set aside"
        );
    }
}
