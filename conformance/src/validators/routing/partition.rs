//! Partition validator.
//!
//! Verifies that the nine domain blocks tile `[1, 100]`:
//! - blocks are contiguous, in `Domain::ALL` order, starting at 1
//! - every question index routes to exactly one domain
//! - local indices run `1..=size` and map back to the same question index

use mensa::{Domain, QUESTIONS_PER_TEST};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "routing/partition";

/// Block sizes in domain order.
const EXPECTED_SIZES: [u32; 9] = [15, 10, 10, 10, 10, 15, 10, 10, 10];

/// Validates the question-index partition.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_blocks(&mut report);
    check_routing(&mut report);

    report
}

fn check_blocks(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    let mut next = 1;
    for (domain, expected) in Domain::ALL.into_iter().zip(EXPECTED_SIZES) {
        let range = domain.range();
        if *range.start() != next {
            violations.push(format!(
                "{domain}: starts at {}, expected {next}",
                range.start()
            ));
        }
        if domain.size() != expected {
            violations.push(format!(
                "{domain}: size {}, expected {expected}",
                domain.size()
            ));
        }
        next = range.end() + 1;
    }
    if next != QUESTIONS_PER_TEST + 1 {
        violations.push(format!("blocks end at {}, expected {QUESTIONS_PER_TEST}", next - 1));
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Domain blocks tile [1, 100] contiguously",
        "Domain blocks do not tile [1, 100]",
        violations,
    ));
}

fn check_routing(report: &mut ConformanceReport) {
    let mut violations = Vec::new();
    for idx in 1..=QUESTIONS_PER_TEST {
        let owners: Vec<Domain> = Domain::ALL
            .into_iter()
            .filter(|d| d.range().contains(&idx))
            .collect();
        if owners.len() != 1 {
            violations.push(format!("Q{idx}: owned by {owners:?}"));
            continue;
        }
        match Domain::route(idx) {
            Ok((domain, local)) => {
                if domain != owners[0] {
                    violations.push(format!("Q{idx}: routed to {domain}, owned by {}", owners[0]));
                }
                if domain.question_idx(local) != Ok(idx) {
                    violations.push(format!("Q{idx}: local index {local} does not map back"));
                }
            }
            Err(e) => violations.push(format!("Q{idx}: {e}")),
        }
    }

    report.push(TestResult::from_violations(
        VALIDATOR,
        "Every question index routes to one domain and back",
        "Routing is not a bijection onto local indices",
        violations,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_passes() {
        let report = validate();
        assert_eq!(report.results.len(), 2);
        assert!(report.all_passed(), "{:#?}", report.results);
    }
}
