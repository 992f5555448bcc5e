//! Mensa conformance suite.
//!
//! Audits the puzzle engine end to end. The synthesizer and the oracle are
//! independent implementations over the same coordinate space; this crate
//! adds a third (metadata replay) and checks that all three agree, alongside
//! the structural guarantees of the router.
//!
//! # Conformance Scope
//!
//! | Validator | Guarantee |
//! |-----------|-----------|
//! | `routing/partition` | nine blocks tile `[1, 100]`; local indices biject |
//! | `routing/range` | out-of-range coordinates rejected by both components |
//! | `questions/inversion` | oracle answer = replay of generated `meta` |
//! | `questions/determinism` | repeated calls are identical |
//! | `questions/completeness` | each test has 100 ordered, routed questions |
//! | `questions/invariants` | per-domain parameter bounds |
//!
//! # Entry Point
//!
//! ```no_run
//! use mensa_conformance::{run_all, AuditScope};
//!
//! let report = run_all(&AuditScope::default()).expect("audit failed to run");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod replay;
pub mod report;
pub mod validators;

use std::ops::RangeInclusive;

use anyhow::{ensure, Result};
use mensa::NUM_TESTS;
use tracing::{debug, info, warn};

pub use replay::{concealed, ReplayError};
pub use report::{ConformanceReport, Severity, TestResult};

/// Which tests the question validators walk.
#[derive(Debug, Clone)]
pub struct AuditScope {
    /// Inclusive range of test ids, within `[1, 1000]`.
    pub tests: RangeInclusive<u32>,
}

impl Default for AuditScope {
    fn default() -> Self {
        Self {
            tests: 1..=NUM_TESTS,
        }
    }
}

/// Runs all validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Partition of `[1, 100]` into domain blocks
/// 2. Range rejection at the coordinate bounds
/// 3. Inversion (oracle vs. metadata replay), per domain
/// 4. Determinism of generation and solving
/// 5. Completeness of generated tests
/// 6. Domain parameter invariants
///
/// # Errors
///
/// Returns an error if the scope lies outside `[1, 1000]` or is empty, or if
/// the engine rejects a coordinate inside it.
pub fn run_all(scope: &AuditScope) -> Result<ConformanceReport> {
    let tests = &scope.tests;
    ensure!(
        !tests.is_empty() && *tests.start() >= 1 && *tests.end() <= NUM_TESTS,
        "test range {}..={} is not a non-empty sub-range of 1..={NUM_TESTS}",
        tests.start(),
        tests.end()
    );
    info!(first = tests.start(), last = tests.end(), "starting audit");

    let mut report = ConformanceReport::new();

    // 1-2. Router
    record(&mut report, "routing/partition", validators::routing::partition::validate());
    record(&mut report, "routing/range", validators::routing::range::validate());

    // 3-6. Questions
    record(
        &mut report,
        "questions/inversion",
        validators::questions::inversion::validate(tests)?,
    );
    record(
        &mut report,
        "questions/determinism",
        validators::questions::determinism::validate(tests)?,
    );
    record(
        &mut report,
        "questions/completeness",
        validators::questions::completeness::validate(tests)?,
    );
    record(
        &mut report,
        "questions/invariants",
        validators::questions::invariants::validate(tests)?,
    );

    info!(
        results = report.results.len(),
        failures = report.failure_count(),
        "audit finished"
    );
    Ok(report)
}

fn record(report: &mut ConformanceReport, validator: &str, partial: ConformanceReport) {
    let failures = partial.failure_count();
    if failures > 0 {
        warn!(validator, failures, "validator reported failures");
    } else {
        debug!(validator, results = partial.results.len(), "validator passed");
    }
    report.extend(partial);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_passes_on_a_slice() {
        let report = run_all(&AuditScope { tests: 400..=405 }).unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "audit failures: {:#?}", failures);
    }

    #[test]
    fn scope_outside_test_space_rejected() {
        assert!(run_all(&AuditScope { tests: 0..=3 }).is_err());
        assert!(run_all(&AuditScope { tests: 999..=1001 }).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 5..=4;
        assert!(run_all(&AuditScope { tests: empty }).is_err());
    }

    #[test]
    fn default_scope_covers_every_test() {
        assert_eq!(AuditScope::default().tests, 1..=1000);
    }
}
