//! Audit report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of an audit check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check found something worth reporting that is not a defect.
    Warning,
    /// The check failed.
    Failure,
}

/// A single audit check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Short identifier of the validator that produced this result.
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Offending coordinates or values, one per line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass, Vec::new())
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure, Vec::new())
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(validator, message, Severity::Failure, details)
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning, Vec::new())
    }

    /// Passes with `ok_message` when `violations` is empty, otherwise fails
    /// with `fail_message` and the first [`MAX_DETAILS`] violations.
    pub fn from_violations(
        validator: impl Into<String>,
        ok_message: impl Into<String>,
        fail_message: impl Into<String>,
        mut violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            return Self::pass(validator, ok_message);
        }
        let total = violations.len();
        violations.truncate(MAX_DETAILS);
        if total > MAX_DETAILS {
            violations.push(format!("... and {} more", total - MAX_DETAILS));
        }
        Self::fail_with_details(
            validator,
            format!("{} ({total} violations)", fail_message.into()),
            violations,
        )
    }

    fn new(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Detail lines kept per failing result.
pub const MAX_DETAILS: usize = 20;

/// Aggregated report from all validators.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// All individual results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_are_capped() {
        let violations = (0..30).map(|i| format!("T{i}")).collect();
        let r = TestResult::from_violations("x", "ok", "bad", violations);
        assert!(r.is_failure());
        assert_eq!(r.message, "bad (30 violations)");
        assert_eq!(r.details.len(), MAX_DETAILS + 1);
        assert_eq!(r.details[MAX_DETAILS], "... and 10 more");
    }

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "fine"));
        report.push(TestResult::warn("b", "hmm"));
        assert!(report.all_passed());
        report.push(TestResult::fail("c", "broken"));
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }
}
