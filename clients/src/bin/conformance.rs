//! `mensa-conformance`: Audits the puzzle engine.
//!
//! Runs the conformance suite over a range of tests:
//! - Router partition and coordinate bounds
//! - Oracle answers against metadata replay, per domain
//! - Determinism and completeness of generated tests
//! - Per-domain parameter invariants
//!
//! **Usage:**
//! ```text
//! mensa-conformance [--tests <a..b>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::ops::RangeInclusive;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use mensa_clients::{init_tracing, parse_test_range};
use mensa_conformance::{run_all, AuditScope, Severity};

/// Run the Mensa conformance suite.
#[derive(Parser)]
#[command(
    name = "mensa-conformance",
    about = "Audit routing, inversion and determinism of the puzzle engine"
)]
struct Args {
    /// Inclusive range of test ids to audit (default: every test).
    #[arg(long, value_parser = parse_test_range, default_value = "1..=1000")]
    tests: RangeInclusive<u32>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let report = run_all(&AuditScope {
        tests: args.tests.clone(),
    })
    .with_context(|| {
        format!(
            "Failed to audit tests {}..={}",
            args.tests.start(),
            args.tests.end()
        )
    })?;

    let failed = report.failure_count();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("Mensa Conformance Report");
        println!("========================");
        println!();

        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Warning => "WARN",
                Severity::Failure => "FAIL",
            };
            println!("[{status}] {} - {}", result.validator, result.message);
            for detail in &result.details {
                println!("       {detail}");
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {failed} failed",
            report.count(Severity::Pass),
            report.count(Severity::Warning),
        );
    }

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
