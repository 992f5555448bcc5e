//! Shared setup for the Mensa client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::ops::RangeInclusive;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when
/// `verbose` is set and `warn` when it is not. Output goes to stderr so
/// stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Parses a test-id range: `a..b` and `a..=b` are both inclusive, and a
/// single id `a` selects one test.
///
/// # Errors
///
/// Returns a message suitable for `clap` if either bound is not an integer
/// or the range is empty.
pub fn parse_test_range(s: &str) -> Result<RangeInclusive<u32>, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid test id `{part}`: {e}"))
    };
    let range = match s.split_once("..") {
        Some((start, end)) => parse(start)?..=parse(end.strip_prefix('=').unwrap_or(end))?,
        None => {
            let id = parse(s)?;
            id..=id
        }
    };
    if range.is_empty() {
        return Err(format!("test range `{s}` is empty"));
    }
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_forms() {
        assert_eq!(parse_test_range("1..1000"), Ok(1..=1000));
        assert_eq!(parse_test_range("5..=9"), Ok(5..=9));
        assert_eq!(parse_test_range("42"), Ok(42..=42));
    }

    #[test]
    fn bad_ranges() {
        assert!(parse_test_range("9..5").is_err());
        assert!(parse_test_range("a..5").is_err());
        assert!(parse_test_range("").is_err());
    }
}
