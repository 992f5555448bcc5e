//! The engine's single error kind.
//!
//! Every public operation validates its integer inputs against a closed
//! interval before producing anything. Nothing else can fail: the engine
//! performs no I/O and has no transient failure modes.

use core::fmt;

use thiserror::Error;

/// Which integer input was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The test identifier, `[1, 1000]`.
    TestId,
    /// The question index within a test, `[1, 100]`.
    QuestionIdx,
    /// The index within a domain's block, `[1, domain size]`.
    LocalIdx,
}

impl Field {
    /// Returns the snake_case name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TestId => "test_id",
            Self::QuestionIdx => "question_idx",
            Self::LocalIdx => "local_idx",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input fell outside its declared closed interval.
///
/// # Example
///
/// ```
/// use mensa::{generate_question, Field};
///
/// let err = generate_question(0, 1).unwrap_err();
/// assert_eq!(err.field, Field::TestId);
/// assert_eq!(err.to_string(), "test_id must be in 1..=1000, got 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{field} must be in {min}..={max}, got {value}")]
pub struct OutOfRangeError {
    /// The offending input.
    pub field: Field,
    /// The value that was supplied.
    pub value: u32,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl OutOfRangeError {
    /// Checks `value ∈ [min, max]`, returning it unchanged on success.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] when `value` lies outside the interval.
    pub const fn check(field: Field, value: u32, min: u32, max: u32) -> Result<u32> {
        if value < min || value > max {
            return Err(Self {
                field,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, OutOfRangeError>;
