//! Question and answer types.
//!
//! A [`Question`] is produced fresh by the synthesizer for each coordinate and
//! an [`Answer`] fresh by the oracle. Neither has a lifecycle beyond the call
//! that produced it.

pub mod params;
pub mod vocab;

use core::fmt;

use crate::core::domain::Domain;

pub use params::RuleParameters;
pub use vocab::{Figure, PrimaryArrow, SecondaryArrow};

/// A rendered question.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Question {
    /// Test the question belongs to.
    pub test_id: u32,
    /// Position within the test, `[1, 100]`.
    pub question_idx: u32,
    /// Position within the domain block, `[1, domain size]`.
    pub local_idx: u32,
    /// Puzzle domain.
    pub domain: Domain,
    /// Prompt text shown to the test-taker.
    pub prompt: String,
    /// Rule parameters, exposed for auditing.
    pub meta: RuleParameters,
}

/// The unique correct answer to a question.
///
/// Renders in the formats a test-taker would write:
///
/// ```
/// use mensa::{solve_question, Answer};
///
/// assert!(matches!(solve_question(1, 75).unwrap(), Answer::Integer(_)));
/// assert_eq!(solve_question(1, 75).unwrap().to_string(), "272");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Answer {
    /// A number: missing term, per-team count, decimal value or id count.
    Integer(i64),
    /// Truth value of a logic statement.
    Truth(bool),
    /// Ordered pair from the primary and secondary arrow cycles.
    Arrows(PrimaryArrow, SecondaryArrow),
    /// An upper-case letter `A`–`Z`.
    Letter(char),
    /// A Raven matrix cell.
    Figure(Figure),
    /// Counts of shape A and shape B.
    Counts(i64, i64),
}

impl Answer {
    /// The integer payload, if this is an [`Answer::Integer`].
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Truth(true) => f.write_str("TRUE"),
            Self::Truth(false) => f.write_str("FALSE"),
            Self::Arrows(a, b) => write!(f, "({a}, {b})"),
            Self::Letter(c) => write!(f, "{c}"),
            Self::Figure(fig) => write!(f, "{fig}"),
            Self::Counts(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::vocab::{Fill, Orientation, Shape};
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(Answer::Integer(42).to_string(), "42");
        assert_eq!(Answer::Truth(false).to_string(), "FALSE");
        assert_eq!(
            Answer::Arrows(PrimaryArrow::Down, SecondaryArrow::UpRight).to_string(),
            "(↓, ↗)"
        );
        assert_eq!(Answer::Letter('Q').to_string(), "Q");
        assert_eq!(
            Answer::Figure(Figure {
                shape: Shape::Square,
                fill: Fill::Full,
                orientation: Orientation::Deg90,
            })
            .to_string(),
            "■●(90°)"
        );
        assert_eq!(Answer::Counts(3, 10).to_string(), "(3, 10)");
    }

    #[test]
    fn integer_accessor() {
        assert_eq!(Answer::Integer(7).as_integer(), Some(7));
        assert_eq!(Answer::Letter('A').as_integer(), None);
    }
}
