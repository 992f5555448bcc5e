//! Validated `(test_id, question_idx)` pairs.

use core::fmt;

use super::constants::{NUM_TESTS, QUESTIONS_PER_TEST};
use super::domain::Domain;
use crate::error::{Field, OutOfRangeError, Result};

/// A validated question coordinate.
///
/// Constructing one is the only place range checks happen for callers that
/// want to validate once and reuse the pair.
///
/// # Example
///
/// ```
/// use mensa::{Coordinate, Domain};
///
/// let c = Coordinate::new(7, 47).unwrap();
/// assert_eq!(c.route(), (Domain::WordArithmetic, 2));
/// assert!(Coordinate::new(7, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    test_id: u32,
    question_idx: u32,
}

impl Coordinate {
    /// Validates and builds a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]` or
    /// `question_idx ∉ [1, 100]`.
    pub const fn new(test_id: u32, question_idx: u32) -> Result<Self> {
        if let Err(e) = OutOfRangeError::check(Field::TestId, test_id, 1, NUM_TESTS) {
            return Err(e);
        }
        if let Err(e) =
            OutOfRangeError::check(Field::QuestionIdx, question_idx, 1, QUESTIONS_PER_TEST)
        {
            return Err(e);
        }
        Ok(Self {
            test_id,
            question_idx,
        })
    }

    /// The test identifier.
    #[must_use]
    pub const fn test_id(self) -> u32 {
        self.test_id
    }

    /// The question index within the test.
    #[must_use]
    pub const fn question_idx(self) -> u32 {
        self.question_idx
    }

    /// Domain and local index of this coordinate.
    #[must_use]
    pub fn route(self) -> (Domain, u32) {
        for domain in Domain::ALL {
            if domain.range().contains(&self.question_idx) {
                return (domain, self.question_idx - domain.range().start() + 1);
            }
        }
        // question_idx was validated and the blocks cover [1, 100].
        (Domain::SelfReferential, self.question_idx - 90)
    }

    /// Every coordinate of one test, in question order.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `test_id ∉ [1, 1000]`.
    pub fn test(test_id: u32) -> Result<impl Iterator<Item = Self>> {
        OutOfRangeError::check(Field::TestId, test_id, 1, NUM_TESTS)?;
        Ok((1..=QUESTIONS_PER_TEST).map(move |question_idx| Self {
            test_id,
            question_idx,
        }))
    }

    /// Every coordinate in the space, test-major.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=NUM_TESTS).flat_map(|test_id| {
            (1..=QUESTIONS_PER_TEST).map(move |question_idx| Self {
                test_id,
                question_idx,
            })
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}/Q{}", self.test_id, self.question_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::COORDINATE_COUNT;

    #[test]
    fn rejects_each_bound() {
        assert_eq!(Coordinate::new(0, 1).unwrap_err().field, Field::TestId);
        assert_eq!(Coordinate::new(1001, 1).unwrap_err().field, Field::TestId);
        assert_eq!(Coordinate::new(1, 0).unwrap_err().field, Field::QuestionIdx);
        assert_eq!(Coordinate::new(1, 101).unwrap_err().field, Field::QuestionIdx);
    }

    #[test]
    fn route_agrees_with_domain_router() {
        for c in Coordinate::test(3).unwrap() {
            assert_eq!(Ok(c.route()), Domain::route(c.question_idx()));
        }
    }

    #[test]
    fn all_is_exhaustive() {
        assert_eq!(Coordinate::all().count(), COORDINATE_COUNT);
        let first = Coordinate::all().next().unwrap();
        assert_eq!((first.test_id(), first.question_idx()), (1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(12, 7).unwrap().to_string(), "T12/Q7");
    }
}
