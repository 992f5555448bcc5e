//! The nine puzzle domains and the question-index router.
//!
//! Each question index in `[1, 100]` belongs to exactly one domain. The
//! domains own contiguous, non-overlapping blocks that together partition the
//! whole test, so routing is a table lookup.

use core::fmt;
use core::ops::RangeInclusive;

use super::constants::{DOMAIN_COUNT, QUESTIONS_PER_TEST};
use crate::error::{Field, OutOfRangeError, Result};

/// One of the nine puzzle domains.
///
/// # Blocks
///
/// | Domain | Questions | Size |
/// |--------|-----------|------|
/// | `NumericSequence` | 1–15 | 15 |
/// | `NestedLogic` | 16–25 | 10 |
/// | `ArrowCycle` | 26–35 | 10 |
/// | `LetterAnalogy` | 36–45 | 10 |
/// | `WordArithmetic` | 46–55 | 10 |
/// | `RavenMatrix` | 56–70 | 15 |
/// | `BaseConversion` | 71–80 | 10 |
/// | `ShapeSequence` | 81–90 | 10 |
/// | `SelfReferential` | 91–100 | 10 |
///
/// # Example
///
/// ```
/// use mensa::Domain;
///
/// let (domain, local) = Domain::route(57).unwrap();
/// assert_eq!(domain, Domain::RavenMatrix);
/// assert_eq!(local, 2);
/// assert_eq!(domain.slug(), "raven_matrix_hard");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Domain {
    /// Numeric sequences mixing linear, quadratic and parity growth.
    NumericSequence = 0,
    /// Nested propositional logic over three atoms.
    NestedLogic = 1,
    /// Two coupled arrow cycles indexed at different speeds.
    ArrowCycle = 2,
    /// Letter analogies under an affine map on alphabet positions.
    LetterAnalogy = 3,
    /// Layered arithmetic word problems.
    WordArithmetic = 4,
    /// Raven-style 3×3 figure matrices.
    RavenMatrix = 5,
    /// One integer written in three bases.
    BaseConversion = 6,
    /// Next figure in two coupled modular count sequences.
    ShapeSequence = 7,
    /// Counts over the test's own question numbers.
    SelfReferential = 8,
}

/// First question index of each domain, in canonical order.
const BLOCK_STARTS: [u32; DOMAIN_COUNT] = [1, 16, 26, 36, 46, 56, 71, 81, 91];

/// Last question index of each domain, in canonical order.
const BLOCK_ENDS: [u32; DOMAIN_COUNT] = [15, 25, 35, 45, 55, 70, 80, 90, 100];

impl Domain {
    /// All domains in question order.
    pub const ALL: [Self; DOMAIN_COUNT] = [
        Self::NumericSequence,
        Self::NestedLogic,
        Self::ArrowCycle,
        Self::LetterAnalogy,
        Self::WordArithmetic,
        Self::RavenMatrix,
        Self::BaseConversion,
        Self::ShapeSequence,
        Self::SelfReferential,
    ];

    /// Routes a question index to its domain and 1-based local index.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `question_idx ∉ [1, 100]`.
    pub fn route(question_idx: u32) -> Result<(Self, u32)> {
        OutOfRangeError::check(Field::QuestionIdx, question_idx, 1, QUESTIONS_PER_TEST)?;
        for domain in Self::ALL {
            let start = BLOCK_STARTS[domain.index()];
            if question_idx <= BLOCK_ENDS[domain.index()] {
                return Ok((domain, question_idx - start + 1));
            }
        }
        // BLOCK_ENDS ends at QUESTIONS_PER_TEST, so the loop always returns.
        Err(OutOfRangeError {
            field: Field::QuestionIdx,
            value: question_idx,
            min: 1,
            max: QUESTIONS_PER_TEST,
        })
    }

    /// Position of this domain in [`Domain::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The block of question indices owned by this domain.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<u32> {
        BLOCK_STARTS[self.index()]..=BLOCK_ENDS[self.index()]
    }

    /// Number of questions in this domain's block.
    #[must_use]
    pub const fn size(self) -> u32 {
        BLOCK_ENDS[self.index()] - BLOCK_STARTS[self.index()] + 1
    }

    /// Converts a local index back to the test-wide question index.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `local_idx ∉ [1, size]`.
    pub const fn question_idx(self, local_idx: u32) -> Result<u32> {
        match OutOfRangeError::check(Field::LocalIdx, local_idx, 1, self.size()) {
            Ok(local) => Ok(BLOCK_STARTS[self.index()] + local - 1),
            Err(e) => Err(e),
        }
    }

    /// Validates a local index against this domain's block size.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `local_idx ∉ [1, size]`.
    pub const fn check_local(self, local_idx: u32) -> Result<u32> {
        OutOfRangeError::check(Field::LocalIdx, local_idx, 1, self.size())
    }

    /// Stable machine tag, as carried by generated questions.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::NumericSequence => "numeric_sequence_hard",
            Self::NestedLogic => "nested_logic_hard",
            Self::ArrowCycle => "dual_arrow_cycle_hard",
            Self::LetterAnalogy => "letter_analogy_hard",
            Self::WordArithmetic => "word_arithmetic_hard",
            Self::RavenMatrix => "raven_matrix_hard",
            Self::BaseConversion => "base_conversion_hard",
            Self::ShapeSequence => "shape_sequence_coupled_modulo_hard",
            Self::SelfReferential => "self_referential_hard",
        }
    }

    /// Human-readable title used in prompt headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NumericSequence => "Numeric sequence – hard",
            Self::NestedLogic => "Nested logic – hard",
            Self::ArrowCycle => "Dual-arrow cycle – hard",
            Self::LetterAnalogy => "Letter analogy – hard",
            Self::WordArithmetic => "Layered word problem – hard",
            Self::RavenMatrix => "Raven-style matrix – hard",
            Self::BaseConversion => "Base conversion – hard",
            Self::ShapeSequence => "Next figure – coupled modulo",
            Self::SelfReferential => "Self-referential – hard",
        }
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.slug(), self.range())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Domain {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_sum_to_test_length() {
        let total: u32 = Domain::ALL.iter().map(|d| d.size()).sum();
        assert_eq!(total, QUESTIONS_PER_TEST);
    }

    #[test]
    fn blocks_are_contiguous() {
        assert_eq!(*Domain::ALL[0].range().start(), 1);
        for pair in Domain::ALL.windows(2) {
            assert_eq!(pair[0].range().end() + 1, *pair[1].range().start());
        }
        assert_eq!(*Domain::SelfReferential.range().end(), QUESTIONS_PER_TEST);
    }

    #[test]
    fn every_index_routes_once() {
        for q in 1..=QUESTIONS_PER_TEST {
            let owners: Vec<_> = Domain::ALL.iter().filter(|d| d.range().contains(&q)).collect();
            assert_eq!(owners.len(), 1, "question {q}");
            let (domain, local) = Domain::route(q).unwrap();
            assert_eq!(domain, *owners[0]);
            assert!((1..=domain.size()).contains(&local));
            assert_eq!(domain.question_idx(local), Ok(q));
        }
    }

    #[test]
    fn route_boundaries() {
        assert_eq!(Domain::route(1), Ok((Domain::NumericSequence, 1)));
        assert_eq!(Domain::route(15), Ok((Domain::NumericSequence, 15)));
        assert_eq!(Domain::route(16), Ok((Domain::NestedLogic, 1)));
        assert_eq!(Domain::route(70), Ok((Domain::RavenMatrix, 15)));
        assert_eq!(Domain::route(95), Ok((Domain::SelfReferential, 5)));
        assert_eq!(Domain::route(100), Ok((Domain::SelfReferential, 10)));
    }

    #[test]
    fn route_rejects_out_of_range() {
        for q in [0, 101, u32::MAX] {
            let err = Domain::route(q).unwrap_err();
            assert_eq!(err.field, Field::QuestionIdx);
            assert_eq!(err.value, q);
        }
    }

    #[test]
    fn local_index_bounds() {
        assert!(Domain::NumericSequence.check_local(15).is_ok());
        assert!(Domain::NestedLogic.check_local(11).is_err());
        assert!(Domain::RavenMatrix.check_local(0).is_err());
        assert!(Domain::BaseConversion.question_idx(11).is_err());
    }

    #[test]
    fn slugs_unique() {
        let mut slugs = std::collections::HashSet::new();
        for d in Domain::ALL {
            assert!(slugs.insert(d.slug()), "duplicate slug {}", d.slug());
        }
    }
}
