//! Rule parameters published as question metadata.
//!
//! A question's `meta` holds every integer that determines its hidden slot.
//! Test-takers never need it; auditors can recompute the concealed value from
//! it without touching the prompt text.

use super::vocab::{CountGlyphA, CountGlyphB, CountMode, LogicForm};
use crate::core::domain::Domain;

/// Numeric sequence: `a_k = base + alpha·k + beta·k² + parity offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SequenceParams {
    /// Constant term.
    pub base: i64,
    /// Linear coefficient.
    pub alpha: i64,
    /// Quadratic coefficient.
    pub beta: i64,
    /// Added to terms at even positions `k`.
    pub even_offset: i64,
    /// Added to terms at odd positions `k`.
    pub odd_offset: i64,
    /// Number of terms shown.
    pub length: usize,
    /// 0-based position of the blank.
    pub missing_position: usize,
}

/// Nested logic: atom truth values and the statement template.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LogicParams {
    /// `test_id` is even.
    pub p: bool,
    /// `local_idx` is a multiple of 3.
    pub q: bool,
    /// `test_id + local_idx` is prime-like.
    pub r: bool,
    /// The sum tested by `r`.
    pub r_operand: i64,
    /// Statement template.
    pub form: LogicForm,
}

/// Dual arrow cycles: 1-based positions in the two cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrowParams {
    /// `N₁ = 7·test_id + 11·local_idx`.
    pub n1: i64,
    /// `N₂ = 5·test_id − 3·local_idx` (may be negative).
    pub n2: i64,
}

/// Letter analogy: the affine map `f(k) = a·k + b (mod 26)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LetterParams {
    /// Odd multiplier in `[1, 25]`.
    pub a: i64,
    /// Offset in `[0, 25]`.
    pub b: i64,
    /// Position of the example's input letter.
    pub example_input: i64,
    /// Position of the queried letter.
    pub query_input: i64,
}

/// Layered word problem quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordParams {
    /// Starting samples.
    pub base_items: i64,
    /// Samples created per day.
    pub daily_gain: i64,
    /// Days of creation.
    pub days: i64,
    /// Multiplier applied after the creation phase.
    pub bonus_factor: i64,
    /// Samples discarded before the split.
    pub loss: i64,
    /// Teams sharing the remainder.
    pub groups: i64,
}

/// Raven matrix: seed feature indices, drift hint and the blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixParams {
    /// Shape index of cell (0, 0).
    pub shape_seed: i64,
    /// Orientation index of cell (0, 0).
    pub orientation_seed: i64,
    /// Fill index of cell (0, 0).
    pub fill_seed: i64,
    /// Selects the hint sentence.
    pub rule_type: usize,
    /// Row of the blank cell.
    pub missing_row: i64,
    /// Column of the blank cell.
    pub missing_col: i64,
}

/// Base conversion: the three bases and the rendered representations.
///
/// The decimal value is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseParams {
    /// First base, `[5, 16]`.
    pub base_x: u32,
    /// Second base, `[5, 16]`, never equal to `base_x`.
    pub base_y: u32,
    /// Third base, `[5, 16]`.
    pub base_z: u32,
    /// `N` in `base_x`.
    pub repr_x: String,
    /// `N` in `base_y`.
    pub repr_y: String,
    /// `N` in `base_z`.
    pub repr_z: String,
}

/// Next-figure counts: two linear progressions under different moduli.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShapeParams {
    /// Modulus for shape A, `[5, 9]`.
    pub modulus_a: i64,
    /// Modulus for shape B, `[6, 10]`.
    pub modulus_b: i64,
    /// Shape A count seed.
    pub base_a: i64,
    /// Shape B count seed.
    pub base_b: i64,
    /// Shape A step.
    pub step_a: i64,
    /// Shape B step.
    pub step_b: i64,
    /// Glyph counted as shape A.
    pub glyph_a: CountGlyphA,
    /// Glyph counted as shape B.
    pub glyph_b: CountGlyphB,
    /// Shape A counts for figures 1–4.
    pub shown_a: [i64; 4],
    /// Shape B counts for figures 1–4.
    pub shown_b: [i64; 4],
}

/// Self-referential count: digit, mode and the scanned id range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountParams {
    /// Decimal digit `d ∈ [0, 9]`.
    pub digit: u32,
    /// Counted property.
    pub mode: CountMode,
    /// Inclusive lower bound of the scanned ids.
    pub first_id: u32,
    /// Inclusive upper bound of the scanned ids.
    pub last_id: u32,
}

/// Per-domain rule parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RuleParameters {
    /// See [`SequenceParams`].
    NumericSequence(SequenceParams),
    /// See [`LogicParams`].
    NestedLogic(LogicParams),
    /// See [`ArrowParams`].
    ArrowCycle(ArrowParams),
    /// See [`LetterParams`].
    LetterAnalogy(LetterParams),
    /// See [`WordParams`].
    WordArithmetic(WordParams),
    /// See [`MatrixParams`].
    RavenMatrix(MatrixParams),
    /// See [`BaseParams`].
    BaseConversion(BaseParams),
    /// See [`ShapeParams`].
    ShapeSequence(ShapeParams),
    /// See [`CountParams`].
    SelfReferential(CountParams),
}

impl RuleParameters {
    /// The domain these parameters belong to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::NumericSequence(_) => Domain::NumericSequence,
            Self::NestedLogic(_) => Domain::NestedLogic,
            Self::ArrowCycle(_) => Domain::ArrowCycle,
            Self::LetterAnalogy(_) => Domain::LetterAnalogy,
            Self::WordArithmetic(_) => Domain::WordArithmetic,
            Self::RavenMatrix(_) => Domain::RavenMatrix,
            Self::BaseConversion(_) => Domain::BaseConversion,
            Self::ShapeSequence(_) => Domain::ShapeSequence,
            Self::SelfReferential(_) => Domain::SelfReferential,
        }
    }
}
