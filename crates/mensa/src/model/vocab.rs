//! Symbol vocabularies shared by prompts and answers.
//!
//! These are fixed tables, not derived parameters: arrows, matrix features,
//! figure glyphs, logic statement forms and self-referential count modes.
//! Both the synthesizer and the oracle index into them with indices they
//! compute on their own.

use core::fmt;

/// Defines a cyclic symbol enum with `CYCLE`, `from_index` and `symbol`.
macro_rules! cyclic_symbols {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $symbol:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every symbol in cycle order.
            pub const CYCLE: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the symbol at `index`, reduced modulo the cycle length.
            #[must_use]
            pub fn from_index(index: i64) -> Self {
                let len = Self::CYCLE.len() as i64;
                // rem_euclid keeps the index in [0, len).
                Self::CYCLE[index.rem_euclid(len) as usize]
            }

            /// Position of this symbol in [`Self::CYCLE`].
            #[must_use]
            pub fn index(self) -> usize {
                self as usize
            }

            /// The glyph rendered in prompts and answers.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

cyclic_symbols! {
    /// Primary arrow cycle: ↑, →, ↓, ←.
    PrimaryArrow {
        /// ↑
        Up => "↑",
        /// →
        Right => "→",
        /// ↓
        Down => "↓",
        /// ←
        Left => "←",
    }
}

cyclic_symbols! {
    /// Secondary (diagonal) arrow cycle: ↖, ↗, ↘, ↙.
    SecondaryArrow {
        /// ↖
        UpLeft => "↖",
        /// ↗
        UpRight => "↗",
        /// ↘
        DownRight => "↘",
        /// ↙
        DownLeft => "↙",
    }
}

cyclic_symbols! {
    /// Matrix figure shape.
    Shape {
        /// ▲
        Triangle => "▲",
        /// ■
        Square => "■",
        /// ●
        Circle => "●",
        /// ★
        Star => "★",
    }
}

cyclic_symbols! {
    /// Matrix figure fill level.
    Fill {
        /// ○
        Empty => "○",
        /// ◐
        Half => "◐",
        /// ●
        Full => "●",
    }
}

cyclic_symbols! {
    /// Matrix figure orientation.
    Orientation {
        /// 0°
        Deg0 => "0°",
        /// 90°
        Deg90 => "90°",
        /// 180°
        Deg180 => "180°",
        /// 270°
        Deg270 => "270°",
    }
}

cyclic_symbols! {
    /// Glyph counted as "shape A" in next-figure sequences.
    CountGlyphA {
        /// ●
        Dot => "●",
        /// ■
        Block => "■",
        /// ▲
        Peak => "▲",
    }
}

cyclic_symbols! {
    /// Glyph counted as "shape B" in next-figure sequences.
    CountGlyphB {
        /// ◆
        Diamond => "◆",
        /// ✚
        Cross => "✚",
        /// ✕
        Saltire => "✕",
    }
}

/// One cell of a Raven-style matrix.
///
/// Renders as shape, fill, then orientation in parentheses: `▲○(0°)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Figure {
    /// Shape feature.
    pub shape: Shape,
    /// Fill feature.
    pub fill: Fill,
    /// Orientation feature.
    pub orientation: Orientation,
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", self.shape, self.fill, self.orientation)
    }
}

/// The four nested statement templates over atoms `p`, `q`, `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LogicForm {
    /// `(p AND q) OR (NOT r)`
    AndOrNot,
    /// `IF (p AND r) THEN (q XOR r)`
    IfAndThenXor,
    /// `(p XOR q) AND (q OR r)`
    XorAndOr,
    /// `IF (p OR q) THEN (NOT p AND r)`
    IfOrThenNotAnd,
}

impl LogicForm {
    /// Every template, indexed by selector value.
    pub const ALL: [Self; 4] = [
        Self::AndOrNot,
        Self::IfAndThenXor,
        Self::XorAndOr,
        Self::IfOrThenNotAnd,
    ];

    /// Returns the template for a selector, reduced modulo 4.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// The statement exactly as printed in prompts.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::AndOrNot => "(p AND q) OR (NOT r)",
            Self::IfAndThenXor => "IF (p AND r) THEN (q XOR r)",
            Self::XorAndOr => "(p XOR q) AND (q OR r)",
            Self::IfOrThenNotAnd => "IF (p OR q) THEN (NOT p AND r)",
        }
    }
}

impl fmt::Display for LogicForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Which property a self-referential question counts.
///
/// Every mode tests containment of a decimal digit `d`; three of them
/// combine it with a second property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CountMode {
    /// Contains `d`.
    Digit,
    /// Contains `d` and is even.
    DigitAndEven,
    /// Contains `d` and is prime.
    DigitAndPrime,
    /// Contains `d` or is divisible by 9.
    DigitOrNine,
}

impl CountMode {
    /// Every mode, indexed by selector value.
    pub const ALL: [Self; 4] = [
        Self::Digit,
        Self::DigitAndEven,
        Self::DigitAndPrime,
        Self::DigitOrNine,
    ];

    /// Returns the mode for a selector, reduced modulo 4.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// Condition clause used in prompts, completed with the digit.
    #[must_use]
    pub fn describe(self, digit: u32) -> String {
        match self {
            Self::Digit => {
                format!("contain the digit {digit} at least once (in decimal notation)")
            }
            Self::DigitAndEven => {
                format!("contain the digit {digit} at least once AND are even numbers")
            }
            Self::DigitAndPrime => {
                format!("contain the digit {digit} at least once AND are prime numbers")
            }
            Self::DigitOrNine => {
                format!("contain the digit {digit} at least once OR are divisible by 9")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_wrap_negative_indices() {
        assert_eq!(PrimaryArrow::from_index(-1), PrimaryArrow::Left);
        assert_eq!(SecondaryArrow::from_index(-26), SecondaryArrow::DownRight);
        assert_eq!(Fill::from_index(4), Fill::Half);
    }

    #[test]
    fn index_round_trips() {
        for (i, s) in Shape::CYCLE.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Shape::from_index(i as i64), *s);
        }
    }

    #[test]
    fn figure_display() {
        let fig = Figure {
            shape: Shape::Star,
            fill: Fill::Half,
            orientation: Orientation::Deg270,
        };
        assert_eq!(fig.to_string(), "★◐(270°)");
    }

    #[test]
    fn logic_texts() {
        assert_eq!(LogicForm::from_index(5), LogicForm::IfAndThenXor);
        assert_eq!(LogicForm::XorAndOr.to_string(), "(p XOR q) AND (q OR r)");
    }

    #[test]
    fn count_mode_clause() {
        assert_eq!(
            CountMode::DigitOrNine.describe(4),
            "contain the digit 4 at least once OR are divisible by 9"
        );
    }
}
