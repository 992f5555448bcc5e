//! Two coupled arrow cycles read at different speeds.
//!
//! The primary cycle `↑ → ↓ ←` is read at position `N₁ = 7t + 11l` and the
//! secondary cycle `↖ ↗ ↘ ↙` at `N₂ = 5t − 3l`. Positions are 1-based and
//! `N₂` may be negative; the cycles extend in both directions.

use super::Slot;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::ArrowParams;
use crate::model::vocab::{PrimaryArrow, SecondaryArrow};
use crate::model::{Question, RuleParameters};

/// Synthesizes a dual-arrow-cycle question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::ArrowCycle, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let params = ArrowParams {
        n1: 7 * t + 11 * l,
        n2: 5 * t - 3 * l,
    };

    let prompt = format!(
        "{header}Consider two infinite repeating sequences:\n  \
         Primary:   {primary} (then repeats)\n  \
         Secondary: {secondary} (then repeats)\n\n\
         At position N₁ = 7·{t} + 11·{l} in the Primary sequence,\n\
         and position N₂ = 5·{t} − 3·{l} in the Secondary sequence,\n\
         a pair of arrows (A, B) is observed.\n\n\
         What is the ordered pair (A, B)?",
        header = slot.header(),
        primary = join(PrimaryArrow::CYCLE.iter().map(|a| a.symbol())),
        secondary = join(SecondaryArrow::CYCLE.iter().map(|a| a.symbol())),
    );
    Ok(slot.finish(prompt, RuleParameters::ArrowCycle(params)))
}

fn join<'a>(symbols: impl Iterator<Item = &'a str>) -> String {
    symbols.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_in_meta() {
        let q = synthesize(1, 10).unwrap();
        assert_eq!(q.question_idx, 35);
        assert_eq!(
            q.meta,
            RuleParameters::ArrowCycle(ArrowParams { n1: 117, n2: -25 })
        );
    }

    #[test]
    fn prompt_lists_both_cycles() {
        let q = synthesize(3, 2).unwrap();
        assert!(q.prompt.contains("  Primary:   ↑, →, ↓, ← (then repeats)\n"));
        assert!(q.prompt.contains("  Secondary: ↖, ↗, ↘, ↙ (then repeats)\n"));
        assert!(q.prompt.contains("N₁ = 7·3 + 11·2"));
        assert!(q.prompt.contains("N₂ = 5·3 − 3·2"));
    }
}
