//! Next figure in two coupled modular count sequences.
//!
//! The count of each glyph follows `base + (k − 1)·step (mod m)`, with a
//! residue of zero read as `m`, so every figure holds at least one of each.
//! Figures 1–4 are shown and figure 5 is asked for.

use super::Slot;
use crate::core::arith::modulo;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::ShapeParams;
use crate::model::vocab::{CountGlyphA, CountGlyphB};
use crate::model::{Question, RuleParameters};

/// Synthesizes a next-figure question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 10]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::ShapeSequence, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let modulus_a = 5 + (t + l) % 5;
    let modulus_b = 6 + (2 * t + l) % 5;
    let base_a = 1 + (t + 2 * l) % modulus_a;
    let base_b = 1 + (2 * t + 3 * l) % modulus_b;
    let step_a = 1 + (3 * t + l) % modulus_a;
    let step_b = 1 + (4 * t + 2 * l) % modulus_b;

    let mut shown_a = [0; 4];
    let mut shown_b = [0; 4];
    for k in 1..=4 {
        shown_a[k - 1] = count(base_a, step_a, modulus_a, k as i64);
        shown_b[k - 1] = count(base_b, step_b, modulus_b, k as i64);
    }

    let params = ShapeParams {
        modulus_a,
        modulus_b,
        base_a,
        base_b,
        step_a,
        step_b,
        glyph_a: CountGlyphA::from_index(t + l),
        glyph_b: CountGlyphB::from_index(2 * t + l),
        shown_a,
        shown_b,
    };

    let (ga, gb) = (params.glyph_a, params.glyph_b);
    let figures = shown_a
        .iter()
        .zip(&shown_b)
        .enumerate()
        .map(|(i, (a, b))| format!("Figure {}: {a} {ga} symbols and {b} {gb} symbols.", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "{header}Consider the sequence of abstract figures:\n\n\
         {figures}\n\n\
         The counts of {ga} and {gb} symbols each follow a modular\n\
         arithmetic rule (but possibly with different moduli and steps).\n\n\
         In Figure 5, how many {ga} symbols and how many {gb} symbols \
         should appear?",
        header = slot.header(),
    );
    Ok(slot.finish(prompt, RuleParameters::ShapeSequence(params)))
}

fn count(base: i64, step: i64, modulus: i64, k: i64) -> i64 {
    match modulo(base + (k - 1) * step, modulus) {
        0 => modulus,
        c => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_never_zero() {
        for t in 1..=50 {
            for l in 1..=10 {
                let RuleParameters::ShapeSequence(p) = synthesize(t, l).unwrap().meta else {
                    panic!("wrong meta");
                };
                assert!(p.shown_a.iter().all(|&c| (1..=p.modulus_a).contains(&c)));
                assert!(p.shown_b.iter().all(|&c| (1..=p.modulus_b).contains(&c)));
            }
        }
    }

    #[test]
    fn four_figures_shown() {
        let q = synthesize(1, 1).unwrap();
        assert_eq!(q.question_idx, 81);
        assert_eq!(q.prompt.matches("Figure ").count(), 5);
        assert!(q.prompt.contains("Figure 4:"));
        assert!(!q.prompt.contains("Figure 5:"));
    }
}
