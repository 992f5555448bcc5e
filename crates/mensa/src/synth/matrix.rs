//! Raven-style 3×3 matrices.
//!
//! Each cell is a (shape, fill, orientation) triple. From the seed cell at
//! (0, 0) every feature drifts by a fixed modular delta per row and per
//! column. One of three cells is blanked.

use super::Slot;
use crate::core::domain::Domain;
use crate::error::Result;
use crate::model::params::MatrixParams;
use crate::model::vocab::{Figure, Fill, Orientation, Shape};
use crate::model::{Question, RuleParameters};

/// Hint sentences, selected by `rule_type`.
pub const HINTS: [&str; 4] = [
    "Row-wise, orientation changes in fixed increments.",
    "Column-wise, fill levels behave like addition modulo 3.",
    "Shapes drift systematically across rows and columns.",
    "Some rows can be interpreted as an 'xor' of feature patterns.",
];

/// Candidate blank cells, selected by `(test_id + local_idx) mod 3`.
const BLANKS: [(i64, i64); 3] = [(2, 2), (1, 1), (0, 2)];

/// Synthesizes a Raven-matrix question.
///
/// # Errors
///
/// Returns [`OutOfRangeError`](crate::OutOfRangeError) for an invalid
/// `test_id` or a `local_idx ∉ [1, 15]`.
pub fn synthesize(test_id: u32, local_idx: u32) -> Result<Question> {
    let slot = Slot::new(Domain::RavenMatrix, test_id, local_idx)?;
    let (t, l) = (slot.t(), slot.l());

    let (missing_row, missing_col) = BLANKS[((t + l) % 3) as usize];
    let params = MatrixParams {
        shape_seed: (t + l) % 4,
        orientation_seed: (2 * t + l) % 4,
        fill_seed: (3 * t + 2 * l) % 3,
        rule_type: ((t + 2 * l) % 4) as usize,
        missing_row,
        missing_col,
    };

    let grid = (0..3)
        .map(|r| {
            (0..3)
                .map(|c| {
                    if (r, c) == (missing_row, missing_col) {
                        " ? ".to_owned()
                    } else {
                        cell(&params, r, c).to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "{header}Below is a 3×3 grid of abstract figures; one cell is replaced by '?'.\n\n\
         {grid}\n\n\
         The grid obeys a consistent rule combining row and column changes\n\
         in shape, orientation, and fill.\n\
         Which figure should replace '?'?\n\n\
         Hint: {hint}",
        header = slot.header(),
        hint = HINTS[params.rule_type],
    );
    Ok(slot.finish(prompt, RuleParameters::RavenMatrix(params)))
}

fn cell(p: &MatrixParams, r: i64, c: i64) -> Figure {
    Figure {
        shape: Shape::from_index(p.shape_seed + r + 2 * c),
        fill: Fill::from_index(p.fill_seed + r + c),
        orientation: Orientation::from_index(p.orientation_seed + 2 * r + c),
    }
}
