use log::debug;

use crate::alignment_mode::AlignmentParams;
use crate::init::init_matrices;
use crate::matrix::{ScoreMatrix, Trace, TracebackMatrix};
use crate::profile::Profile;
use crate::scoring::{substitution_score, SubstitutionMatrix};
use crate::Result;

/// Build and fill the score and traceback matrices for `profile1`
/// (horizontal, columns) against `profile2` (vertical, rows).
///
/// Cells are visited row by row so that the diagonal, upper and left
/// neighbours are always final before a cell is scored. A gap is extended
/// rather than opened when the neighbour it continues from was itself reached
/// by a gap in the same direction.
pub fn compute_score_and_traceback_matrices(
    profile1: &Profile,
    profile2: &Profile,
    params: &AlignmentParams,
    substitution_matrix: &SubstitutionMatrix,
) -> Result<(ScoreMatrix, TracebackMatrix)> {
    let len1 = profile1.len();
    let len2 = profile2.len();
    debug!(
        "filling {}x{} matrices in {:?} mode (open={}, extend={})",
        len2 + 1,
        len1 + 1,
        params.mode,
        params.gap_open,
        params.gap_extend
    );

    let (mut scores, mut traceback) = init_matrices(len1, len2, params);
    let penalize_terminal_gaps = params.mode.penalize_terminal_gaps();
    let new_alignment = (params.mode.new_alignment_score(), Trace::AlignmentEnd);
    let columns1: Vec<Vec<u8>> = profile1.columns().collect();

    for (row, column2) in profile2.columns().enumerate().map(|(i, c)| (i + 1, c)) {
        for (col, column1) in columns1.iter().enumerate().map(|(j, c)| (j + 1, c)) {
            let substitution = substitution_score(
                column1,
                &column2,
                substitution_matrix,
                params.gap_substitution_score,
            )?;
            let diagonal = (scores.get(row - 1, col - 1) + substitution, Trace::Match);

            let above = scores.get(row - 1, col);
            let vertical = if !penalize_terminal_gaps && col == len1 {
                // profile 1 is used up; trailing gaps in it are free
                (above, Trace::VerticalGap)
            } else if traceback.get(row - 1, col) == Trace::VerticalGap {
                (above - params.gap_extend, Trace::VerticalGap)
            } else {
                (above - params.gap_open, Trace::VerticalGap)
            };

            let left = scores.get(row, col - 1);
            let horizontal = if !penalize_terminal_gaps && row == len2 {
                (left, Trace::HorizontalGap)
            } else if traceback.get(row, col - 1) == Trace::HorizontalGap {
                (left - params.gap_extend, Trace::HorizontalGap)
            } else {
                (left - params.gap_open, Trace::HorizontalGap)
            };

            let (score, trace) = first_largest(&[new_alignment, horizontal, diagonal, vertical]);
            scores.set(row, col, score);
            traceback.set(row, col, trace);
        }
    }

    Ok((scores, traceback))
}

/// The first candidate holding the highest score.
///
/// Ties resolve to the earliest entry, so the caller's candidate order
/// (new alignment, horizontal gap, match, vertical gap) decides between
/// equal-scoring paths.
fn first_largest(candidates: &[(f64, Trace)]) -> (f64, Trace) {
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.0 > best.0 {
            best = candidate;
        }
    }
    best
}
