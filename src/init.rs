//! Boundary initialisation of the score and traceback matrices.
//!
//! Row 0 and column 0 stand for "nothing consumed yet". Interior cells are
//! left [`Trace::Uninitialized`] for the filler.

use crate::alignment_mode::{AlignmentMode, AlignmentParams};
use crate::matrix::{ScoreMatrix, Trace, TracebackMatrix};

/// Fresh matrices for aligning a profile of `len1` columns (horizontal)
/// against one of `len2` columns (vertical).
pub fn init_matrices(
    len1: usize,
    len2: usize,
    params: &AlignmentParams,
) -> (ScoreMatrix, TracebackMatrix) {
    match params.mode {
        AlignmentMode::Local => init_local(len1, len2),
        AlignmentMode::Global => init_global(len1, len2, params.gap_open, params.gap_extend),
        AlignmentMode::SemiGlobal => init_semi_global(len1, len2),
    }
}

/// Smith-Waterman: zero scores, every boundary cell ends the alignment.
pub fn init_local(len1: usize, len2: usize) -> (ScoreMatrix, TracebackMatrix) {
    let (rows, cols) = (len2 + 1, len1 + 1);
    let scores = ScoreMatrix::new(rows, cols, 0.0);
    let mut traceback = TracebackMatrix::new(rows, cols, Trace::Uninitialized);
    for col in 0..cols {
        traceback.set(0, col, Trace::AlignmentEnd);
    }
    for row in 0..rows {
        traceback.set(row, 0, Trace::AlignmentEnd);
    }
    (scores, traceback)
}

/// Needleman-Wunsch: the k-th boundary cell costs `open + (k - 1) * extend`.
pub fn init_global(
    len1: usize,
    len2: usize,
    gap_open: f64,
    gap_extend: f64,
) -> (ScoreMatrix, TracebackMatrix) {
    let (mut scores, traceback) = init_semi_global(len1, len2);
    for row in 1..=len2 {
        scores.set(row, 0, affine_gap_score(row, gap_open, gap_extend));
    }
    for col in 1..=len1 {
        scores.set(0, col, affine_gap_score(col, gap_open, gap_extend));
    }
    (scores, traceback)
}

/// Global alignment with free leading gaps: boundary tags as for
/// [`init_global`], boundary scores left at zero.
pub fn init_semi_global(len1: usize, len2: usize) -> (ScoreMatrix, TracebackMatrix) {
    let (rows, cols) = (len2 + 1, len1 + 1);
    let scores = ScoreMatrix::new(rows, cols, 0.0);
    let mut traceback = TracebackMatrix::new(rows, cols, Trace::Uninitialized);
    traceback.set(0, 0, Trace::AlignmentEnd);
    for row in 1..rows {
        traceback.set(row, 0, Trace::VerticalGap);
    }
    for col in 1..cols {
        traceback.set(0, col, Trace::HorizontalGap);
    }
    (scores, traceback)
}

#[inline]
fn affine_gap_score(length: usize, gap_open: f64, gap_extend: f64) -> f64 {
    -gap_open - (length - 1) as f64 * gap_extend
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interior_uninitialized(traceback: &TracebackMatrix) -> bool {
        (1..traceback.rows())
            .all(|r| (1..traceback.cols()).all(|c| traceback.get(r, c) == Trace::Uninitialized))
    }

    #[test]
    fn test_init_local() {
        let (scores, traceback) = init_local(3, 2);
        assert_eq!((scores.rows(), scores.cols()), (3, 4));
        assert!(scores.iter().all(|&s| s == 0.0));
        assert_eq!(traceback.row(0), &[Trace::AlignmentEnd; 4]);
        assert!((0..3).all(|r| traceback.get(r, 0) == Trace::AlignmentEnd));
        assert!(interior_uninitialized(&traceback));
    }

    #[test]
    fn test_init_global() {
        let (scores, traceback) = init_global(3, 2, 5.0, 2.0);
        assert_eq!(scores.row(0), &[0.0, -5.0, -7.0, -9.0]);
        assert_eq!(scores.get(1, 0), -5.0);
        assert_eq!(scores.get(2, 0), -7.0);
        assert_eq!(
            traceback.row(0),
            &[Trace::AlignmentEnd, Trace::HorizontalGap, Trace::HorizontalGap, Trace::HorizontalGap]
        );
        assert_eq!(traceback.get(1, 0), Trace::VerticalGap);
        assert_eq!(traceback.get(2, 0), Trace::VerticalGap);
        assert!(interior_uninitialized(&traceback));
    }

    #[test]
    fn test_init_semi_global() {
        let (scores, traceback) = init_semi_global(3, 2);
        assert!(scores.iter().all(|&s| s == 0.0));
        assert_eq!(traceback.get(0, 0), Trace::AlignmentEnd);
        assert_eq!(traceback.get(0, 3), Trace::HorizontalGap);
        assert_eq!(traceback.get(2, 0), Trace::VerticalGap);
        assert!(interior_uninitialized(&traceback));
    }

    #[test]
    fn test_origin_score_is_zero_for_every_mode() {
        for mode in [AlignmentMode::Local, AlignmentMode::Global, AlignmentMode::SemiGlobal] {
            let params = AlignmentParams { mode, ..AlignmentParams::default() };
            let (scores, traceback) = init_matrices(4, 4, &params);
            assert_eq!(scores.get(0, 0), 0.0);
            assert_eq!(traceback.get(0, 0), Trace::AlignmentEnd);
        }
    }
}
