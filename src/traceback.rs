use log::trace;

use crate::matrix::{ScoreMatrix, Trace, TracebackMatrix};
use crate::profile::{Profile, GAP_CHAR};
use crate::result::AlignedSequence;
use crate::{AlignerError, Result};

/// Aligned members of both profiles plus where the walk stopped.
#[derive(Debug, Clone)]
pub struct TracebackResult {
    pub aligned1: Vec<AlignedSequence>,
    pub aligned2: Vec<AlignedSequence>,
    pub score: f64,
    /// Column (profile 1) at which the walk reached an alignment end.
    pub start_col: usize,
    /// Row (profile 2) at which the walk reached an alignment end.
    pub start_row: usize,
}

/// Walk the traceback matrix back from `(start_row, start_col)` until an
/// [`Trace::AlignmentEnd`] cell is reached.
///
/// The returned score is the score-matrix value at the starting cell.
pub fn traceback(
    traceback_matrix: &TracebackMatrix,
    score_matrix: &ScoreMatrix,
    profile1: &Profile,
    profile2: &Profile,
    start_row: usize,
    start_col: usize,
) -> Result<TracebackResult> {
    let mut aligned1: Vec<Vec<u8>> = vec![Vec::new(); profile1.sequence_count()];
    let mut aligned2: Vec<Vec<u8>> = vec![Vec::new(); profile2.sequence_count()];

    let mut row = start_row;
    let mut col = start_col;
    let score = score_matrix.get(row, col);

    loop {
        match traceback_matrix.get(row, col) {
            Trace::Match => {
                push_column(&mut aligned1, profile1, col - 1);
                push_column(&mut aligned2, profile2, row - 1);
                row -= 1;
                col -= 1;
            }
            Trace::VerticalGap => {
                push_gap(&mut aligned1);
                push_column(&mut aligned2, profile2, row - 1);
                row -= 1;
            }
            Trace::HorizontalGap => {
                push_column(&mut aligned1, profile1, col - 1);
                push_gap(&mut aligned2);
                col -= 1;
            }
            Trace::AlignmentEnd => break,
            Trace::Uninitialized => {
                return Err(AlignerError::UninitializedTraceback { row, col });
            }
        }
    }

    trace!(
        "traceback from ({start_row}, {start_col}) to ({row}, {col}), {} columns",
        aligned1.first().map_or(0, Vec::len)
    );

    let offset = profile1.sequence_count();
    Ok(TracebackResult {
        aligned1: finish(aligned1, profile1, 0),
        aligned2: finish(aligned2, profile2, offset),
        score,
        start_col: col,
        start_row: row,
    })
}

fn push_column(aligned: &mut [Vec<u8>], profile: &Profile, index: usize) {
    for (out, seq) in aligned.iter_mut().zip(profile.sequences()) {
        out.push(seq.symbols()[index]);
    }
}

fn push_gap(aligned: &mut [Vec<u8>]) {
    for out in aligned.iter_mut() {
        out.push(GAP_CHAR);
    }
}

/// Reverse the end-to-start columns and attach identifiers, falling back to
/// the member's position (shifted by `id_offset`) when none was given.
fn finish(aligned: Vec<Vec<u8>>, profile: &Profile, id_offset: usize) -> Vec<AlignedSequence> {
    aligned
        .into_iter()
        .zip(profile.sequences())
        .enumerate()
        .map(|(i, (mut symbols, seq))| {
            symbols.reverse();
            AlignedSequence {
                id: seq.id().map_or_else(|| (i + id_offset).to_string(), str::to_owned),
                kind: seq.kind(),
                symbols,
            }
        })
        .collect()
}
