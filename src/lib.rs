use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod blosum;
pub mod config;
pub mod fill;
pub mod init;
pub mod matrix;
pub mod profile;
pub mod result;
pub mod scoring;
pub mod traceback;

pub use crate::alignment_mode::{AlignmentMode, AlignmentParams};
pub use crate::blosum::BLOSUM50;
pub use crate::config::{AlignerConfig, MatrixSource};
pub use crate::profile::{Profile, ProfileSequence, SequenceKind};
pub use crate::result::{AlignedSequence, PairwiseAlignment};
pub use crate::scoring::SubstitutionMatrix;

use crate::fill::compute_score_and_traceback_matrices;
use crate::traceback::traceback;

pub const DEFAULT_GAP_OPEN: f64 = 5.0;
pub const DEFAULT_GAP_EXTEND: f64 = 2.0;
pub const DEFAULT_GAP_SUBSTITUTION_SCORE: f64 = 0.0;

// Nucleotide defaults follow the NCBI BLAST server
pub const NUCLEOTIDE_ALPHABET: &[u8] = b"ACGTU";
pub const NUCLEOTIDE_GAP_OPEN: f64 = 5.0;
pub const NUCLEOTIDE_GAP_EXTEND: f64 = 2.0;
pub const NUCLEOTIDE_LOCAL_MATCH: f64 = 2.0;
pub const NUCLEOTIDE_LOCAL_MISMATCH: f64 = -3.0;
pub const NUCLEOTIDE_GLOBAL_MATCH: f64 = 1.0;
pub const NUCLEOTIDE_GLOBAL_MISMATCH: f64 = -2.0;

pub const PROTEIN_GAP_OPEN: f64 = 11.0;
pub const PROTEIN_GAP_EXTEND: f64 = 1.0;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error(
        "symbol(s) {symbols} not found in the substitution matrix; \
         check that the matrix suits the sequence type and the input has no invalid symbols"
    )]
    MissingSubstitution { symbols: String },
    #[error("traceback reached an uninitialized cell at ({row}, {col})")]
    UninitializedTraceback { row: usize, col: usize },
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
    #[error("profile contains no sequences")]
    EmptyProfile,
    #[error("profile sequence {id} has length {found}, expected {expected}")]
    RaggedProfile {
        id: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, AlignerError>;

/// Affine-gap dynamic programming aligner over profiles.
///
/// Each call to [`PairwiseAligner::align`] builds its own matrices; nothing
/// is shared between calls.
#[derive(Debug, Clone)]
pub struct PairwiseAligner<'m> {
    matrix: &'m SubstitutionMatrix,
    params: AlignmentParams,
}

impl<'m> PairwiseAligner<'m> {
    pub fn new(matrix: &'m SubstitutionMatrix) -> Self {
        Self {
            matrix,
            params: AlignmentParams::default(),
        }
    }

    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.params.mode = mode;
        self
    }

    pub fn with_gap_penalties(mut self, gap_open: f64, gap_extend: f64) -> Self {
        self.params.gap_open = gap_open;
        self.params.gap_extend = gap_extend;
        self
    }

    /// Score for pairing any symbol with a gap inside a profile column.
    pub fn with_gap_substitution_score(mut self, score: f64) -> Self {
        self.params.gap_substitution_score = score;
        self
    }

    pub fn params(&self) -> &AlignmentParams {
        &self.params
    }

    /// Align `profile1` (matrix columns) against `profile2` (matrix rows).
    ///
    /// Local alignments end at the first highest-scoring cell in row-major
    /// order; global alignments end in the bottom-right corner.
    pub fn align(&self, profile1: &Profile, profile2: &Profile) -> Result<PairwiseAlignment> {
        let (scores, traceback_matrix) =
            compute_score_and_traceback_matrices(profile1, profile2, &self.params, self.matrix)?;

        let (end_row, end_col) = if self.params.mode.is_local() {
            scores.argmax()
        } else {
            (scores.rows() - 1, scores.cols() - 1)
        };

        let result = traceback(&traceback_matrix, &scores, profile1, profile2, end_row, end_col)?;
        debug!(
            "{:?} alignment scored {} over {} columns",
            self.params.mode,
            result.score,
            result.aligned1.first().map_or(0, AlignedSequence::len)
        );

        Ok(PairwiseAlignment {
            start_end_positions: [
                span(result.start_col, end_col),
                span(result.start_row, end_row),
            ],
            aligned1: result.aligned1,
            aligned2: result.aligned2,
            score: result.score,
        })
    }
}

/// Inclusive input coordinates covered by matrix indices `start..end`.
fn span(start: usize, end: usize) -> Option<(usize, usize)> {
    (end > start).then(|| (start, end - 1))
}

/// Smith-Waterman local alignment of two single sequences.
pub fn local_pairwise_align(
    seq1: &Profile,
    seq2: &Profile,
    gap_open: f64,
    gap_extend: f64,
    substitution_matrix: &SubstitutionMatrix,
) -> Result<PairwiseAlignment> {
    for profile in [seq1, seq2] {
        if profile.sequence_count() > 1 {
            return Err(AlignerError::UnsupportedInput(format!(
                "local alignment takes single sequences, got a profile of {}",
                profile.sequence_count()
            )));
        }
    }
    PairwiseAligner::new(substitution_matrix)
        .with_alignment_mode(AlignmentMode::Local)
        .with_gap_penalties(gap_open, gap_extend)
        .align(seq1, seq2)
}

/// Needleman-Wunsch global alignment of two sequences or profiles.
///
/// With `penalize_terminal_gaps` unset, gaps before the first or after the
/// last column of either input are free, which avoids long penalised gaps
/// when the inputs differ in length.
pub fn global_pairwise_align(
    seq1: &Profile,
    seq2: &Profile,
    gap_open: f64,
    gap_extend: f64,
    substitution_matrix: &SubstitutionMatrix,
    penalize_terminal_gaps: bool,
) -> Result<PairwiseAlignment> {
    PairwiseAligner::new(substitution_matrix)
        .with_alignment_mode(AlignmentMode::global(penalize_terminal_gaps))
        .with_gap_penalties(gap_open, gap_extend)
        .align(seq1, seq2)
}

pub fn local_pairwise_align_nucleotide(seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
    AlignerConfig::nucleotide_local().local_align(seq1, seq2)
}

/// Local alignment under BLOSUM50 with gap open 11 and extend 1.
pub fn local_pairwise_align_protein(seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
    AlignerConfig::protein().local_align(seq1, seq2)
}

pub fn global_pairwise_align_nucleotide(seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
    AlignerConfig::nucleotide_global().global_align(seq1, seq2)
}

pub fn global_pairwise_align_protein(seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
    AlignerConfig::protein().global_align(seq1, seq2)
}
