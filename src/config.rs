use std::borrow::Cow;

use crate::blosum::BLOSUM50;
use crate::profile::Profile;
use crate::result::PairwiseAlignment;
use crate::scoring::SubstitutionMatrix;
use crate::{
    global_pairwise_align, local_pairwise_align, Result, NUCLEOTIDE_ALPHABET, NUCLEOTIDE_GAP_EXTEND,
    NUCLEOTIDE_GAP_OPEN, NUCLEOTIDE_GLOBAL_MATCH, NUCLEOTIDE_GLOBAL_MISMATCH, NUCLEOTIDE_LOCAL_MATCH,
    NUCLEOTIDE_LOCAL_MISMATCH, PROTEIN_GAP_EXTEND, PROTEIN_GAP_OPEN,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MatrixSource {
    /// Match/mismatch scores over [`NUCLEOTIDE_ALPHABET`].
    Identity { match_score: f64, mismatch_score: f64 },
    Blosum50,
    Custom(SubstitutionMatrix),
}

/// Default penalties and scoring for one sequence type.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignerConfig {
    pub gap_open: f64,
    pub gap_extend: f64,
    pub matrix: MatrixSource,
    /// Global alignment only.
    pub penalize_terminal_gaps: bool,
}

impl AlignerConfig {
    pub fn nucleotide_local() -> Self {
        Self {
            gap_open: NUCLEOTIDE_GAP_OPEN,
            gap_extend: NUCLEOTIDE_GAP_EXTEND,
            matrix: MatrixSource::Identity {
                match_score: NUCLEOTIDE_LOCAL_MATCH,
                mismatch_score: NUCLEOTIDE_LOCAL_MISMATCH,
            },
            penalize_terminal_gaps: false,
        }
    }

    pub fn nucleotide_global() -> Self {
        Self {
            matrix: MatrixSource::Identity {
                match_score: NUCLEOTIDE_GLOBAL_MATCH,
                mismatch_score: NUCLEOTIDE_GLOBAL_MISMATCH,
            },
            ..Self::nucleotide_local()
        }
    }

    pub fn protein() -> Self {
        Self {
            gap_open: PROTEIN_GAP_OPEN,
            gap_extend: PROTEIN_GAP_EXTEND,
            matrix: MatrixSource::Blosum50,
            penalize_terminal_gaps: false,
        }
    }

    pub fn with_gap_penalties(mut self, gap_open: f64, gap_extend: f64) -> Self {
        self.gap_open = gap_open;
        self.gap_extend = gap_extend;
        self
    }

    /// Replaces match/mismatch or BLOSUM50 scoring.
    pub fn with_substitution_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.matrix = MatrixSource::Custom(matrix);
        self
    }

    pub fn with_penalize_terminal_gaps(mut self, penalize: bool) -> Self {
        self.penalize_terminal_gaps = penalize;
        self
    }

    pub fn substitution_matrix(&self) -> Cow<'_, SubstitutionMatrix> {
        match &self.matrix {
            MatrixSource::Identity {
                match_score,
                mismatch_score,
            } => Cow::Owned(SubstitutionMatrix::identity(
                *match_score,
                *mismatch_score,
                NUCLEOTIDE_ALPHABET,
            )),
            MatrixSource::Blosum50 => Cow::Borrowed(&*BLOSUM50),
            MatrixSource::Custom(matrix) => Cow::Borrowed(matrix),
        }
    }

    pub fn local_align(&self, seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
        local_pairwise_align(
            seq1,
            seq2,
            self.gap_open,
            self.gap_extend,
            &self.substitution_matrix(),
        )
    }

    pub fn global_align(&self, seq1: &Profile, seq2: &Profile) -> Result<PairwiseAlignment> {
        global_pairwise_align(
            seq1,
            seq2,
            self.gap_open,
            self.gap_extend,
            &self.substitution_matrix(),
            self.penalize_terminal_gaps,
        )
    }
}
