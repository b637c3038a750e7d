use crate::{DEFAULT_GAP_EXTEND, DEFAULT_GAP_OPEN, DEFAULT_GAP_SUBSTITUTION_SCORE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    Local,      // Smith-Waterman
    Global,     // Needleman-Wunsch, terminal gaps penalized
    SemiGlobal, // Needleman-Wunsch, free terminal gaps
}

impl AlignmentMode {
    pub fn is_local(self) -> bool {
        self == AlignmentMode::Local
    }

    /// Score of the "start a new alignment here" candidate. Zero lets local
    /// alignments restart anywhere; global alignments never take it.
    pub fn new_alignment_score(self) -> f64 {
        match self {
            AlignmentMode::Local => 0.0,
            AlignmentMode::Global | AlignmentMode::SemiGlobal => f64::NEG_INFINITY,
        }
    }

    /// Whether gaps running past the last column of either input are charged.
    /// Only semi-global alignment exempts them.
    pub fn penalize_terminal_gaps(self) -> bool {
        self != AlignmentMode::SemiGlobal
    }

    pub fn global(penalize_terminal_gaps: bool) -> Self {
        if penalize_terminal_gaps {
            AlignmentMode::Global
        } else {
            AlignmentMode::SemiGlobal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentParams {
    pub mode: AlignmentMode,
    pub gap_open: f64,
    pub gap_extend: f64,
    pub gap_substitution_score: f64,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            mode: AlignmentMode::SemiGlobal,
            gap_open: DEFAULT_GAP_OPEN,
            gap_extend: DEFAULT_GAP_EXTEND,
            gap_substitution_score: DEFAULT_GAP_SUBSTITUTION_SCORE,
        }
    }
}
