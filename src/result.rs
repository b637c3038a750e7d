use std::fmt;

use crate::profile::{is_gap, SequenceKind};

/// One member of an aligned profile, gaps included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    pub id: String,
    pub kind: SequenceKind,
    pub symbols: Vec<u8>,
}

impl AlignedSequence {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The aligned symbols with gaps removed.
    pub fn ungapped(&self) -> Vec<u8> {
        self.symbols.iter().copied().filter(|&c| !is_gap(c)).collect()
    }

    pub fn symbol_string(&self) -> String {
        String::from_utf8_lossy(&self.symbols).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseAlignment {
    pub aligned1: Vec<AlignedSequence>,
    pub aligned2: Vec<AlignedSequence>,
    pub score: f64,
    /// Inclusive `(start, end)` of the aligned region in each input, in
    /// ungapped coordinates. `None` when no column of that input was aligned.
    pub start_end_positions: [Option<(usize, usize)>; 2],
}

impl PairwiseAlignment {
    /// Number of aligned columns.
    pub fn len(&self) -> usize {
        self.aligned1.first().map_or(0, AlignedSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All aligned sequences, profile 1 members first.
    pub fn sequences(&self) -> impl Iterator<Item = &AlignedSequence> {
        self.aligned1.iter().chain(self.aligned2.iter())
    }
}

impl fmt::Display for PairwiseAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seq in self.sequences() {
            writeln!(f, "{}\t{}", seq.id, seq.symbol_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(id: &str, symbols: &str) -> AlignedSequence {
        AlignedSequence {
            id: id.to_string(),
            kind: SequenceKind::Generic,
            symbols: symbols.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_ungapped() {
        assert_eq!(aligned("0", "AW-HE").ungapped(), b"AWHE".to_vec());
    }

    #[test]
    fn test_display() {
        let alignment = PairwiseAlignment {
            aligned1: vec![aligned("query", "AWGHE")],
            aligned2: vec![aligned("1", "AW-HE")],
            score: 28.0,
            start_end_positions: [Some((4, 8)), Some((1, 4))],
        };
        assert_eq!(alignment.len(), 5);
        assert_eq!(alignment.to_string(), "query\tAWGHE\n1\tAW-HE\n");
    }
}
